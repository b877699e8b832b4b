//! NavWarden CLI
//!
//! Checks navigation URLs against a configured whitelist and shows how
//! hostnames decompose on public-suffix boundaries.

mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use nw_core::whitelist::ensure_whitelisted;
use nw_core::parse_host;

use crate::config::GuardConfig;

/// Environment variable consulted when no `--whitelist` flag is given.
const WHITELIST_ENV: &str = "NW_WHITELIST_URL";

#[derive(Parser)]
#[command(name = "nw-cli")]
#[command(about = "NavWarden navigation whitelist checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a URL against the configured whitelist
    Check {
        /// URL the navigation targets
        url: String,

        /// Comma-separated whitelist patterns
        #[arg(short, long)]
        whitelist: Option<String>,

        /// JSON config file carrying a whitelistUrl field
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a hostname decomposes into subdomain, domain, and tld
    Parse {
        /// Hostname or URL to decompose
        input: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            url,
            whitelist,
            config,
            verbose,
        } => cmd_check(&url, whitelist, config.as_deref(), verbose),
        Commands::Parse { input, json } => cmd_parse(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(
    url: &str,
    whitelist: Option<String>,
    config: Option<&Path>,
    verbose: bool,
) -> Result<ExitCode, String> {
    let raw = resolve_whitelist(whitelist, config)?;

    if verbose {
        match &raw {
            Some(raw) => println!("whitelist: {raw}"),
            None => println!("whitelist: (none)"),
        }
    }

    match ensure_whitelisted(url, raw.as_deref()) {
        Ok(()) => {
            println!("ALLOW {url}");
            Ok(ExitCode::SUCCESS)
        }
        Err(reason) => {
            println!("DENY {url} ({reason})");
            Ok(ExitCode::from(2))
        }
    }
}

/// Whitelist resolution order: flag, then environment, then config file.
fn resolve_whitelist(
    flag: Option<String>,
    config: Option<&Path>,
) -> Result<Option<String>, String> {
    if flag.is_some() {
        return Ok(flag);
    }

    if let Ok(value) = std::env::var(WHITELIST_ENV) {
        return Ok(Some(value));
    }

    match config {
        Some(path) => Ok(GuardConfig::load(path)?.whitelist_url),
        None => Ok(None),
    }
}

fn cmd_parse(input: &str, json: bool) -> Result<ExitCode, String> {
    let parsed =
        parse_host(input).ok_or_else(|| format!("no resolvable host in '{input}'"))?;

    if json {
        let doc = serde_json::json!({
            "subdomain": parsed.subdomain,
            "domain": parsed.domain,
            "tld": parsed.tld,
        });
        println!("{doc}");
    } else {
        println!("subdomain: {}", parsed.subdomain);
        println!("domain:    {}", parsed.domain);
        println!("tld:       {}", parsed.tld);
    }

    Ok(ExitCode::SUCCESS)
}
