//! NavWarden Core Library
//!
//! This crate decides whether a navigation target URL is permitted by a
//! configured, comma-separated whitelist of host patterns. Hostnames are
//! decomposed into (subdomain, domain, tld) on Public Suffix List boundaries
//! and compared with a tiered policy: exact host, bare registrable domain, or
//! shared trailing subdomain label.
//!
//! The whole crate is a pure, synchronous predicate over its string inputs:
//! no I/O, no shared state, no caching. Calls are safe from any number of
//! threads.
//!
//! # Modules
//!
//! - `types`: shared type definitions
//! - `url`: host extraction from URL strings
//! - `domain`: public-suffix-aware hostname decomposition
//! - `matcher`: the tiered host-matching predicate
//! - `whitelist`: evaluation over raw comma-separated whitelists
//!
//! # Examples
//!
//! ```
//! use nw_core::{is_whitelisted, Decision};
//!
//! assert_eq!(is_whitelisted("https://www.example.com", "example.com"), Decision::Allow);
//! assert_eq!(is_whitelisted("https://example.org", "example.com"), Decision::Deny);
//! assert_eq!(is_whitelisted("https://anything.net", "*"), Decision::Allow);
//! ```

pub mod domain;
pub mod matcher;
pub mod types;
pub mod url;
pub mod whitelist;

// Re-export commonly used items
pub use domain::parse_host;
pub use matcher::match_hosts;
pub use types::{Decision, ParsedHost};
pub use whitelist::{ensure_whitelisted, is_whitelisted, WhitelistError};
