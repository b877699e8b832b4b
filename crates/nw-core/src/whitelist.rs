//! Whitelist evaluation over raw comma-separated pattern lists
//!
//! The whitelist arrives as one configuration string, e.g.
//! `"example.com,app.example.org"`. Each evaluation re-derives the entry set
//! from the raw string; nothing is cached across calls.

use log::debug;
use thiserror::Error;

use crate::domain::parse_host;
use crate::matcher::match_hosts;
use crate::types::Decision;

/// Literal entry that allows every navigation target.
const WILDCARD: &str = "*";

/// Reasons a navigation target is denied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WhitelistError {
    /// No whitelist was configured at all.
    #[error("no whitelist configured")]
    ConfigurationMissing,
    /// The target URL did not resolve to a domain and tld.
    #[error("no resolvable host in url: {url}")]
    UnresolvableHost { url: String },
    /// Every whitelist entry was exhausted without a match.
    #[error("url does not match the whitelist: {url}")]
    NotWhitelisted { url: String },
}

/// Evaluate a target URL against a raw comma-separated whitelist.
///
/// Deterministic and side-effect free; malformed inputs yield a decision,
/// never an error.
pub fn is_whitelisted(url: &str, raw_whitelist: &str) -> Decision {
    match ensure_whitelisted(url, Some(raw_whitelist)) {
        Ok(()) => Decision::Allow,
        Err(_) => Decision::Deny,
    }
}

/// Evaluate a target URL and report the denial reason.
///
/// `raw_whitelist` is `None` when the configuration carries no whitelist;
/// an empty string behaves the same way. Entries that fail to parse are
/// skipped, never aborting evaluation of the remaining entries.
pub fn ensure_whitelisted(url: &str, raw_whitelist: Option<&str>) -> Result<(), WhitelistError> {
    let raw = match raw_whitelist {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(WhitelistError::ConfigurationMissing),
    };

    // Entries are split verbatim. No trimming: " *" is not the wildcard, and
    // a padded entry simply fails to parse below.
    let entries: Vec<&str> = raw.split(',').collect();
    if entries.is_empty() || entries.iter().any(|entry| *entry == WILDCARD) {
        debug!("whitelist wildcard, allowing {url}");
        return Ok(());
    }

    let target = parse_host(url).ok_or_else(|| WhitelistError::UnresolvableHost {
        url: url.to_string(),
    })?;

    for entry in entries {
        let Some(candidate) = parse_host(entry) else {
            debug!("skipping unparseable whitelist entry {entry:?}");
            continue;
        };

        if match_hosts(&target, &candidate) {
            debug!("{url} allowed by whitelist entry {entry:?}");
            return Ok(());
        }
    }

    Err(WhitelistError::NotWhitelisted {
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_whitelist_denies() {
        assert_eq!(is_whitelisted("https://example.com", ""), Decision::Deny);
        assert_eq!(
            ensure_whitelisted("https://example.com", None),
            Err(WhitelistError::ConfigurationMissing)
        );
        assert_eq!(
            ensure_whitelisted("https://example.com", Some("")),
            Err(WhitelistError::ConfigurationMissing)
        );
    }

    #[test]
    fn test_wildcard_allows_everything() {
        assert_eq!(is_whitelisted("https://example.com", "*"), Decision::Allow);
        assert_eq!(is_whitelisted("https://anything.org/x", "*"), Decision::Allow);
        // The wildcard short-circuits before the target is parsed
        assert_eq!(is_whitelisted("not a url at all", "*"), Decision::Allow);
    }

    #[test]
    fn test_wildcard_anywhere_in_list() {
        assert_eq!(
            is_whitelisted("https://example.com", "*,anything.com"),
            Decision::Allow
        );
        assert_eq!(
            is_whitelisted("https://example.com", "anything.com,*"),
            Decision::Allow
        );
    }

    #[test]
    fn test_padded_wildcard_is_not_wildcard() {
        assert_eq!(is_whitelisted("https://example.com", " *"), Decision::Deny);
        assert_eq!(
            is_whitelisted("https://example.com", "other.com, *"),
            Decision::Deny
        );
    }

    #[test]
    fn test_exact_match_allows() {
        assert_eq!(
            is_whitelisted("https://example.com", "example.com"),
            Decision::Allow
        );
    }

    #[test]
    fn test_bare_domain_covers_subdomains() {
        assert_eq!(
            is_whitelisted("https://www.example.com", "example.com"),
            Decision::Allow
        );
        assert_eq!(
            is_whitelisted("https://a.b.example.com", "example.com"),
            Decision::Allow
        );
    }

    #[test]
    fn test_distinct_domains_denied() {
        assert_eq!(
            is_whitelisted("https://example.org", "example.com"),
            Decision::Deny
        );
    }

    #[test]
    fn test_unparseable_target_denied() {
        assert_eq!(is_whitelisted("", "example.com"), Decision::Deny);
        assert_eq!(is_whitelisted("localhost", "example.com"), Decision::Deny);
        assert_eq!(
            ensure_whitelisted("http://192.168.0.1", Some("example.com")),
            Err(WhitelistError::UnresolvableHost {
                url: "http://192.168.0.1".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        assert_eq!(
            is_whitelisted("https://example.com", "not a domain!!,example.com"),
            Decision::Allow
        );
        assert_eq!(
            is_whitelisted("https://example.com", "not a domain!!"),
            Decision::Deny
        );
    }

    #[test]
    fn test_unpadded_entries_only() {
        // The padded second entry fails to parse and is skipped
        assert_eq!(
            is_whitelisted("https://example.org", "example.com, example.org"),
            Decision::Deny
        );
    }

    #[test]
    fn test_subdomain_last_label_rule() {
        // Single-label subdomains on both sides: labels must be equal
        assert_eq!(
            is_whitelisted("https://app.example.com", "service.example.com"),
            Decision::Deny
        );
        assert_eq!(
            is_whitelisted("https://app.example.com", "app.example.com"),
            Decision::Allow
        );
        // Equal trailing labels across different chains
        assert_eq!(
            is_whitelisted("https://foo.app.example.com", "app.example.com"),
            Decision::Allow
        );
        assert_eq!(
            is_whitelisted("https://www.app.example.com", "bar.app.example.com"),
            Decision::Allow
        );
        // A target without a subdomain never satisfies a subdomain candidate
        assert_eq!(
            is_whitelisted("https://example.com", "app.example.com"),
            Decision::Deny
        );
    }

    #[test]
    fn test_multi_label_tld() {
        assert_eq!(
            is_whitelisted("https://www.example.co.uk", "example.co.uk"),
            Decision::Allow
        );
        assert_eq!(
            is_whitelisted("https://example.co.uk", "example.uk"),
            Decision::Deny
        );
    }

    #[test]
    fn test_case_insensitive_hosts() {
        assert_eq!(
            is_whitelisted("https://WWW.EXAMPLE.COM", "example.com"),
            Decision::Allow
        );
        assert_eq!(
            is_whitelisted("https://www.example.com", "EXAMPLE.COM"),
            Decision::Allow
        );
    }

    #[test]
    fn test_first_match_wins_over_later_entries() {
        assert_eq!(
            is_whitelisted("https://example.com", "example.com,example.org"),
            Decision::Allow
        );
        assert_eq!(
            is_whitelisted("https://example.org", "example.com,example.org"),
            Decision::Allow
        );
    }

    #[test]
    fn test_idempotent() {
        for _ in 0..3 {
            assert_eq!(
                is_whitelisted("https://www.example.com", "example.com"),
                Decision::Allow
            );
            assert_eq!(
                is_whitelisted("https://example.org", "example.com"),
                Decision::Deny
            );
        }
    }

    #[test]
    fn test_not_whitelisted_reports_url() {
        assert_eq!(
            ensure_whitelisted("https://example.org", Some("example.com")),
            Err(WhitelistError::NotWhitelisted {
                url: "https://example.org".to_string()
            })
        );
    }
}
