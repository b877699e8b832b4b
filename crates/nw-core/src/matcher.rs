//! Tiered host matching
//!
//! A whitelist candidate can match a target at three granularities:
//! exact host, bare registrable domain (candidate has no subdomain), or
//! shared trailing subdomain label. Pure predicate, no state.

use crate::types::ParsedHost;

/// Decide whether a whitelist candidate matches the target host.
pub fn match_hosts(target: &ParsedHost, candidate: &ParsedHost) -> bool {
    // Tier 1: exact structural equality
    if target == candidate {
        return true;
    }

    // Tier 2: registrable hosts must agree before anything else
    if target.base_host() != candidate.base_host() {
        return false;
    }

    // Tier 3: a candidate without a subdomain covers every subdomain
    if !candidate.has_subdomain() {
        return true;
    }

    // Tier 4: both subdomain chains must agree on their trailing label
    match_subdomains(&target.subdomain, &candidate.subdomain)
}

/// Subdomain chains match when equal as whole strings or when the final
/// dot-separated label of each is equal.
fn match_subdomains(target: &str, candidate: &str) -> bool {
    if target == candidate {
        return true;
    }

    last_label(target) == last_label(candidate)
}

fn last_label(subdomain: &str) -> &str {
    subdomain.rsplit('.').next().unwrap_or(subdomain)
}
