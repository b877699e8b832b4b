//! Core type definitions for NavWarden.

// =============================================================================
// Parsed Host
// =============================================================================

/// A hostname decomposed on public-suffix boundaries.
///
/// Two hosts are equal iff all three fields are equal; the subdomain is
/// compared as a whole dot-joined string, not label by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedHost {
    /// Dot-joined labels left of the registrable domain. Empty when the host
    /// is the bare registrable domain.
    pub subdomain: String,
    /// The registrable label immediately left of the effective TLD.
    pub domain: String,
    /// Effective top-level domain, possibly multi-label (e.g. "co.uk").
    pub tld: String,
}

impl ParsedHost {
    /// The registrable host used for base comparison.
    ///
    /// No separator is inserted between domain and tld. Every comparison
    /// builds both sides through this same function, so equality behaves like
    /// a dot-joined comparison except where two different domain/tld splits
    /// concatenate to the same string.
    pub fn base_host(&self) -> String {
        format!("{}{}", self.domain, self.tld)
    }

    /// Whether any labels precede the registrable domain.
    pub fn has_subdomain(&self) -> bool {
        !self.subdomain.is_empty()
    }
}

// =============================================================================
// Decision
// =============================================================================

/// Outcome of a whitelist evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The navigation target is permitted
    Allow,
    /// The navigation target is blocked
    Deny,
}

impl Decision {
    /// True for [`Decision::Allow`].
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }
}
