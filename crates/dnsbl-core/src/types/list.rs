use serde::{Deserialize, Serialize};

use crate::types::Target;

/// One DNSBL/DNSWL zone and what it applies to.
///
/// Entries come from the list table at load time and are shared read-only
/// across all workers; nothing mutates them after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Human-readable name of the list
    pub name: String,
    /// Zone hostname used for queries
    pub address: String,
    /// The list covers IPv4 addresses
    pub ip4: bool,
    /// The list covers IPv6 addresses
    pub ip6: bool,
    /// The list covers domain names
    pub domain: bool,
    /// The list is a blacklist
    pub blacklist: bool,
    /// The list is a whitelist
    pub whitelist: bool,
}

impl ListEntry {
    /// Whether this list covers the given target kind.
    #[must_use]
    pub const fn applies_to(&self, target: &Target) -> bool {
        match target {
            Target::Ip(_) => self.ip4,
            Target::Domain(_) => self.domain,
        }
    }

    /// Whether this list matches the requested check mode.
    #[must_use]
    pub const fn matches_mode(&self, mode: ListMode) -> bool {
        match mode {
            ListMode::Blacklist => self.blacklist,
            ListMode::Whitelist => self.whitelist,
        }
    }
}

/// Which kind of lists a run checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Hits mean the target is listed as bad; any hit fails the run
    Blacklist,
    /// Hits are informational; the run never fails
    Whitelist,
}

/// Select the entries a run will actually check: those covering the target
/// kind, matching the mode, and not excluded by zone name.
#[must_use]
pub fn filter_entries(
    entries: &[ListEntry],
    target: &Target,
    mode: ListMode,
    exclude: &[String],
) -> Vec<ListEntry> {
    entries
        .iter()
        .filter(|e| e.applies_to(target) && e.matches_mode(mode))
        .filter(|e| !exclude.iter().any(|x| x.eq_ignore_ascii_case(&e.address)))
        .cloned()
        .collect()
}
