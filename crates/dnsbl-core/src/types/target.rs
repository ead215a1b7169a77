use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::error::{CheckError, Result};

/// What is being checked against the lists.
///
/// The variant doubles as the lookup-strategy selector: an IPv4 target is
/// queried with its octets reversed under the list zone, a domain target is
/// queried as a suffix match. Values can only be built through the
/// validating constructors, so no DNS work ever starts for a malformed
/// target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Target {
    /// An IPv4 address
    Ip(Ipv4Addr),
    /// A DNS domain name
    Domain(String),
}

impl Target {
    /// Parse an IPv4 target, rejecting anything that is not a strict
    /// dotted-quad address.
    pub fn ip(s: &str) -> Result<Self> {
        s.parse::<Ipv4Addr>()
            .map(Self::Ip)
            .map_err(|_| CheckError::InvalidIp(s.to_string()))
    }

    /// Parse a domain target, validating DNS name syntax.
    pub fn domain(s: &str) -> Result<Self> {
        if is_valid_domain(s) {
            Ok(Self::Domain(s.trim_end_matches('.').to_ascii_lowercase()))
        } else {
            Err(CheckError::InvalidDomain(s.to_string()))
        }
    }

    /// Whether this target is an IPv4 address.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        matches!(self, Self::Ip(_))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip(ip) => ip.fmt(f),
            Self::Domain(domain) => domain.fmt(f),
        }
    }
}

/// DNS name syntax check: labels of 1-63 alphanumeric/hyphen characters,
/// no leading or trailing hyphen, 253 characters total.
fn is_valid_domain(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > 253 {
        return false;
    }

    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
