//! The built-in DNSBL/DNSWL table.
//!
//! Shipped as a CSV resource compiled into the binary; one row per list
//! with the zones' coverage and polarity flags. A malformed row is a
//! startup error rather than a silently skipped list.

use csv::ReaderBuilder;
use dnsbl_core::{CheckError, ListEntry, Result};

const BUILTIN: &str = include_str!("data/lists.csv");

/// Load the compiled-in list table.
pub fn load_builtin() -> Result<Vec<ListEntry>> {
    parse_table(BUILTIN)
}

/// Parse a CSV list table with a `name,address,ip4,ip6,domain,blacklist,
/// whitelist` header.
pub fn parse_table(raw: &str) -> Result<Vec<ListEntry>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let entry: ListEntry = row.map_err(|e| CheckError::ListTable(e.to_string()))?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_loads() {
        let entries = load_builtin().unwrap();
        assert!(!entries.is_empty());

        // Every entry covers at least one target kind and has a polarity.
        for entry in &entries {
            assert!(!entry.address.is_empty(), "{}", entry.name);
            assert!(entry.ip4 || entry.ip6 || entry.domain, "{}", entry.address);
            assert!(entry.blacklist || entry.whitelist, "{}", entry.address);
        }
    }

    #[test]
    fn builtin_table_has_no_duplicate_zones() {
        let entries = load_builtin().unwrap();
        let mut zones: Vec<_> = entries.iter().map(|e| e.address.as_str()).collect();
        zones.sort_unstable();
        let before = zones.len();
        zones.dedup();
        assert_eq!(zones.len(), before);
    }

    #[test]
    fn parses_well_formed_rows() {
        let raw = "\
name,address,ip4,ip6,domain,blacklist,whitelist
Example BL,bl.example.org,true,false,false,true,false
Example DBL,dbl.example.org,false,false,true,true,false
";
        let entries = parse_table(raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].address, "bl.example.org");
        assert!(entries[0].ip4);
        assert!(!entries[0].domain);
        assert!(entries[1].domain);
    }

    #[test]
    fn malformed_row_is_an_error() {
        let raw = "\
name,address,ip4,ip6,domain,blacklist,whitelist
Example BL,bl.example.org,true,false,false,true,false
Broken,broken.example.org,not-a-bool,false,false,true,false
";
        assert!(matches!(
            parse_table(raw),
            Err(CheckError::ListTable(_))
        ));
    }
}
