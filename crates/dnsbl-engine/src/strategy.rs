//! Lookup strategies: target + list entry -> DNS query -> classified outcome.
//!
//! Standard DNSBL pattern: reverse the IP octets and query under the zone.
//! Example: checking 1.2.3.4 against `bl.example.org` queries
//! `4.3.2.1.bl.example.org`. Domain lists are queried as `<domain>.<zone>`.
//! A valid listing answer must fall inside 127.0.0.0/8; anything else is a
//! protocol violation by the list, not a hit.

use std::net::IpAddr;

use dnsbl_core::{FailureKind, ListEntry, Outcome, Target};

use crate::resolver::{LookupError, Resolve};

/// Build the query name for a target under a list zone.
///
/// IPv4 targets reverse their octets: `1.2.3.4` under `bl.example.org`
/// becomes `4.3.2.1.bl.example.org`. Domain targets are prefixed as-is.
#[must_use]
pub fn query_name(target: &Target, zone: &str) -> String {
    match target {
        Target::Ip(ip) => {
            let o = ip.octets();
            format!("{}.{}.{}.{}.{zone}", o[3], o[2], o[1], o[0])
        }
        Target::Domain(domain) => format!("{domain}.{zone}"),
    }
}

/// Execute one lookup and classify the result.
pub async fn run_lookup(resolver: &dyn Resolve, target: &Target, entry: &ListEntry) -> Outcome {
    let name = query_name(target, &entry.address);

    match resolver.lookup(&name).await {
        Ok(answer) => classify_answer(target, &answer),
        Err(LookupError::NotFound) => Outcome::Miss,
        Err(LookupError::Timeout) => Outcome::Timeout,
        Err(LookupError::Resolver(msg)) => Outcome::Failure(FailureKind::Resolver(msg)),
    }
}

fn classify_answer(target: &Target, answer: &[IpAddr]) -> Outcome {
    if answer.is_empty() {
        return Outcome::Miss;
    }

    // IPv4 lists encode a reason code in 127.0.0.0/8; an answer outside
    // that range cannot mean "listed".
    if target.is_ip() {
        if let Some(bad) = answer.iter().find(|addr| !in_response_range(addr)) {
            return Outcome::Failure(FailureKind::WrongResponse(*bad));
        }
    }

    Outcome::Hit
}

const fn in_response_range(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.octets()[0] == 127,
        IpAddr::V6(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn entry(zone: &str) -> ListEntry {
        ListEntry {
            name: zone.to_string(),
            address: zone.to_string(),
            ip4: true,
            ip6: false,
            domain: true,
            blacklist: true,
            whitelist: false,
        }
    }

    #[test]
    fn reverses_ipv4_octets() {
        let target = Target::ip("1.2.3.4").unwrap();
        assert_eq!(query_name(&target, "bl.example.org"), "4.3.2.1.bl.example.org");

        let target = Target::ip("192.168.1.100").unwrap();
        assert_eq!(
            query_name(&target, "zen.spamhaus.org"),
            "100.1.168.192.zen.spamhaus.org"
        );
    }

    #[test]
    fn suffixes_domain_targets() {
        let target = Target::domain("example.com").unwrap();
        assert_eq!(
            query_name(&target, "dbl.spamhaus.org"),
            "example.com.dbl.spamhaus.org"
        );
    }

    #[test]
    fn in_range_answer_is_hit() {
        let target = Target::ip("8.8.8.8").unwrap();
        let answer = [IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2))];
        assert_eq!(classify_answer(&target, &answer), Outcome::Hit);
    }

    #[test]
    fn out_of_range_answer_is_wrong_response() {
        let target = Target::ip("8.8.8.8").unwrap();
        let bad = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let answer = [bad];
        assert_eq!(
            classify_answer(&target, &answer),
            Outcome::Failure(FailureKind::WrongResponse(bad))
        );
    }

    #[test]
    fn mixed_answer_with_one_bad_record_is_wrong_response() {
        let target = Target::ip("8.8.8.8").unwrap();
        let bad = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1));
        let answer = [IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2)), bad];
        assert_eq!(
            classify_answer(&target, &answer),
            Outcome::Failure(FailureKind::WrongResponse(bad))
        );
    }

    #[test]
    fn domain_answers_skip_the_range_check() {
        let target = Target::domain("example.com").unwrap();
        let answer = [IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1))];
        assert_eq!(classify_answer(&target, &answer), Outcome::Hit);
    }

    #[test]
    fn empty_answer_is_miss() {
        let target = Target::ip("8.8.8.8").unwrap();
        assert_eq!(classify_answer(&target, &[]), Outcome::Miss);
    }

    #[tokio::test]
    async fn resolver_errors_map_to_outcomes() {
        use crate::resolver::Resolve;
        use async_trait::async_trait;

        struct Failing(LookupError);

        #[async_trait]
        impl Resolve for Failing {
            async fn lookup(&self, _name: &str) -> Result<Vec<IpAddr>, LookupError> {
                Err(self.0.clone())
            }
        }

        let target = Target::ip("8.8.8.8").unwrap();
        let entry = entry("bl.example.org");

        assert_eq!(
            run_lookup(&Failing(LookupError::NotFound), &target, &entry).await,
            Outcome::Miss
        );
        assert_eq!(
            run_lookup(&Failing(LookupError::Timeout), &target, &entry).await,
            Outcome::Timeout
        );
        assert_eq!(
            run_lookup(
                &Failing(LookupError::Resolver("SERVFAIL".into())),
                &target,
                &entry
            )
            .await,
            Outcome::Failure(FailureKind::Resolver("SERVFAIL".into()))
        );
    }
}
