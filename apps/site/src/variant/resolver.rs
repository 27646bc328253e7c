//! Host → Variant resolution.
//!
//! Resolution is total: any host that does not carry a known prefix as its
//! leftmost label falls through to `Variant::General`.

use crate::variant::Variant;

/// Default prefix table: `swe.` and `csr.` subdomains.
const DEFAULT_PREFIXES: &[(&str, Variant)] = &[
    ("swe", Variant::SoftwareEngineering),
    ("csr", Variant::CustomerService),
];

/// Immutable table of host prefixes and the variant each one selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPatterns {
    prefixes: Vec<(String, Variant)>,
}

impl Default for HostPatterns {
    fn default() -> Self {
        Self::new(
            DEFAULT_PREFIXES
                .iter()
                .map(|(prefix, variant)| (prefix.to_string(), *variant)),
        )
    }
}

impl HostPatterns {
    /// Builds a table from `(prefix, variant)` pairs. Prefixes are lower-cased;
    /// a later duplicate prefix replaces the earlier mapping.
    pub fn new(pairs: impl IntoIterator<Item = (String, Variant)>) -> Self {
        let mut prefixes: Vec<(String, Variant)> = Vec::new();
        for (prefix, variant) in pairs {
            let prefix = prefix.trim().to_ascii_lowercase();
            if prefix.is_empty() {
                continue;
            }
            match prefixes.iter_mut().find(|(p, _)| *p == prefix) {
                Some(existing) => existing.1 = variant,
                None => prefixes.push((prefix, variant)),
            }
        }
        Self { prefixes }
    }

    /// Resolves a raw host header value to exactly one variant.
    ///
    /// Algorithm:
    /// 1. Strip the port suffix (bracketed IPv6 literals keep their brackets)
    /// 2. Drop a trailing root dot
    /// 3. Take the leftmost `.`-separated label
    /// 4. Exact, case-insensitive match against the prefix table
    /// 5. Anything else → `General`
    pub fn resolve(&self, host: &str) -> Variant {
        let hostname = strip_port(host.trim());
        let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
        let label = hostname.split('.').next().unwrap_or_default();

        if label.is_empty() {
            return Variant::General;
        }

        self.prefixes
            .iter()
            .find(|(prefix, _)| prefix.eq_ignore_ascii_case(label))
            .map(|(_, variant)| *variant)
            .unwrap_or(Variant::General)
    }

    /// First configured prefix that selects `variant`, if any.
    pub fn prefix_for(&self, variant: Variant) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(_, v)| *v == variant)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Public host serving `variant` under the apex `site_domain`.
    ///
    /// `General` is served from the apex itself. Other variants need a
    /// configured prefix; without one there is no host that reaches them.
    pub fn host_for(&self, variant: Variant, site_domain: &str) -> Option<String> {
        let domain = site_domain.trim().trim_end_matches('.');
        match variant {
            Variant::General => Some(domain.to_string()),
            Variant::SoftwareEngineering | Variant::CustomerService => self
                .prefix_for(variant)
                .map(|prefix| format!("{prefix}.{domain}")),
        }
    }

    pub fn entries(&self) -> &[(String, Variant)] {
        &self.prefixes
    }
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        // [v6]:port keeps the bracketed literal
        return match rest.find(']') {
            Some(end) => &host[..end + 2],
            None => host,
        };
    }
    match host.split_once(':') {
        Some((name, _port)) => name,
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> HostPatterns {
        HostPatterns::default()
    }

    #[test]
    fn test_swe_prefix_resolves_software_engineering() {
        assert_eq!(
            patterns().resolve("swe.example.com"),
            Variant::SoftwareEngineering
        );
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        assert_eq!(
            patterns().resolve("SWE.example.com"),
            Variant::SoftwareEngineering
        );
        assert_eq!(patterns().resolve("Csr.Example.COM"), Variant::CustomerService);
    }

    #[test]
    fn test_csr_prefix_resolves_customer_service() {
        assert_eq!(patterns().resolve("csr.example.com"), Variant::CustomerService);
    }

    #[test]
    fn test_apex_and_www_resolve_general() {
        assert_eq!(patterns().resolve("example.com"), Variant::General);
        assert_eq!(patterns().resolve("www.example.com"), Variant::General);
    }

    #[test]
    fn test_no_substring_false_match() {
        assert_eq!(patterns().resolve("swedish.example.com"), Variant::General);
        assert_eq!(patterns().resolve("csrf.example.com"), Variant::General);
        assert_eq!(patterns().resolve("my-swe.example.com"), Variant::General);
    }

    #[test]
    fn test_port_suffix_is_ignored() {
        assert_eq!(
            patterns().resolve("swe.example.com:3000"),
            Variant::SoftwareEngineering
        );
        assert_eq!(
            patterns().resolve("csr.localhost:8080"),
            Variant::CustomerService
        );
        assert_eq!(patterns().resolve("localhost:3000"), Variant::General);
    }

    #[test]
    fn test_trailing_root_dot_is_ignored() {
        assert_eq!(
            patterns().resolve("swe.example.com."),
            Variant::SoftwareEngineering
        );
    }

    #[test]
    fn test_single_label_alias_matches_prefix() {
        assert_eq!(patterns().resolve("swe"), Variant::SoftwareEngineering);
        assert_eq!(patterns().resolve("swe:3000"), Variant::SoftwareEngineering);
    }

    #[test]
    fn test_malformed_hosts_fail_open_to_general() {
        for host in ["", "   ", ".", ":3000", ".swe.example.com", "[::1]:3000", "[::1", "127.0.0.1"] {
            assert_eq!(
                patterns().resolve(host),
                Variant::General,
                "host {host:?} should resolve to general"
            );
        }
    }

    #[test]
    fn test_injected_table_replaces_defaults() {
        let custom = HostPatterns::new([
            ("dev".to_string(), Variant::SoftwareEngineering),
            ("Support".to_string(), Variant::CustomerService),
        ]);
        assert_eq!(custom.resolve("dev.example.com"), Variant::SoftwareEngineering);
        assert_eq!(custom.resolve("support.example.com"), Variant::CustomerService);
        assert_eq!(custom.resolve("swe.example.com"), Variant::General);
    }

    #[test]
    fn test_empty_table_always_general() {
        let empty = HostPatterns::new(Vec::new());
        assert_eq!(empty.resolve("swe.example.com"), Variant::General);
    }

    #[test]
    fn test_duplicate_prefix_last_wins() {
        let table = HostPatterns::new([
            ("swe".to_string(), Variant::CustomerService),
            ("SWE".to_string(), Variant::SoftwareEngineering),
        ]);
        assert_eq!(table.entries().len(), 1);
        assert_eq!(table.resolve("swe.example.com"), Variant::SoftwareEngineering);
    }

    #[test]
    fn test_host_for_builds_sibling_hosts() {
        let p = patterns();
        assert_eq!(
            p.host_for(Variant::General, "example.com").as_deref(),
            Some("example.com")
        );
        assert_eq!(
            p.host_for(Variant::SoftwareEngineering, "example.com").as_deref(),
            Some("swe.example.com")
        );
        assert_eq!(
            p.host_for(Variant::CustomerService, "example.com.").as_deref(),
            Some("csr.example.com")
        );
    }

    #[test]
    fn test_host_for_unmapped_variant_is_none() {
        let only_swe = HostPatterns::new([("swe".to_string(), Variant::SoftwareEngineering)]);
        assert!(only_swe
            .host_for(Variant::CustomerService, "example.com")
            .is_none());
    }

    #[test]
    fn test_host_for_roundtrips_through_resolve() {
        let p = patterns();
        for v in Variant::ALL {
            let host = p.host_for(v, "example.com").unwrap();
            assert_eq!(p.resolve(&host), v);
        }
    }
}
