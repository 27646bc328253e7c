use std::net::{IpAddr, Ipv4Addr};

use anyhow::{bail, Context, Result};

use crate::variant::{HostPatterns, Variant};

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub rust_log: String,
    /// Apex domain, e.g. `example.com`. Enables absolute links between variants.
    pub site_domain: Option<String>,
    pub host_patterns: HostPatterns,
    /// Honour `X-Forwarded-Host` from a fronting proxy.
    pub trust_forwarded_host: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            rust_log: "info".to_string(),
            site_domain: None,
            host_patterns: HostPatterns::default(),
            trust_forwarded_host: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset and blank values are
    /// treated the same.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        let host_patterns = match var("VARIANT_HOST_PREFIXES") {
            Some(raw) => parse_host_prefixes(&raw)
                .context("VARIANT_HOST_PREFIXES must look like 'swe=software_engineering,csr=customer_service'")?,
            None => defaults.host_patterns,
        };

        Ok(Config {
            bind_addr: match var("BIND_ADDR") {
                Some(addr) => addr
                    .parse::<IpAddr>()
                    .with_context(|| format!("BIND_ADDR '{addr}' must be an IPv4 or IPv6 address"))?,
                None => defaults.bind_addr,
            },
            port: match var("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            site_domain: var("SITE_DOMAIN").and_then(|d| normalize_domain(&d)),
            host_patterns,
            trust_forwarded_host: match var("TRUST_FORWARDED_HOST") {
                Some(flag) => parse_bool(&flag).context("TRUST_FORWARDED_HOST must be true or false")?,
                None => defaults.trust_forwarded_host,
            },
        })
    }
}

/// Lower-cases and drops trailing root dots; nothing left means no domain.
fn normalize_domain(raw: &str) -> Option<String> {
    let domain = raw.trim().trim_end_matches('.').to_ascii_lowercase();
    (!domain.is_empty()).then_some(domain)
}

/// Parses `prefix=variant` pairs separated by commas.
pub fn parse_host_prefixes(raw: &str) -> Result<HostPatterns> {
    let mut pairs = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((prefix, variant)) = entry.split_once('=') else {
            bail!("entry '{entry}' is missing '='");
        };
        let prefix = prefix.trim();
        if prefix.is_empty() || prefix.contains('.') {
            bail!("entry '{entry}' needs a single DNS label as prefix");
        }
        let variant: Variant = variant
            .parse()
            .with_context(|| format!("entry '{entry}'"))?;
        pairs.push((prefix.to_string(), variant));
    }
    Ok(HostPatterns::new(pairs))
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}
