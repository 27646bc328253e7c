use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentRegistry;
use crate::variant::{HostPatterns, Variant};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub hosts: Arc<HostPatterns>,
    pub registry: Arc<ContentRegistry>,
}

impl AppState {
    pub fn new(config: Config, registry: ContentRegistry) -> Self {
        let hosts = Arc::new(config.host_patterns.clone());
        Self {
            config,
            hosts,
            registry: Arc::new(registry),
        }
    }

    /// Where a visitor goes to see `variant`: the variant's own subdomain when
    /// a site domain is configured, otherwise the host-independent preview path.
    pub fn variant_link(&self, variant: Variant) -> String {
        self.config
            .site_domain
            .as_deref()
            .and_then(|domain| self.hosts.host_for(variant, domain))
            .map(|host| format!("https://{host}/"))
            .unwrap_or_else(|| format!("/v/{}", variant.as_str()))
    }
}
