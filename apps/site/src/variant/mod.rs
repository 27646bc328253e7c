//! Variant selection: which portfolio persona a request is served.
//!
//! The resolver maps the request host onto a `Variant`; the middleware attaches
//! that decision to the request so handlers read it through `RequestVariant`.

pub mod middleware;
pub mod resolver;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use middleware::{resolve_request_variant, RequestVariant};
pub use resolver::HostPatterns;

/// The closed set of content personas served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    General,
    SoftwareEngineering,
    CustomerService,
}

impl Variant {
    /// All variants in display order.
    pub const ALL: [Variant; 3] = [
        Variant::General,
        Variant::SoftwareEngineering,
        Variant::CustomerService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::General => "general",
            Variant::SoftwareEngineering => "software_engineering",
            Variant::CustomerService => "customer_service",
        }
    }

    /// Short human label used in navigation.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::General => "Overview",
            Variant::SoftwareEngineering => "Software Engineering",
            Variant::CustomerService => "Customer Service",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Accepts snake_case or kebab-case slugs, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "general" => Ok(Variant::General),
            "software_engineering" => Ok(Variant::SoftwareEngineering),
            "customer_service" => Ok(Variant::CustomerService),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
