//! Content Registry: one bundle per variant, fixed at startup.
//!
//! Totality is structural: each variant has its own field and lookup is an
//! exhaustive `match`, so a new variant does not compile until it has copy.

use anyhow::{bail, Result};

use crate::content::data;
use crate::content::models::ContentBundle;
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq)]
pub struct ContentRegistry {
    general: ContentBundle,
    software_engineering: ContentBundle,
    customer_service: ContentBundle,
}

impl ContentRegistry {
    pub fn new(
        general: ContentBundle,
        software_engineering: ContentBundle,
        customer_service: ContentBundle,
    ) -> Self {
        Self {
            general,
            software_engineering,
            customer_service,
        }
    }

    /// Registry populated from the built-in page copy.
    pub fn builtin() -> Self {
        Self::new(
            data::general(),
            data::software_engineering(),
            data::customer_service(),
        )
    }

    pub fn get_content(&self, variant: Variant) -> &ContentBundle {
        match variant {
            Variant::General => &self.general,
            Variant::SoftwareEngineering => &self.software_engineering,
            Variant::CustomerService => &self.customer_service,
        }
    }

    /// Checks every bundle is filled in and registered under its own variant.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        for variant in Variant::ALL {
            let bundle = self.get_content(variant);
            if bundle.variant != variant {
                problems.push(format!(
                    "{variant}: bundle is tagged as {}",
                    bundle.variant
                ));
            }
            let missing = bundle.missing_fields();
            if !missing.is_empty() {
                problems.push(format!("{variant}: missing {}", missing.join(", ")));
            }
        }

        if !problems.is_empty() {
            bail!("content bundles incomplete: {}", problems.join("; "));
        }
        Ok(())
    }
}
