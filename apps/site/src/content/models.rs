use serde::{Deserialize, Serialize};

use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    /// Display suffix such as `%`, `+` or `yrs`. Empty when the value stands alone.
    pub unit: String,
}

impl Metric {
    pub fn new(label: &str, value: f64, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            unit: unit.to_string(),
        }
    }

    /// Value formatted for display: integral values drop the fraction.
    pub fn display_value(&self) -> String {
        let value = if self.value.fract() == 0.0 {
            format!("{}", self.value as i64)
        } else {
            format!("{:.1}", self.value)
        };
        format!("{value}{}", self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub impact: Option<String>,
}

impl Achievement {
    pub fn new(title: &str, description: &str, impact: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            impact: impact.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// Everything the page shows for one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    pub variant: Variant,
    pub title: String,
    pub headline: String,
    pub tagline: String,
    pub summary: Vec<String>,
    pub metrics: Vec<Metric>,
    pub achievements: Vec<Achievement>,
    pub skills: Vec<String>,
    pub cta: CallToAction,
}

impl ContentBundle {
    /// Fields that must carry text for the page to render meaningfully.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.headline.trim().is_empty() {
            missing.push("headline");
        }
        if self.summary.iter().all(|p| p.trim().is_empty()) {
            missing.push("summary");
        }
        if self.metrics.is_empty() {
            missing.push("metrics");
        }
        if self.achievements.is_empty() {
            missing.push("achievements");
        }
        if self.cta.href.trim().is_empty() {
            missing.push("cta");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_display_drops_integral_fraction() {
        assert_eq!(Metric::new("Tickets", 12000.0, "+").display_value(), "12000+");
        assert_eq!(Metric::new("CSAT", 98.5, "%").display_value(), "98.5%");
        assert_eq!(Metric::new("Years", 6.0, "").display_value(), "6");
    }

    #[test]
    fn test_missing_fields_reports_blank_text() {
        let bundle = ContentBundle {
            variant: Variant::General,
            title: " ".to_string(),
            headline: "Hello".to_string(),
            tagline: String::new(),
            summary: vec![String::new()],
            metrics: Vec::new(),
            achievements: vec![Achievement::new("A", "B", None)],
            skills: Vec::new(),
            cta: CallToAction {
                label: "Contact".to_string(),
                href: "mailto:me@example.com".to_string(),
            },
        };
        assert_eq!(bundle.missing_fields(), vec!["title", "summary", "metrics"]);
    }
}
