//! Built-in page copy for each variant.

use crate::content::models::{Achievement, CallToAction, ContentBundle, Metric};
use crate::variant::Variant;

const CONTACT_HREF: &str = "mailto:hello@jordanavery.dev";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn general() -> ContentBundle {
    ContentBundle {
        variant: Variant::General,
        title: "Jordan Avery".to_string(),
        headline: "Engineer by training, problem-solver by habit".to_string(),
        tagline: "Building reliable software and keeping the people who use it happy".to_string(),
        summary: strings(&[
            "I split my career between shipping backend systems and running front-line support \
             teams. Both jobs come down to the same thing: understanding what someone actually \
             needs and fixing it properly.",
            "Pick a portfolio below for the detailed version of either side.",
        ]),
        metrics: vec![
            Metric::new("Years of experience", 8.0, "+"),
            Metric::new("Production services shipped", 14.0, ""),
            Metric::new("Customer satisfaction", 97.0, "%"),
        ],
        achievements: vec![
            Achievement::new(
                "Bridged support and engineering",
                "Set up a shared escalation path between the support desk and the platform team.",
                Some("Escalation turnaround cut from days to hours"),
            ),
            Achievement::new(
                "Led a payments migration",
                "Moved checkout traffic to a new processor without a customer-visible outage.",
                None,
            ),
        ],
        skills: strings(&["Rust", "TypeScript", "PostgreSQL", "Zendesk", "Team leadership"]),
        cta: CallToAction {
            label: "Get in touch".to_string(),
            href: CONTACT_HREF.to_string(),
        },
    }
}

pub fn software_engineering() -> ContentBundle {
    ContentBundle {
        variant: Variant::SoftwareEngineering,
        title: "Jordan Avery · Software Engineer".to_string(),
        headline: "Backend engineer focused on reliability and latency".to_string(),
        tagline: "Distributed services, data pipelines and the tooling around them".to_string(),
        summary: strings(&[
            "Six years building and operating backend services in Rust, Go and TypeScript, \
             most recently owning the order pipeline for a mid-size e-commerce platform.",
            "I care about boring deploys, clear runbooks and systems that degrade gracefully.",
        ]),
        metrics: vec![
            Metric::new("p99 latency reduction", 42.0, "%"),
            Metric::new("Requests served per day", 30.0, "M"),
            Metric::new("Uptime over last year", 99.95, "%"),
            Metric::new("Years in production engineering", 6.0, ""),
        ],
        achievements: vec![
            Achievement::new(
                "Rewrote the order ingestion service",
                "Replaced a queue-polling worker fleet with a streaming consumer and idempotent writes.",
                Some("p99 latency down 42%, infra cost down 30%"),
            ),
            Achievement::new(
                "Introduced structured tracing",
                "Rolled out request tracing across 20 services and wired it into on-call dashboards.",
                Some("Mean time to resolution halved"),
            ),
            Achievement::new(
                "Zero-downtime schema migrations",
                "Built an expand/contract migration workflow used by every team on the platform.",
                None,
            ),
        ],
        skills: strings(&[
            "Rust",
            "Go",
            "TypeScript",
            "PostgreSQL",
            "Kafka",
            "Kubernetes",
            "Observability",
        ]),
        cta: CallToAction {
            label: "Talk engineering".to_string(),
            href: CONTACT_HREF.to_string(),
        },
    }
}

pub fn customer_service() -> ContentBundle {
    ContentBundle {
        variant: Variant::CustomerService,
        title: "Jordan Avery · Customer Experience".to_string(),
        headline: "Customer experience lead who turns tickets into fixes".to_string(),
        tagline: "Support operations, escalation design and team coaching".to_string(),
        summary: strings(&[
            "Five years running support for a subscription product with customers in over \
             forty countries, from first-line agent to leading a team of twelve.",
            "I measure success by how few customers need to contact us twice.",
        ]),
        metrics: vec![
            Metric::new("Tickets resolved", 12000.0, "+"),
            Metric::new("CSAT", 98.5, "%"),
            Metric::new("First response time reduction", 60.0, "%"),
            Metric::new("Agents coached", 12.0, ""),
        ],
        achievements: vec![
            Achievement::new(
                "Redesigned the escalation process",
                "Introduced severity tiers and a shared queue with engineering for product defects.",
                Some("Repeat contacts down 35%"),
            ),
            Achievement::new(
                "Built the help center from scratch",
                "Wrote and maintained 150 articles driven by the top ticket categories.",
                Some("Ticket volume down 22% year over year"),
            ),
            Achievement::new(
                "Onboarding programme for new agents",
                "Paired shadowing with a two-week curriculum and weekly calibration reviews.",
                None,
            ),
        ],
        skills: strings(&[
            "Zendesk",
            "Intercom",
            "Escalation management",
            "Knowledge base writing",
            "Coaching",
            "SQL reporting",
        ]),
        cta: CallToAction {
            label: "Start a conversation".to_string(),
            href: CONTACT_HREF.to_string(),
        },
    }
}
