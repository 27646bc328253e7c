//! Server-rendered HTML for a content bundle.
//!
//! Markup is deliberately plain; every piece of bundle text goes through
//! `escape_html` before it lands in the document.

use crate::content::ContentBundle;
use crate::variant::Variant;

/// A link to another variant's page.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitcherLink {
    pub variant: Variant,
    pub href: String,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full page for `bundle`. `switcher` links whose variant equals
/// the bundle's are skipped.
pub fn render_page(bundle: &ContentBundle, switcher: &[SwitcherLink]) -> String {
    let mut body = format!(
        "<header><h1>{}</h1><p class=\"tagline\">{}</p></header>",
        escape_html(&bundle.headline),
        escape_html(&bundle.tagline)
    );

    body.push_str("<section class=\"summary\">");
    for paragraph in &bundle.summary {
        body.push_str(&format!("<p>{}</p>", escape_html(paragraph)));
    }
    body.push_str("</section>");

    body.push_str("<section class=\"metrics\"><ul>");
    for metric in &bundle.metrics {
        body.push_str(&format!(
            "<li><strong>{}</strong> {}</li>",
            escape_html(&metric.display_value()),
            escape_html(&metric.label)
        ));
    }
    body.push_str("</ul></section>");

    body.push_str("<section class=\"achievements\"><h2>Highlights</h2>");
    for achievement in &bundle.achievements {
        body.push_str(&format!(
            "<article><h3>{}</h3><p>{}</p>",
            escape_html(&achievement.title),
            escape_html(&achievement.description)
        ));
        if let Some(impact) = &achievement.impact {
            body.push_str(&format!("<p class=\"impact\">{}</p>", escape_html(impact)));
        }
        body.push_str("</article>");
    }
    body.push_str("</section>");

    if !bundle.skills.is_empty() {
        body.push_str("<section class=\"skills\"><h2>Skills</h2><ul>");
        for skill in &bundle.skills {
            body.push_str(&format!("<li>{}</li>", escape_html(skill)));
        }
        body.push_str("</ul></section>");
    }

    body.push_str(&format!(
        "<p class=\"cta\"><a href=\"{}\">{}</a></p>",
        escape_html(&bundle.cta.href),
        escape_html(&bundle.cta.label)
    ));

    let others: Vec<&SwitcherLink> = switcher
        .iter()
        .filter(|link| link.variant != bundle.variant)
        .collect();
    if !others.is_empty() {
        body.push_str("<nav class=\"variants\"><ul>");
        for link in others {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape_html(&link.href),
                escape_html(link.variant.label())
            ));
        }
        body.push_str("</ul></nav>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-variant="{variant}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#,
        variant = bundle.variant.as_str(),
        title = escape_html(&bundle.title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_contains_bundle_copy() {
        let registry = ContentRegistry::builtin();
        let bundle = registry.get_content(Variant::SoftwareEngineering);
        let html = render_page(bundle, &[]);
        assert!(html.contains(r#"data-variant="software_engineering""#));
        assert!(html.contains(&escape_html(&bundle.headline)));
        for achievement in &bundle.achievements {
            assert!(html.contains(&escape_html(&achievement.title)));
        }
    }

    #[test]
    fn test_page_renders_impact_and_cta() {
        let registry = ContentRegistry::builtin();
        let bundle = registry.get_content(Variant::CustomerService);
        let html = render_page(bundle, &[]);
        assert!(html.contains(r#"<p class="impact">Repeat contacts down 35%</p>"#));
        assert!(html.contains(&format!(
            r#"<a href="{}">{}</a>"#,
            bundle.cta.href, bundle.cta.label
        )));
        assert!(html.contains("<li><strong>98.5%</strong> CSAT</li>"));
    }

    #[test]
    fn test_bundle_text_is_escaped() {
        let mut bundle = ContentRegistry::builtin()
            .get_content(Variant::General)
            .clone();
        bundle.headline = "<script>alert(1)</script>".to_string();
        let html = render_page(&bundle, &[]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_switcher_skips_current_variant() {
        let registry = ContentRegistry::builtin();
        let bundle = registry.get_content(Variant::CustomerService);
        let links: Vec<SwitcherLink> = Variant::ALL
            .into_iter()
            .map(|variant| SwitcherLink {
                variant,
                href: format!("/v/{variant}"),
            })
            .collect();
        let html = render_page(bundle, &links);
        assert!(html.contains(r#"href="/v/general""#));
        assert!(html.contains(r#"href="/v/software_engineering""#));
        assert!(!html.contains(r#"href="/v/customer_service""#));
    }
}
