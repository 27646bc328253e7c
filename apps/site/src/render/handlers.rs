use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::content::handlers::parse_variant;
use crate::errors::AppError;
use crate::render::{render_page, SwitcherLink};
use crate::state::AppState;
use crate::variant::{RequestVariant, Variant};

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    RequestVariant(variant): RequestVariant,
) -> Html<String> {
    Html(page_for(&state, variant))
}

/// GET /v/:variant
///
/// Renders a variant regardless of host, for local preview without subdomains.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let variant = parse_variant(&slug)?;
    Ok(Html(page_for(&state, variant)))
}

fn page_for(state: &AppState, variant: Variant) -> String {
    let switcher: Vec<SwitcherLink> = Variant::ALL
        .into_iter()
        .map(|v| SwitcherLink {
            variant: v,
            href: state.variant_link(v),
        })
        .collect();
    render_page(state.registry.get_content(variant), &switcher)
}
