use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::content::models::ContentBundle;
use crate::errors::AppError;
use crate::state::AppState;
use crate::variant::{RequestVariant, Variant};

#[derive(Debug, Serialize)]
pub struct VariantSummary {
    pub variant: Variant,
    pub label: &'static str,
    pub prefix: Option<String>,
    pub link: String,
    pub current: bool,
}

/// GET /api/v1/content
pub async fn handle_get_content(
    State(state): State<AppState>,
    RequestVariant(variant): RequestVariant,
) -> Json<ContentBundle> {
    Json(state.registry.get_content(variant).clone())
}

/// GET /api/v1/content/:variant
pub async fn handle_get_variant_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ContentBundle>, AppError> {
    let variant = parse_variant(&slug)?;
    Ok(Json(state.registry.get_content(variant).clone()))
}

/// GET /api/v1/variants
pub async fn handle_list_variants(
    State(state): State<AppState>,
    RequestVariant(current): RequestVariant,
) -> Json<Vec<VariantSummary>> {
    let summaries = Variant::ALL
        .into_iter()
        .map(|variant| VariantSummary {
            variant,
            label: variant.label(),
            prefix: state.hosts.prefix_for(variant).map(str::to_string),
            link: state.variant_link(variant),
            current: variant == current,
        })
        .collect();
    Json(summaries)
}

pub fn parse_variant(slug: &str) -> Result<Variant, AppError> {
    slug.parse::<Variant>()
        .map_err(|e| AppError::NotFound(e.to_string()))
}
