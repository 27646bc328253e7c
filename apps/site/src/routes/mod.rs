pub mod health;

use axum::{middleware, routing::get, Router};

use crate::content::handlers;
use crate::render::handlers as pages;
use crate::state::AppState;
use crate::variant::resolve_request_variant;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_index))
        .route("/v/:variant", get(pages::handle_preview))
        // Content API
        .route("/api/v1/content", get(handlers::handle_get_content))
        .route(
            "/api/v1/content/:variant",
            get(handlers::handle_get_variant_content),
        )
        .route("/api/v1/variants", get(handlers::handle_list_variants))
        // Every handler sees the resolved variant
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_request_variant,
        ))
        .with_state(state)
}
