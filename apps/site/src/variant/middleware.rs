use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;
use crate::variant::Variant;

pub const VARIANT_HEADER: HeaderName = HeaderName::from_static("x-portfolio-variant");
const FORWARDED_HOST: &str = "x-forwarded-host";

/// The variant resolved for the current request. Read-only once attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestVariant(pub Variant);

/// Resolves the request host to a `Variant` and attaches it
/// to the request extensions. Never rejects a request.
pub async fn resolve_request_variant(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let host = request_host(&req, state.config.trust_forwarded_host).map(str::to_owned);
    let variant = host
        .as_deref()
        .map(|h| state.hosts.resolve(h))
        .unwrap_or(Variant::General);

    debug!(host = host.as_deref().unwrap_or("<none>"), %variant, "Resolved request variant");

    req.extensions_mut().insert(RequestVariant(variant));

    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(VARIANT_HEADER, HeaderValue::from_static(variant.as_str()));
    headers.append(header::VARY, HeaderValue::from_static("host"));
    response
}

/// Host the client asked for: forwarded host (first hop, when trusted),
/// then the URI authority (absolute-form targets and HTTP/2), then `Host`.
fn request_host(req: &Request, trust_forwarded: bool) -> Option<&str> {
    let headers = req.headers();

    if trust_forwarded {
        let forwarded = headers
            .get(FORWARDED_HOST)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if forwarded.is_some() {
            return forwarded;
        }
    }

    req.uri()
        .host()
        .or_else(|| headers.get(header::HOST).and_then(|v| v.to_str().ok()))
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestVariant
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Outside the middleware there is no host decision; serve the landing page.
        Ok(parts
            .extensions
            .get::<RequestVariant>()
            .copied()
            .unwrap_or(RequestVariant(Variant::General)))
    }
}
