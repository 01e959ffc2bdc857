//! Per-request locale negotiation.
//!
//! [`language_middleware`] reads the raw `Accept-Language` value, resolves a
//! translator through the registry (pt_BR when the tag is absent or not an
//! exact match) and stores it in the request extensions. Handlers read it
//! back with the [`RequestTranslator`] extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::ACCEPT_LANGUAGE, request::Parts},
    middleware::Next,
    response::Response,
};
use shared::Translator;

use crate::{error::ApiError, state::AppState};

pub async fn language_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let requested = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let translator = state.registry.resolve(requested);

    tracing::debug!(
        requested = requested.unwrap_or_default(),
        resolved = %translator.locale(),
        "Locale negotiated"
    );

    request.extensions_mut().insert(translator);

    next.run(request).await
}

/// The translator attached to the current request.
#[derive(Debug, Clone)]
pub struct RequestTranslator(pub Translator);

#[async_trait]
impl<S> FromRequestParts<S> for RequestTranslator
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Translator>()
            .cloned()
            .map(RequestTranslator)
            .ok_or_else(|| {
                tracing::error!("No translator attached to request");
                ApiError::Internal("translator unavailable".into())
            })
    }
}
