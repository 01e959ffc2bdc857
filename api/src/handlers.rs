use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use shared::Validatable;

use crate::{
    error::ApiError, extract::JsonBody, language::RequestTranslator, state::AppState,
};

/// Create handler for any validated entity; mounted as `POST /categories`
/// for [`shared::Category`].
///
/// - 201 with the bound entity when every constraint holds.
/// - 400 with the localized violation messages, in field order, otherwise.
/// - 400 with the raw error text when the validator rejects the entity
///   itself. Body parse failures are answered by [`JsonBody`] before this
///   handler runs.
pub async fn create<T>(
    State(state): State<AppState>,
    RequestTranslator(translator): RequestTranslator,
    JsonBody(entity): JsonBody<T>,
) -> Response
where
    T: Validatable + Serialize + DeserializeOwned + Default + Send + 'static,
{
    let violations = match state.validator.validate(&entity) {
        Ok(violations) => violations,
        Err(err) => {
            tracing::error!(entity = T::ENTITY, error = %err, "Structural validation error");
            return (StatusCode::BAD_REQUEST, Json(err.to_string())).into_response();
        }
    };

    if !violations.is_empty() {
        let messages = translator.translate_all(&violations);
        tracing::debug!(
            entity = T::ENTITY,
            locale = %translator.locale(),
            violations = messages.len(),
            "Entity rejected"
        );
        return (StatusCode::BAD_REQUEST, Json(messages)).into_response();
    }

    tracing::info!(entity = T::ENTITY, "Entity accepted");
    (StatusCode::CREATED, Json(entity)).into_response()
}

pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("{method} {uri}"))
}
