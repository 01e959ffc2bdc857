//! Body binding for JSON payloads.
//!
//! `JsonBody<T>` stands in for `Json<T>`: it does not insist on a
//! `Content-Type` header, binds an empty or `null` body to `T::default()` so
//! that validation reports the missing fields, only binds JSON objects, and
//! turns every read or parse failure into a [`BindError`].

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::BindError;

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = BindError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|err| BindError::Body(err.body_text()))?;

        if body.is_empty() {
            return Ok(JsonBody(T::default()));
        }

        match serde_json::from_slice::<Value>(&body)? {
            Value::Null => Ok(JsonBody(T::default())),
            value @ Value::Object(_) => Ok(JsonBody(serde_json::from_value(value)?)),
            other => Err(BindError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}
