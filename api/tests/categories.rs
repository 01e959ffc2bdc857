// tests/categories.rs
//
// End-to-end tests of POST /categories through the full router, including
// the language middleware and the request logger.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use category_api::state::AppState;
use serde_json::{json, Value};
use shared::{FieldNaming, TranslatorRegistry, Validator};
use tower::ServiceExt;

fn test_app() -> Router {
    category_api::app(AppState::new(TranslatorRegistry::default(), Validator::new()))
}

async fn post_categories(app: Router, body: &str, language: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/categories")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(tag) = language {
        builder = builder.header(header::ACCEPT_LANGUAGE, tag);
    }

    let response = app
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ─── Accepted payloads ───────────────────────────────────────────────────────

#[tokio::test]
async fn valid_payloads_are_echoed_with_201() {
    let payloads = [
        json!({"id": "1", "name": "Books"}),
        json!({"id": "abc-123", "name": "Eletrônicos"}),
        json!({"id": " ", "name": " "}),
    ];

    for payload in payloads {
        let (status, body) = post_categories(test_app(), &payload.to_string(), None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, payload);
    }
}

// ─── Violations ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn violation_count_matches_missing_fields() {
    let cases = [
        (json!({"name": "Books"}), 1),
        (json!({"id": "1"}), 1),
        (json!({"id": "", "name": "Books"}), 1),
        (json!({}), 2),
        (json!({"id": "", "name": ""}), 2),
    ];

    for (payload, expected) in cases {
        let (status, body) = post_categories(test_app(), &payload.to_string(), Some("en")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body.as_array().unwrap().len(), expected, "payload {payload}");
    }
}

#[tokio::test]
async fn english_messages_follow_field_order() {
    let (status, body) = post_categories(test_app(), "{}", Some("en")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!(["ID is a required field", "Name is a required field"]));
}

#[tokio::test]
async fn portuguese_is_the_default() {
    let (_, without_header) = post_categories(test_app(), "{}", None).await;
    let (_, unknown) = post_categories(test_app(), "{}", Some("xx-unknown")).await;
    let (_, explicit) = post_categories(test_app(), "{}", Some("pt_BR")).await;

    assert_eq!(
        without_header,
        json!(["ID é um campo requerido", "Name é um campo requerido"])
    );
    assert_eq!(unknown, without_header);
    assert_eq!(explicit, without_header);
}

#[tokio::test]
async fn locales_render_distinct_text() {
    let (_, en) = post_categories(test_app(), r#"{"id":"1"}"#, Some("en")).await;
    let (_, pt) = post_categories(test_app(), r#"{"id":"1"}"#, Some("pt_BR")).await;
    assert_ne!(en, pt);
}

#[tokio::test]
async fn repeated_validation_is_identical() {
    let app = test_app();
    let (_, first) = post_categories(app.clone(), r#"{"name":""}"#, Some("en")).await;
    let (_, second) = post_categories(app, r#"{"name":""}"#, Some("en")).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_body_reports_every_field() {
    let (status, body) = post_categories(test_app(), "", Some("en")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn null_fields_count_as_missing() {
    let (status, body) =
        post_categories(test_app(), r#"{"id":null,"name":"x"}"#, Some("en")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!(["ID is a required field"]));
}

#[tokio::test]
async fn null_body_reports_every_field() {
    let (status, body) = post_categories(test_app(), "null", Some("en")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!(["ID is a required field", "Name is a required field"]));
}

#[tokio::test]
async fn json_field_naming_uses_wire_names() {
    let app = category_api::app(AppState::new(
        TranslatorRegistry::default(),
        Validator::with_field_naming(FieldNaming::Json),
    ));
    let (_, body) = post_categories(app, "{}", Some("en")).await;
    assert_eq!(body, json!(["id is a required field", "name is a required field"]));
}

// ─── Bind errors ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_json_is_untranslated() {
    let bodies = [
        r#"{"id": "1", "name""#,
        "[]",
        r#"["1","Books"]"#,
        "42",
        "not json",
    ];
    for body in bodies {
        let (status_en, en) = post_categories(test_app(), body, Some("en")).await;
        let (status_pt, pt) = post_categories(test_app(), body, Some("pt_BR")).await;

        assert_eq!(status_en, StatusCode::BAD_REQUEST);
        assert_eq!(status_pt, StatusCode::BAD_REQUEST);
        assert!(en.is_string(), "body {body} gave {en}");
        assert_eq!(en, pt);
    }
}

// ─── Routing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-correlation-id"));
}

#[tokio::test]
async fn get_on_categories_is_not_allowed() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
