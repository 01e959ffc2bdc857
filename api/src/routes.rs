use axum::{routing::post, Router};
use shared::Category;

use crate::{handlers, state::AppState};

pub fn category_routes() -> Router<AppState> {
    Router::new().route("/categories", post(handlers::create::<Category>))
}
