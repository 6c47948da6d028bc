//! HTTP routes
//!
//! - `POST /api/pdftohtml` - convert an uploaded PDF into stored HTML pages
//! - `GET /api/pages/:token` - document metadata lookup
//! - `GET /api/page/:token/:page_number` - redirect to one rendered page
//! - `GET /` - liveness

pub mod convert;
pub mod pages;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Serialize)]
struct LivenessResponse {
    message: &'static str,
}

async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "ScrollForge API is running. Upload PDFs at /api/pdftohtml",
    })
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", convert::router().merge(pages::router()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
