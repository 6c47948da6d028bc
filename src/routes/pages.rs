//! Page lookup routes
//!
//! Read-only lookups keyed by access token. An out-of-range page number
//! returns the same not-found kind as an unknown token, so a caller probing
//! page numbers learns nothing it could not learn from the metadata
//! endpoint.

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::convert::page_key;
use crate::db::DocumentRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the pages router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages/:token", get(get_document))
        .route("/page/:token/:page_number", get(get_page))
}

#[derive(Serialize)]
pub struct DocumentSummary {
    pub success: bool,
    pub pdf_name: String,
    pub page_count: i64,
    pub total_pages: i64,
}

/// GET /api/pages/:token
async fn get_document(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<DocumentSummary>> {
    let repo = DocumentRepository::new(state.db());
    let document = repo
        .find_by_token(&token)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    Ok(Json(DocumentSummary {
        success: true,
        pdf_name: document.pdf_name,
        page_count: document.page_count,
        total_pages: document.total_pages,
    }))
}

/// GET /api/page/:token/:page_number
///
/// Redirects (307) to the stored HTML page. Artifacts are immutable, so
/// the same `(token, page_number)` always resolves to the same URL.
async fn get_page(
    State(state): State<AppState>,
    Path((token, page_number)): Path<(String, i64)>,
) -> Result<Redirect> {
    let repo = DocumentRepository::new(state.db());
    let document = repo
        .find_by_token(&token)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    if page_number < 1 || page_number > document.total_pages {
        return Err(AppError::NotFound("Page not found".to_string()));
    }

    let key = page_key(&token, page_number as usize);
    let url = state.artifact_store().resolve(&key).await?;

    tracing::debug!(token = %token, page = page_number, url = %url, "Redirecting to stored page");
    Ok(Redirect::temporary(&url))
}
