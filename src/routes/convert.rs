//! PDF conversion route
//!
//! `POST /api/pdftohtml` accepts a multipart upload (field `pdf`), runs the
//! extract → filter → paginate → render pipeline, stores every page
//! artifact, and only then records the document metadata. A failure at any
//! stage aborts the whole request; no partial metadata row is ever written.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::convert::{filter_units, generate_access_token, page_key, paginate, render_page};
use crate::db::{DocumentRepository, NewDocument};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the conversion router
pub fn router() -> Router<AppState> {
    Router::new().route("/pdftohtml", post(convert_pdf_to_html))
}

#[derive(Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub total_pages: usize,
}

/// POST /api/pdftohtml
async fn convert_pdf_to_html(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>> {
    // Pull the uploaded file out of the multipart body. The file type check
    // happens before any extractor or store call.
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("pdf") {
            let file_name = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::BadRequest("File must be a PDF".to_string()))?;
            let data = field.bytes().await?;
            upload = Some((file_name, data.to_vec()));
            break;
        }
    }

    let (pdf_name, data) =
        upload.ok_or_else(|| AppError::BadRequest("File must be a PDF".to_string()))?;

    if !pdf_name.ends_with(".pdf") {
        return Err(AppError::BadRequest("File must be a PDF".to_string()));
    }

    let extracted = state.extractor().extract(&data)?;
    // Uploaded bytes are no longer needed once the text units exist.
    drop(data);

    let units = filter_units(extracted.units);
    let paragraph_count = units.len();

    let access_token = generate_access_token();
    let batches = paginate(units);
    let total_pages = batches.len();

    // All artifacts must be durable before the metadata row is written, so
    // total_pages never describes pages that do not exist. A failed upload
    // fails the request; pages already stored under this token are orphaned.
    for batch in &batches {
        let key = page_key(&access_token, batch.page_number);
        let html = render_page(batch);
        state
            .artifact_store()
            .put(&key, html.into_bytes(), "text/html; charset=utf-8")
            .await?;
    }

    let repo = DocumentRepository::new(state.db());
    repo.insert(&NewDocument {
        pdf_name: pdf_name.clone(),
        page_count: extracted.source_page_count as i64,
        access_token: access_token.clone(),
        total_pages: total_pages as i64,
    })
    .await?;

    tracing::info!(
        pdf_name = %pdf_name,
        token = %access_token,
        paragraphs = paragraph_count,
        total_pages = total_pages,
        "Successfully processed PDF"
    );

    Ok(Json(ConvertResponse {
        success: true,
        message: format!(
            "Processed {} paragraphs into {} HTML pages",
            paragraph_count, total_pages
        ),
        token: access_token,
        total_pages,
    }))
}
