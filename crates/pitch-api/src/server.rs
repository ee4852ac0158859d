use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

use pitch_scoring::{extract, score, ScoreResult, ScoreVector};

use crate::auth;
use crate::config::Config;
use crate::document;
use crate::error::AppError;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct PdfAnalysisResponse {
    pub pdf_text_preview: String,
    pub analysis: ScoreResult,
}

pub fn build_router(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let api_key: Option<Arc<str>> = config.api_key.as_deref().map(Arc::from);

    Router::new()
        .route("/", get(home))
        .route("/analyze", post(analyze))
        .route(
            "/analyze-pdf",
            post(analyze_pdf).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .layer(middleware::from_fn_with_state(api_key, auth::require_api_key))
        .layer(cors)
}

async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Backend is working ✅" }))
}

/// Manual entry: score caller-supplied values directly.
async fn analyze(Json(scores): Json<ScoreVector>) -> Result<Json<ScoreResult>, AppError> {
    validate_manual_scores(&scores)?;
    let result = score(&scores);
    info!(
        overall_score = result.overall_score,
        recommendation = %result.recommendation,
        "manual entry scored"
    );
    Ok(Json(result))
}

/// Document upload: decode, extract, then score.
async fn analyze_pdf(mut multipart: Multipart) -> Result<Json<PdfAnalysisResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.body_text()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let filename = field.file_name().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(e.body_text()))?;
            info!(filename = ?filename, bytes = bytes.len(), "document received");
            upload = Some(bytes);
            break;
        }
    }

    let bytes = upload
        .ok_or_else(|| AppError::Upload(format!("missing form field: {FILE_FIELD}")))?;
    let text = document::decode_pdf_text(bytes.to_vec()).await;
    let response = analyze_document_text(&text);
    info!(
        overall_score = response.analysis.overall_score,
        recommendation = %response.analysis.recommendation,
        "document scored"
    );
    Ok(Json(response))
}

fn analyze_document_text(text: &str) -> PdfAnalysisResponse {
    PdfAnalysisResponse {
        pdf_text_preview: document::preview(text),
        analysis: score(&extract(text)),
    }
}

/// Manual values must be finite and inside [0, 10]; the scorer itself never clamps.
fn validate_manual_scores(scores: &ScoreVector) -> Result<(), AppError> {
    if !scores.is_finite() {
        return Err(AppError::Validation(
            "all scores must be finite numbers".to_string(),
        ));
    }
    if let Some((field, value)) = scores.out_of_range_field() {
        return Err(AppError::Validation(format!(
            "{field} must be between 0 and 10, got {value}"
        )));
    }
    Ok(())
}
