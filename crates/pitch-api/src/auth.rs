/// Static API key check, applied as middleware to every route.
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests whose `x-api-key` does not equal the configured key.
///
/// CORS preflight (`OPTIONS`) always passes. With no key configured every request passes.
pub async fn require_api_key(
    State(api_key): State<Option<Arc<str>>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    if let Some(expected) = api_key.as_deref() {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected) {
            warn!(
                method = %request.method(),
                path = request.uri().path(),
                key_present = provided.is_some(),
                "rejected request with bad api key"
            );
            return forbidden();
        }
    }

    next.run(request).await
}

fn forbidden() -> Response {
    let body = serde_json::json!({ "detail": "Forbidden" });
    (StatusCode::FORBIDDEN, Json(body)).into_response()
}
