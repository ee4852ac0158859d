use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGIN: &str = "https://ai-analyst-startup-frontend.onrender.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Process-wide configuration, read once at startup from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Static key expected in `x-api-key`. `None` disables the check.
    pub api_key: Option<String>,
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<HeaderValue>,
    /// Request body limit for document uploads.
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `API_KEY`: static key required on every non-preflight request
    /// - `LISTEN_ADDR`: socket address (default `0.0.0.0:8000`)
    /// - `CORS_ALLOWED_ORIGINS`: comma-separated origins
    /// - `MAX_UPLOAD_BYTES`: upload body limit (default 10 MiB)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_key = lookup("API_KEY").filter(|k| !k.is_empty());

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("invalid LISTEN_ADDR: {e}")))?;

        let cors_origins = parse_origins(
            &lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        )?;

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    AppError::Config(format!("MAX_UPLOAD_BYTES must be a positive integer, got {raw}"))
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            api_key,
            listen_addr,
            cors_origins,
            max_upload_bytes,
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, AppError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|_| AppError::Config(format!("invalid CORS origin: {s}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(AppError::Config(
            "CORS_ALLOWED_ORIGINS must list at least one origin".to_string(),
        ));
    }
    Ok(origins)
}
