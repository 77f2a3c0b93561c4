use crate::client::{GeminiClient, RawResponse};
use crate::config::{Config, ConfigError};
use crate::error::RelayError;
use crate::response::{error_response, preflight, raw_json_response};
use http::Method;
use vercel_runtime::{Body, Error, Response};

/// /api/models — Proxy the Gemini model listing.
///
/// Upstream status and body are forwarded unchanged; only the
/// credential check and network failures produce our own error body.
pub async fn handle<F>(method: &Method, load_config: F) -> Result<Response<Body>, Error>
where
    F: FnOnce() -> Result<Config, ConfigError>,
{
    if *method == Method::OPTIONS {
        return preflight();
    }

    match fetch(load_config).await {
        Ok(raw) => raw_json_response(raw.status, raw.body),
        Err(err) => {
            tracing::error!(error = %err, "model listing failed");
            error_response(&err)
        }
    }
}

async fn fetch<F>(load_config: F) -> Result<RawResponse, RelayError>
where
    F: FnOnce() -> Result<Config, ConfigError>,
{
    let client = GeminiClient::new(load_config()?)?;
    client.list_models().await
}
