/// Response builders shared by both handlers.
///
/// Every response carries the JSON content type and the CORS headers
/// that let browser clients on any origin call the API.
use crate::error::RelayError;
use serde::Serialize;
use vercel_runtime::{Body, Error, Response, StatusCode};

pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
];

fn with_headers(status: u16, body: Body) -> Result<Response<Body>, Error> {
    let builder = CORS_HEADERS
        .iter()
        .fold(Response::builder().status(status), |b, (name, value)| {
            b.header(*name, *value)
        });
    Ok(builder.body(body)?)
}

/// Serializes `payload` as the response body.
pub fn json_response<T: Serialize>(status: u16, payload: &T) -> Result<Response<Body>, Error> {
    with_headers(status, Body::Text(serde_json::to_string(payload)?))
}

/// Forwards an already-encoded JSON body as-is.
pub fn raw_json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    with_headers(status, Body::Text(body))
}

/// Answer to a CORS pre-flight request.
pub fn preflight() -> Result<Response<Body>, Error> {
    with_headers(StatusCode::OK.as_u16(), Body::Empty)
}

pub fn error_response(err: &RelayError) -> Result<Response<Body>, Error> {
    json_response(err.status(), &err.to_body())
}
