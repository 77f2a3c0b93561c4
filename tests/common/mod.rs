#![allow(dead_code)]

use serde_json::{json, Value};
use trivia_relay::config::{Config, ConfigError};
use vercel_runtime::{Body, Response};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";
pub const MODEL: &str = "gemini-1.5-flash";

pub fn config_for(server: &MockServer) -> Config {
    Config {
        api_key: API_KEY.to_string(),
        api_base: format!("{}/v1beta", server.uri()),
        model: MODEL.to_string(),
        temperature: 0.8,
    }
}

/// Points at a local port nothing listens on.
pub fn unreachable_config() -> Config {
    Config {
        api_key: API_KEY.to_string(),
        api_base: "http://127.0.0.1:1/v1beta".to_string(),
        model: MODEL.to_string(),
        temperature: 0.8,
    }
}

pub fn missing_key() -> Result<Config, ConfigError> {
    Err(ConfigError::Missing(trivia_relay::config::API_KEY_VAR))
}

pub fn invalid_temperature() -> Result<Config, ConfigError> {
    Err(ConfigError::Invalid {
        var: trivia_relay::config::TEMPERATURE_VAR,
        value: "warm".to_string(),
        reason: "not a number".to_string(),
    })
}

/// Loader for paths that must never reach configuration.
pub fn untouchable() -> Result<Config, ConfigError> {
    panic!("configuration must not be loaded on this path")
}

/// A generateContent response whose first part carries `text`.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

pub fn body_text(response: &Response<Body>) -> String {
    match response.body() {
        Body::Text(text) => text.clone(),
        Body::Empty => String::new(),
        Body::Binary(bytes) => String::from_utf8(bytes.clone()).expect("utf-8 body"),
    }
}

pub fn body_json(response: &Response<Body>) -> Value {
    serde_json::from_str(&body_text(response)).expect("response body should be JSON")
}

pub fn assert_cors(response: &Response<Body>) {
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(header("Content-Type").as_deref(), Some("application/json"));
    assert_eq!(header("Access-Control-Allow-Origin").as_deref(), Some("*"));
    assert_eq!(
        header("Access-Control-Allow-Headers").as_deref(),
        Some("Content-Type")
    );
    assert_eq!(
        header("Access-Control-Allow-Methods").as_deref(),
        Some("POST, OPTIONS")
    );
}
