//! Failure taxonomy for the relay handlers.
//!
//! Every failure is reported to the caller once, as an [`ErrorBody`]
//! with the status returned by [`RelayError::status`].

use crate::config::ConfigError;
use crate::models::api::ErrorBody;
use crate::models::trivia::ShapeError;
use serde_json::Value;
use thiserror::Error;

/// Maximum characters of diagnostic text echoed back to callers.
pub const DIAGNOSTIC_LIMIT: usize = 500;
/// Maximum elements kept per array or object in an echoed parsed object.
pub const DIAGNOSTIC_ENTRY_LIMIT: usize = 16;
/// Containers nested deeper than this are replaced by [`ELIDED`].
pub const DIAGNOSTIC_DEPTH_LIMIT: usize = 4;
/// Placeholder for content dropped by [`bounded`].
pub const ELIDED: &str = "[elided]";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Gemini answered with a non-2xx status.
    #[error("Gemini API error")]
    Upstream { status: u16, body: String },

    /// The cleaned model text was not JSON.
    #[error("Model did not return valid JSON")]
    MalformedOutput { cleaned: String },

    /// The model returned JSON that is not a valid trivia question.
    #[error("Invalid trivia shape returned")]
    InvalidShape { reason: ShapeError, parsed: Value },

    /// Network failure or an unreadable upstream body.
    #[error("Server exception")]
    Exception(#[source] reqwest::Error),
}

/// The request URL carries the API key, so it is dropped before the
/// error can reach a log line or a response body.
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Exception(err.without_url())
    }
}

impl RelayError {
    /// HTTP status reported to the caller.
    pub fn status(&self) -> u16 {
        match self {
            RelayError::MethodNotAllowed => 405,
            RelayError::Upstream { status, .. } => *status,
            _ => 500,
        }
    }

    /// Caller-facing body, with diagnostics truncated.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            RelayError::MethodNotAllowed => ErrorBody::new(self.to_string()),
            RelayError::Config(ConfigError::Missing(_)) => ErrorBody::new(self.to_string()),
            RelayError::Config(err @ ConfigError::Invalid { .. }) => {
                ErrorBody::new("Invalid configuration").with_details(err.to_string())
            }
            RelayError::Upstream { body, .. } => {
                ErrorBody::new(self.to_string()).with_details(truncate(body, DIAGNOSTIC_LIMIT))
            }
            RelayError::MalformedOutput { cleaned } => {
                ErrorBody::new(self.to_string()).with_raw(truncate(cleaned, DIAGNOSTIC_LIMIT))
            }
            RelayError::InvalidShape { reason, parsed } => ErrorBody::new(self.to_string())
                .with_details(reason.to_string())
                .with_parsed(bounded(parsed)),
            RelayError::Exception(err) => ErrorBody::new(self.to_string())
                .with_details(truncate(&err.to_string(), DIAGNOSTIC_LIMIT)),
        }
    }
}

/// Returns at most `limit` characters of `text`.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// Copy of `value` cut down to the diagnostic limits: strings to
/// [`DIAGNOSTIC_LIMIT`] characters, arrays and objects to
/// [`DIAGNOSTIC_ENTRY_LIMIT`] entries, nesting to [`DIAGNOSTIC_DEPTH_LIMIT`].
pub fn bounded(value: &Value) -> Value {
    bounded_at(value, 0)
}

fn bounded_at(value: &Value, depth: usize) -> Value {
    match value {
        Value::String(s) => Value::String(truncate(s, DIAGNOSTIC_LIMIT)),
        Value::Array(_) | Value::Object(_) if depth >= DIAGNOSTIC_DEPTH_LIMIT => {
            Value::String(ELIDED.to_string())
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .take(DIAGNOSTIC_ENTRY_LIMIT)
                .map(|v| bounded_at(v, depth + 1))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .take(DIAGNOSTIC_ENTRY_LIMIT)
                .map(|(k, v)| (truncate(k, DIAGNOSTIC_LIMIT), bounded_at(v, depth + 1)))
                .collect(),
        ),
        other => other.clone(),
    }
}
