use serde::Serialize;
use serde_json::Value;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    /// Short, stable description of the failure class.
    pub error: String,
    /// Extra diagnostic text (upstream body, exception message, failed rule).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Excerpt of the cleaned model output that failed to parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// The parsed model output that failed shape validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
            details: None,
            raw: None,
            parsed: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn with_parsed(mut self, parsed: Value) -> Self {
        self.parsed = Some(parsed);
        self
    }
}
