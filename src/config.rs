/// Environment configuration for the Gemini-backed handlers.
///
/// Configuration is read on every invocation. Serverless instances are
/// short-lived and the values only matter for the one outbound call.
use thiserror::Error;

/// Variable holding the Gemini API key. Required.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Variable overriding the model used for trivia generation.
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Variable overriding the Gemini API base URL.
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";
/// Variable overriding the sampling temperature.
pub const TEMPERATURE_VAR: &str = "TRIVIA_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// High enough that consecutive requests get different questions.
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing {0} environment variable")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings needed to talk to the Gemini API.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let api_base = get(API_BASE_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        let model = get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = match get(TEMPERATURE_VAR) {
            Some(raw) => parse_temperature(&raw)?,
            None => DEFAULT_TEMPERATURE,
        };

        Ok(Config {
            api_key,
            api_base,
            model,
            temperature,
        })
    }
}

fn parse_temperature(raw: &str) -> Result<f32, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        var: TEMPERATURE_VAR,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let value: f32 = raw.parse().map_err(|_| invalid("not a number"))?;
    if !(0.0..=2.0).contains(&value) {
        return Err(invalid("must be between 0.0 and 2.0"));
    }
    Ok(value)
}
