use crate::client::GeminiClient;
use crate::config::{Config, ConfigError};
use crate::error::RelayError;
use crate::models::trivia::TriviaQuestion;
use crate::response::{error_response, json_response, preflight};
use crate::trivia::generate_question;
use http::Method;
use vercel_runtime::{Body, Error, Response, StatusCode};

/// POST /api/trivia — Generate one validated trivia question.
///
/// `OPTIONS` is answered locally; any other non-POST method gets 405.
/// Configuration is only loaded once the method has been accepted.
pub async fn handle<F>(method: &Method, load_config: F) -> Result<Response<Body>, Error>
where
    F: FnOnce() -> Result<Config, ConfigError>,
{
    if *method == Method::OPTIONS {
        return preflight();
    }

    match run(method, load_config).await {
        Ok(question) => json_response(StatusCode::OK.as_u16(), &question),
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(error = %err, status = err.status(), "trivia request failed");
            }
            error_response(&err)
        }
    }
}

async fn run<F>(method: &Method, load_config: F) -> Result<TriviaQuestion, RelayError>
where
    F: FnOnce() -> Result<Config, ConfigError>,
{
    if *method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let client = GeminiClient::new(load_config()?)?;
    generate_question(&client).await
}
