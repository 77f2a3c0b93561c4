/// Gemini HTTP client.
///
/// Thin wrapper over `reqwest` for the two upstream calls the relay
/// makes. The API key travels as the `key` query parameter.
use crate::config::Config;
use crate::error::RelayError;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use reqwest::Client;

/// Raw upstream answer, forwarded untouched by the model-listing handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub struct GeminiClient {
    config: Config,
    client: Client,
}

impl GeminiClient {
    /// Builds a client for one invocation. No request timeout is set;
    /// the hosting platform bounds the invocation instead.
    pub fn new(config: Config) -> Result<Self, RelayError> {
        let client = Client::builder()
            .user_agent(format!("trivia-relay/{}", crate::version()))
            .build()?;
        Ok(GeminiClient { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.config.api_base)
    }

    /// Sends `prompt` to the configured model and returns the first
    /// candidate's text (empty when the model returned none).
    pub async fn generate_content(&self, prompt: &str) -> Result<String, RelayError> {
        let request = GenerateContentRequest::json_prompt(prompt, self.config.temperature);

        tracing::info!(
            model = %self.config.model,
            temperature = self.config.temperature,
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.first_text().to_string())
    }

    /// Fetches the model listing verbatim, whatever its status.
    pub async fn list_models(&self) -> Result<RawResponse, RelayError> {
        tracing::info!("sending list models request");

        let response = self
            .client
            .get(self.models_url())
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_key: "k".into(),
            api_base: "https://example.test/v1beta".into(),
            model: "gemini-1.5-flash".into(),
            temperature: 0.8,
        }
    }

    #[test]
    fn test_urls_are_built_from_config() {
        let client = GeminiClient::new(config()).unwrap();
        assert_eq!(
            client.generate_url(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(client.models_url(), "https://example.test/v1beta/models");
    }
}
