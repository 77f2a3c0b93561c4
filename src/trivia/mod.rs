/// Trivia generation: the prompt sent to Gemini and the cleanup and
/// validation applied to what comes back.
use crate::client::GeminiClient;
use crate::error::RelayError;
use crate::models::trivia::TriviaQuestion;
use serde_json::Value;

/// Instruction sent on every request. Asks for bare JSON in the exact
/// shape [`TriviaQuestion::from_value`] accepts.
pub const PROMPT: &str = r#"You are the question engine for a casual mobile trivia game.
Write one fresh, fun trivia question for a general audience.
Pick any topic among: pop culture, science, history, geography, food, technology.
Respond with a single JSON object and nothing else, using exactly these keys:
{
  "question": "The question text?",
  "options": ["First option", "Second option", "Third option", "Fourth option"],
  "correctAnswer": "The correct option, copied exactly from options"
}
Give exactly four different options. Do not wrap the JSON in markdown code fences."#;

/// Removes markdown code-fence markers and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Turns raw model text into a validated question.
pub fn parse_question(text: &str) -> Result<TriviaQuestion, RelayError> {
    let cleaned = strip_code_fences(text);

    let parsed: Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "model output is not valid JSON");
            return Err(RelayError::MalformedOutput { cleaned });
        }
    };

    TriviaQuestion::from_value(&parsed).map_err(|reason| {
        tracing::warn!(%reason, "model output failed shape validation");
        RelayError::InvalidShape { reason, parsed }
    })
}

/// Asks Gemini for a question and validates the answer.
pub async fn generate_question(client: &GeminiClient) -> Result<TriviaQuestion, RelayError> {
    let text = client.generate_content(PROMPT).await?;
    parse_question(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trivia::ShapeError;

    const BARE: &str = r#"{"question":"Capital of Japan?","options":["Kyoto","Tokyo","Osaka","Nagoya"],"correctAnswer":"Tokyo"}"#;

    #[test]
    fn test_strip_code_fences_removes_markers() {
        let fenced = format!("```json\n{BARE}\n```");
        assert_eq!(strip_code_fences(&fenced), BARE);

        let plain_fence = format!("  ```\n{BARE}\n```  ");
        assert_eq!(strip_code_fences(&plain_fence), BARE);
    }

    #[test]
    fn test_strip_code_fences_leaves_bare_json_alone() {
        assert_eq!(strip_code_fences(BARE), BARE);
    }

    #[test]
    fn test_fenced_and_bare_json_parse_the_same() {
        let bare = parse_question(BARE).unwrap();
        let fenced = parse_question(&format!("```json\n{BARE}\n```")).unwrap();
        assert_eq!(bare, fenced);
        assert_eq!(bare.correct_answer, "Tokyo");
    }

    #[test]
    fn test_non_json_text_is_malformed() {
        match parse_question("Sure! Here is a question: what is 2+2?") {
            Err(RelayError::MalformedOutput { cleaned }) => {
                assert!(cleaned.starts_with("Sure!"))
            }
            other => panic!("expected MalformedOutput, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_text_is_malformed() {
        assert!(matches!(
            parse_question(""),
            Err(RelayError::MalformedOutput { .. })
        ));
    }

    #[test]
    fn test_bad_shape_keeps_parsed_object() {
        let text = r#"{"question":"Capital of Japan?","options":["Kyoto","Tokyo"],"correctAnswer":"Tokyo"}"#;
        match parse_question(text) {
            Err(RelayError::InvalidShape { reason, parsed }) => {
                assert_eq!(reason, ShapeError::OptionCount(2));
                assert_eq!(parsed["correctAnswer"], "Tokyo");
            }
            other => panic!("expected InvalidShape, got {other:?}"),
        }
    }
}
