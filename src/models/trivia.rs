use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Number of answer options every question must carry.
pub const OPTION_COUNT: usize = 4;

/// A validated multiple-choice trivia question.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    /// The question text, trimmed and non-empty.
    pub question: String,
    /// Exactly four distinct, non-empty options.
    pub options: Vec<String>,
    /// One of `options`, verbatim.
    pub correct_answer: String,
}

/// The rule a parsed model response broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("field `{0}` is missing or empty")]
    MissingField(&'static str),

    #[error("field `{0}` must be text")]
    NotText(&'static str),

    #[error("field `options` must be an array")]
    OptionsNotArray,

    #[error("expected 4 options, found {0}")]
    OptionCount(usize),

    #[error("option {0} must be non-empty text")]
    BadOption(usize),

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("correct answer {0:?} is not one of the options")]
    AnswerNotInOptions(String),
}

impl TriviaQuestion {
    /// Validates and normalizes a parsed model response.
    ///
    /// All text is trimmed before the checks run. Numbers and booleans
    /// are accepted and rendered as their JSON text.
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        let object = value
            .as_object()
            .ok_or_else(|| ShapeError::NotAnObject(kind_of(value)))?;

        let question = required_text(object.get("question"), "question")?;

        let raw_options = match object.get("options") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => return Err(ShapeError::MissingField("options")),
            Some(_) => return Err(ShapeError::OptionsNotArray),
        };
        if raw_options.len() != OPTION_COUNT {
            return Err(ShapeError::OptionCount(raw_options.len()));
        }

        let mut options = Vec::with_capacity(OPTION_COUNT);
        let mut seen = HashSet::new();
        for (index, item) in raw_options.iter().enumerate() {
            let option = as_text(item)
                .filter(|s| !s.is_empty())
                .ok_or(ShapeError::BadOption(index))?;
            if !seen.insert(option.clone()) {
                return Err(ShapeError::DuplicateOption(option));
            }
            options.push(option);
        }

        let correct_answer = required_text(object.get("correctAnswer"), "correctAnswer")?;
        if !options.contains(&correct_answer) {
            return Err(ShapeError::AnswerNotInOptions(correct_answer));
        }

        Ok(TriviaQuestion {
            question,
            options,
            correct_answer,
        })
    }
}

fn required_text(value: Option<&Value>, field: &'static str) -> Result<String, ShapeError> {
    match value {
        None | Some(Value::Null) => Err(ShapeError::MissingField(field)),
        Some(v) => match as_text(v) {
            Some(text) if !text.is_empty() => Ok(text),
            Some(_) => Err(ShapeError::MissingField(field)),
            None => Err(ShapeError::NotText(field)),
        },
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
