//! A single answer option.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Member holding the option's display text.
pub const TEXT_FIELD: &str = "text";

/// Member flagging the option as the correct answer.
pub const CORRECT_FIELD: &str = "correct";

/// An answer option of a question.
///
/// Normally an object like `{"text": "[ক] 5"}`. Any JSON value is accepted;
/// a missing or non-string `text` reads as the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerOption {
    value: Value,
}

impl AnswerOption {
    /// Create an option with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(TEXT_FIELD.to_string(), Value::String(text.into()));
        Self {
            value: Value::Object(map),
        }
    }

    /// The option's text, or `""` when absent or not a string.
    pub fn text(&self) -> &str {
        self.value
            .get(TEXT_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Whether the option is already flagged as correct.
    pub fn is_correct(&self) -> bool {
        self.value
            .get(CORRECT_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Flag the option as correct.
    ///
    /// An existing `correct` member keeps its position. Returns `false` for
    /// non-object options, which cannot carry the flag.
    pub fn mark_correct(&mut self) -> bool {
        match self.value.as_object_mut() {
            Some(map) => {
                map.insert(CORRECT_FIELD.to_string(), Value::Bool(true));
                true
            }
            None => false,
        }
    }

    /// The underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume the option, returning the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for AnswerOption {
    fn from(value: Value) -> Self {
        Self { value }
    }
}
