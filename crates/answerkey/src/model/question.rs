//! Questions and question sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::option::AnswerOption;

/// Member holding a question's answer options.
pub const OPTIONS_FIELD: &str = "options";

/// A quiz question: an ordered JSON object with an `options` array.
///
/// Members other than `options` are never inspected and keep their order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    fields: IndexMap<String, Value>,
}

impl Question {
    /// Create a question with only an `options` member.
    pub fn with_options(options: Vec<AnswerOption>) -> Self {
        let mut question = Self::default();
        question.set_options(options);
        question
    }

    /// Look up a member by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Clone of the answer options. Empty when `options` is absent or not an array.
    pub fn options(&self) -> Vec<AnswerOption> {
        match self.fields.get(OPTIONS_FIELD) {
            Some(Value::Array(items)) => items.iter().cloned().map(AnswerOption::from).collect(),
            _ => Vec::new(),
        }
    }

    /// Move the answer options out, leaving an empty array in their slot.
    ///
    /// Returns `None` (and leaves the question untouched) when `options` is
    /// absent or not an array.
    pub fn take_options(&mut self) -> Option<Vec<AnswerOption>> {
        match self.fields.get_mut(OPTIONS_FIELD)? {
            Value::Array(items) => Some(
                std::mem::take(items)
                    .into_iter()
                    .map(AnswerOption::from)
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Replace the answer options. An existing `options` member keeps its position.
    pub fn set_options(&mut self, options: Vec<AnswerOption>) {
        let items = options.into_iter().map(AnswerOption::into_value).collect();
        self.fields
            .insert(OPTIONS_FIELD.to_string(), Value::Array(items));
    }

    /// Iterate over member names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// An ordered list of questions, read and written as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a question set.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the set holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get a question by zero-based position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterate over the questions in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Iterate mutably over the questions in document order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Question> {
        self.questions.iter_mut()
    }
}
