//! Outcomes of an annotation pass.

use serde::{Deserialize, Serialize};

/// What happened to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuestionOutcome {
    /// No sentinel option; the question was left as is.
    Untouched,

    /// Sentinels removed and the option at `option_index` (after removal) flagged.
    Marked {
        label: String,
        option_index: usize,
        removed: usize,
    },

    /// Sentinels removed, but no option starts with `[label]`.
    Unmatched { label: String, removed: usize },

    /// Sentinels removed, but the first one carried no bracketed label.
    NoLabel { removed: usize },
}

impl QuestionOutcome {
    /// Number of sentinel options dropped from the question.
    pub fn removed(&self) -> usize {
        match self {
            QuestionOutcome::Untouched => 0,
            QuestionOutcome::Marked { removed, .. }
            | QuestionOutcome::Unmatched { removed, .. }
            | QuestionOutcome::NoLabel { removed } => *removed,
        }
    }
}

/// A sentinel label that matched no option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedLabel {
    /// 1-based question number.
    pub question: usize,
    pub label: String,
}

/// Totals for a whole question set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSummary {
    /// Number of questions in the set.
    pub total_questions: usize,

    /// Number of sentinel options dropped across all questions.
    pub sentinels_removed: usize,

    /// Number of questions that had at least one sentinel.
    pub questions_with_sentinel: usize,

    /// Number of questions where an option was flagged as correct.
    pub answers_marked: usize,

    /// Labels that matched no option.
    pub unmatched: Vec<UnmatchedLabel>,

    /// 1-based numbers of questions whose sentinel had no label.
    pub missing_label: Vec<usize>,
}

impl AnnotationSummary {
    /// Create an empty summary for a set of `total_questions`.
    pub fn new(total_questions: usize) -> Self {
        Self {
            total_questions,
            ..Self::default()
        }
    }

    /// Fold one question's outcome into the totals.
    pub fn record(&mut self, question: usize, outcome: &QuestionOutcome) {
        self.sentinels_removed += outcome.removed();
        match outcome {
            QuestionOutcome::Untouched => return,
            QuestionOutcome::Marked { .. } => self.answers_marked += 1,
            QuestionOutcome::Unmatched { label, .. } => self.unmatched.push(UnmatchedLabel {
                question,
                label: label.clone(),
            }),
            QuestionOutcome::NoLabel { .. } => self.missing_label.push(question),
        }
        self.questions_with_sentinel += 1;
    }

    /// Whether the pass changed anything.
    pub fn has_changes(&self) -> bool {
        self.sentinels_removed > 0
    }
}
