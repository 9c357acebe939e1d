//! The annotation pass: fold sentinel options back into real answers.

mod annotator;
mod label;
mod summary;

pub use annotator::{AnnotatorConfig, QuestionAnnotator, DEFAULT_MARKER, DEFAULT_QUESTIONS_PATH};
pub use label::{extract_label, is_sentinel, leading_label};
pub use summary::{AnnotationSummary, QuestionOutcome, UnmatchedLabel};
