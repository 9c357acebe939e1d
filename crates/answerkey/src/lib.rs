//! answerkey: fold correct-answer sentinels back into quiz question sets.
//!
//! Imported question banks often carry the answer key as an extra option,
//! e.g. `সঠিক উত্তর: [খ]` ("correct answer: [খ]"). The annotator removes those
//! sentinel options and sets `"correct": true` on the option labelled `[খ]`.
//!
//! # Core Principles
//!
//! - **Pass-through**: members the annotator does not touch are written back
//!   verbatim and in their original order
//! - **Permissive records**: missing or oddly typed `options`/`text` never fail a run
//! - **Idempotent**: a second pass finds no sentinels and changes nothing
//!
//! # Example
//!
//! ```no_run
//! use answerkey::QuestionAnnotator;
//!
//! let annotator = QuestionAnnotator::new();
//! let summary = annotator.run("src/data/questions.json").unwrap();
//!
//! println!("Questions: {}", summary.total_questions);
//! println!("Answers marked: {}", summary.answers_marked);
//! ```

pub mod annotate;
pub mod error;
pub mod model;
pub mod persistence;
pub mod report;

pub use annotate::{
    AnnotationSummary, AnnotatorConfig, QuestionAnnotator, QuestionOutcome, UnmatchedLabel,
    DEFAULT_MARKER, DEFAULT_QUESTIONS_PATH,
};
pub use error::{AnswerKeyError, Result};
pub use model::{AnswerOption, Question, QuestionSet};
pub use report::{AnnotationEvent, CollectingReporter, NullReporter, Reporter};
