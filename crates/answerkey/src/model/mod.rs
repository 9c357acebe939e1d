//! Question set data model.
//!
//! Questions and options are kept as ordered JSON members so that everything
//! the annotator does not touch is written back exactly as it was read.

mod option;
mod question;

pub use option::AnswerOption;
pub use question::{Question, QuestionSet};
