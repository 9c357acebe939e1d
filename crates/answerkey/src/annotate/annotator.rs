//! The question annotator and its configuration.

use std::path::Path;
use std::sync::Arc;

use crate::error::{AnswerKeyError, Result};
use crate::model::{AnswerOption, Question, QuestionSet};
use crate::report::{AnnotationEvent, NullReporter, Reporter};

use super::label::{extract_label, is_sentinel, leading_label};
use super::summary::{AnnotationSummary, QuestionOutcome};

/// Marker identifying a sentinel option ("correct answer:" in Bengali).
pub const DEFAULT_MARKER: &str = "সঠিক উত্তর:";

/// Question file rewritten when no path is given.
pub const DEFAULT_QUESTIONS_PATH: &str = "src/data/questions.json";

/// Configuration for the annotator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Substring marking an option as a sentinel. Matched byte-for-byte.
    pub marker: String,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl AnnotatorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different sentinel marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Check the configuration before a run.
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            return Err(AnswerKeyError::Config(
                "sentinel marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Removes sentinel options from questions and flags the answers they name.
///
/// # Example
///
/// ```
/// use answerkey::{AnswerOption, Question, QuestionAnnotator, QuestionSet};
///
/// let mut set = QuestionSet::new(vec![Question::with_options(vec![
///     AnswerOption::new("[ক] 5"),
///     AnswerOption::new("[খ] 10"),
///     AnswerOption::new("সঠিক উত্তর: [খ]"),
/// ])]);
///
/// let summary = QuestionAnnotator::new().annotate(&mut set);
///
/// let options = set.get(0).unwrap().options();
/// assert_eq!(options.len(), 2);
/// assert!(options[1].is_correct());
/// assert_eq!(summary.answers_marked, 1);
/// ```
pub struct QuestionAnnotator {
    config: AnnotatorConfig,
    reporter: Arc<dyn Reporter>,
}

impl Default for QuestionAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionAnnotator {
    /// Create an annotator with the default marker and no reporting.
    pub fn new() -> Self {
        Self::with_config(AnnotatorConfig::default())
    }

    /// Create an annotator with custom configuration.
    pub fn with_config(config: AnnotatorConfig) -> Self {
        Self {
            config,
            reporter: Arc::new(NullReporter),
        }
    }

    /// Send progress events to `reporter`.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    /// Annotate every question of the set in place.
    pub fn annotate(&self, set: &mut QuestionSet) -> AnnotationSummary {
        let mut summary = AnnotationSummary::new(set.len());

        for (i, question) in set.iter_mut().enumerate() {
            let number = i + 1;
            let outcome = self.annotate_question(number, summary.total_questions, question);
            summary.record(number, &outcome);
        }

        summary
    }

    /// Annotate a single question in place.
    ///
    /// `number` is the 1-based position used in progress events and `total`
    /// the size of the enclosing set.
    pub fn annotate_question(
        &self,
        number: usize,
        total: usize,
        question: &mut Question,
    ) -> QuestionOutcome {
        let Some(options) = question.take_options() else {
            return QuestionOutcome::Untouched;
        };

        let marker = self.config.marker.as_str();
        let original_len = options.len();
        let mut label: Option<String> = None;
        let mut seen_sentinel = false;
        let mut kept: Vec<AnswerOption> = Vec::with_capacity(original_len);

        for option in options {
            if !is_sentinel(option.text(), marker) {
                kept.push(option);
                continue;
            }

            // Only the first sentinel names the answer; later ones are just dropped.
            let found = extract_label(option.text(), marker).map(str::to_string);
            if !seen_sentinel {
                seen_sentinel = true;
                label = found.clone();
            }
            self.reporter.report(&AnnotationEvent::SentinelFound {
                question: number,
                total,
                label: found,
            });
        }

        let removed = original_len - kept.len();
        let outcome = match (seen_sentinel, label) {
            (false, _) => QuestionOutcome::Untouched,
            (true, None) => QuestionOutcome::NoLabel { removed },
            (true, Some(label)) => {
                let position = kept
                    .iter()
                    .position(|option| leading_label(option.text()) == Some(label.as_str()));

                match position {
                    Some(option_index) => {
                        kept[option_index].mark_correct();
                        self.reporter.report(&AnnotationEvent::AnswerMarked {
                            question: number,
                            label: label.clone(),
                        });
                        QuestionOutcome::Marked {
                            label,
                            option_index,
                            removed,
                        }
                    }
                    None => {
                        self.reporter.report(&AnnotationEvent::LabelUnmatched {
                            question: number,
                            label: label.clone(),
                        });
                        QuestionOutcome::Unmatched { label, removed }
                    }
                }
            }
        };

        question.set_options(kept);
        outcome
    }

    /// Load `path`, annotate it, and write the result back to the same path.
    ///
    /// The write truncates the file in place; it is not atomic.
    pub fn run(&self, path: impl AsRef<Path>) -> Result<AnnotationSummary> {
        let path = path.as_ref();
        self.run_to(path, path)
    }

    /// Load `input` and annotate it without writing anything back.
    pub fn preview(&self, input: impl AsRef<Path>) -> Result<(QuestionSet, AnnotationSummary)> {
        let input = input.as_ref();
        self.config.validate()?;

        let mut set = QuestionSet::load(input)?;
        self.reporter.report(&AnnotationEvent::Loaded {
            path: input.to_path_buf(),
            questions: set.len(),
        });

        let summary = self.annotate(&mut set);
        self.reporter.report(&AnnotationEvent::Done);

        Ok((set, summary))
    }

    /// Load `input`, annotate it, and write the result to `output`.
    pub fn run_to(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<AnnotationSummary> {
        let (input, output) = (input.as_ref(), output.as_ref());
        self.config.validate()?;

        let mut set = QuestionSet::load(input)?;
        self.reporter.report(&AnnotationEvent::Loaded {
            path: input.to_path_buf(),
            questions: set.len(),
        });

        let summary = self.annotate(&mut set);

        self.reporter.report(&AnnotationEvent::Saving {
            path: output.to_path_buf(),
            sentinels_removed: summary.sentinels_removed,
        });
        set.save(output)?;
        self.reporter.report(&AnnotationEvent::Done);

        Ok(summary)
    }
}
