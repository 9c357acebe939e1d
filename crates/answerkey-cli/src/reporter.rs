//! Console progress output.

use colored::Colorize;

use answerkey::{AnnotationEvent, Reporter};

/// Prints annotation progress to stderr.
///
/// Per-question notices only appear in verbose mode; unmatched labels are
/// always shown since they usually point at a broken question.
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: &AnnotationEvent) {
        match event {
            AnnotationEvent::Loaded { path, questions } => {
                eprintln!(
                    "{} {} ({} questions)",
                    "Loaded".cyan().bold(),
                    path.display().to_string().white(),
                    questions.to_string().white().bold()
                );
            }
            AnnotationEvent::SentinelFound {
                question,
                total,
                label,
            } => {
                if self.verbose {
                    let label = label.as_deref().unwrap_or("none");
                    eprintln!(
                        "  Question {}/{}: found correct answer {}",
                        question,
                        total,
                        label.green()
                    );
                }
            }
            AnnotationEvent::AnswerMarked { question, label } => {
                if self.verbose {
                    eprintln!(
                        "  Question {}: marked option [{}] correct",
                        question,
                        label.green()
                    );
                }
            }
            AnnotationEvent::LabelUnmatched { question, label } => {
                eprintln!(
                    "{} question {} names [{}] but no option carries that label",
                    "Warning:".yellow().bold(),
                    question,
                    label
                );
            }
            AnnotationEvent::Saving {
                path,
                sentinels_removed,
            } => {
                eprintln!(
                    "{} {} (removed {} sentinel options)",
                    "Saving".cyan().bold(),
                    path.display().to_string().white(),
                    sentinels_removed.to_string().white().bold()
                );
            }
            AnnotationEvent::Done => {
                if self.verbose {
                    eprintln!("{}", "Done".green().bold());
                }
            }
        }
    }
}
