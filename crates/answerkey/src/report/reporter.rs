//! Reporter trait and built-in reporters.

use std::path::PathBuf;
use std::sync::Mutex;

/// Something that happened during an annotation run.
///
/// Question numbers are 1-based, matching how the questions are counted in
/// progress output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationEvent {
    /// The question file was read.
    Loaded { path: PathBuf, questions: usize },

    /// A sentinel option was found and dropped.
    SentinelFound {
        question: usize,
        total: usize,
        label: Option<String>,
    },

    /// An option was flagged as the correct answer.
    AnswerMarked { question: usize, label: String },

    /// The sentinel named a label no option carries.
    LabelUnmatched { question: usize, label: String },

    /// About to write the question file.
    Saving {
        path: PathBuf,
        sentinels_removed: usize,
    },

    /// The run finished.
    Done,
}

/// Receives progress events from the annotator.
///
/// Implementations must be thread-safe (Send + Sync) so one reporter can be
/// shared between annotators.
pub trait Reporter: Send + Sync {
    /// Handle a single event.
    fn report(&self, event: &AnnotationEvent);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &AnnotationEvent) {}
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<AnnotationEvent>>,
}

impl CollectingReporter {
    /// Create an empty collecting reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<AnnotationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, event: &AnnotationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for std::sync::Arc<R> {
    fn report(&self, event: &AnnotationEvent) {
        (**self).report(event);
    }
}
