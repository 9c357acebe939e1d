//! Progress reporting for annotation runs.
//!
//! The annotator never writes to a stream itself. It hands
//! [`AnnotationEvent`]s to a [`Reporter`]; the CLI prints them, tests collect
//! them, and library callers get [`NullReporter`] unless they opt in.

mod reporter;

pub use reporter::{AnnotationEvent, CollectingReporter, NullReporter, Reporter};
