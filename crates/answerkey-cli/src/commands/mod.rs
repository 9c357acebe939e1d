//! CLI command implementations.

pub mod annotate;
