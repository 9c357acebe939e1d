//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use answerkey::{DEFAULT_MARKER, DEFAULT_QUESTIONS_PATH};

/// answerkey: turn "correct answer" sentinel options into flagged answers
#[derive(Parser, Debug)]
#[command(name = "answerkey")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the questions file (JSON array of questions)
    #[arg(value_name = "FILE", default_value = DEFAULT_QUESTIONS_PATH)]
    pub file: PathBuf,

    /// Write the result here instead of overwriting FILE
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text identifying a sentinel option
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Show what would change without writing anything
    #[arg(long, conflicts_with_all = ["output", "backup"])]
    pub dry_run: bool,

    /// Snapshot FILE into <stem>.history/ before overwriting it
    #[arg(long)]
    pub backup: bool,

    /// Print a notice for every question touched
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["answerkey"]).unwrap();

        assert_eq!(cli.file, PathBuf::from(DEFAULT_QUESTIONS_PATH));
        assert_eq!(cli.marker, DEFAULT_MARKER);
        assert!(cli.output.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.backup);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "answerkey",
            "bank.json",
            "-o",
            "out.json",
            "--marker",
            "Answer:",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("bank.json"));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.marker, "Answer:");
        assert!(cli.verbose);
    }

    #[test]
    fn test_dry_run_conflicts_with_output() {
        assert!(Cli::try_parse_from(["answerkey", "--dry-run", "-o", "out.json"]).is_err());
        assert!(Cli::try_parse_from(["answerkey", "--dry-run", "--backup"]).is_err());
    }
}
