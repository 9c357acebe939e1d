//! Annotate command - remove sentinel options and flag the answers they name.

use colored::Colorize;

use answerkey::persistence::{backup, list_history};
use answerkey::{AnnotationSummary, AnnotatorConfig, QuestionAnnotator};

use crate::cli::Cli;
use crate::reporter::ConsoleReporter;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnnotatorConfig::new().with_marker(cli.marker);
    config.validate()?;

    let annotator =
        QuestionAnnotator::with_config(config).with_reporter(ConsoleReporter::new(cli.verbose));

    if cli.dry_run {
        let (_, summary) = annotator.preview(&cli.file)?;
        print_summary(&summary);
        println!();
        println!("{} No changes written (dry run).", "Note:".yellow());
        return Ok(());
    }

    let output = cli.output.unwrap_or_else(|| cli.file.clone());

    if cli.backup && output.exists() {
        let snapshot = backup(&output)?;
        println!(
            "{} {}",
            "Backed up to".cyan().bold(),
            snapshot.display().to_string().white()
        );

        let kept = list_history(&output)?.len();
        let noun = if kept == 1 { "snapshot" } else { "snapshots" };
        println!("  {} {} kept", kept.to_string().white().bold(), noun);
    }

    let summary = annotator.run_to(&cli.file, &output)?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &AnnotationSummary) {
    println!();
    println!("{}", "Summary:".yellow().bold());
    println!(
        "  Questions:         {}",
        summary.total_questions.to_string().white()
    );
    println!(
        "  With sentinel:     {}",
        summary.questions_with_sentinel.to_string().white()
    );
    println!(
        "  Sentinels removed: {}",
        summary.sentinels_removed.to_string().white()
    );
    println!(
        "  Answers marked:    {}",
        summary.answers_marked.to_string().green()
    );

    if !summary.unmatched.is_empty() {
        println!(
            "  Unmatched labels:  {}",
            summary.unmatched.len().to_string().red()
        );
        for unmatched in &summary.unmatched {
            println!("    question {} -> [{}]", unmatched.question, unmatched.label);
        }
    }

    if !summary.missing_label.is_empty() {
        let numbers: Vec<String> = summary
            .missing_label
            .iter()
            .map(|n| n.to_string())
            .collect();
        println!(
            "  Missing labels:    {} (questions {})",
            summary.missing_label.len().to_string().red(),
            numbers.join(", ")
        );
    }
}
