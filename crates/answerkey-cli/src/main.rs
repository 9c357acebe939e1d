//! answerkey CLI - fold correct-answer sentinels into quiz question files.

mod cli;
mod commands;
mod reporter;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::annotate::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
