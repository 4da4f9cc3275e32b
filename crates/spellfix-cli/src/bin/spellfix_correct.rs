// spellfix-correct: correct a text file in place.
//
// For every misspelled word that has a suggestion, asks which replacement
// to use (0 skips). With --auto the first suggestion is taken without
// asking. The file is rewritten only if something changed.
//
// Usage:
//   spellfix-correct [-d PATH] [--auto] [--dry-run] FILE

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use spellfix_cli::prompt::PromptChooser;
use spellfix_cli::{CliError, CommonArgs};
use spellfix_engine::{AcceptFirst, CorrectionEngine};

#[derive(Parser, Debug)]
#[command(name = "spellfix-correct", version, about = "Correct spelling in a file")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Take the first suggestion for every word without asking
    #[arg(long)]
    auto: bool,

    /// Print the corrected text instead of writing the file
    #[arg(long)]
    dry_run: bool,

    /// File to correct
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    spellfix_cli::init_logging(cli.common.log_level());

    if let Err(e) = run(&cli) {
        spellfix_cli::fatal(&e.to_string());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let dictionary = spellfix_cli::load_dictionary(cli.common.dict.as_deref())?;
    let mut engine = CorrectionEngine::new(dictionary);
    let text = spellfix_cli::read_text(&cli.file)?;

    let result = if cli.auto {
        engine.correct_text(&text, &mut AcceptFirst)
    } else {
        let mut input = io::stdin().lock();
        let mut output = io::stderr().lock();
        engine.correct_text(&text, &mut PromptChooser::new(&mut input, &mut output))
    };

    for correction in &result.applied {
        log::info!("{correction}");
    }

    if cli.dry_run {
        let mut out = io::stdout().lock();
        return writeln!(out, "{}", result.text).map_err(|source| CliError::Io {
            path: "<stdout>".into(),
            source,
        });
    }

    if result.changed {
        spellfix_cli::write_text(&cli.file, &result.text)?;
        eprintln!(
            "{}: {} corrections applied",
            cli.file.display(),
            result.applied.len()
        );
    } else {
        eprintln!("{}: no changes", cli.file.display());
    }
    Ok(())
}
