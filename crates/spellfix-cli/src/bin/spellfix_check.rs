// spellfix-check: report misspelled words and suggested corrections.
//
// Checks the text given as arguments, or stdin when there are none.
// Output format:
//   W: word          (misspelled)
//   S: suggestion    (suggestion for the preceding W line)
//
// Usage:
//   spellfix-check [-d PATH] [--best] [--json] [TEXT]...

use std::io::{self, BufWriter, Read, Write};

use clap::Parser;
use spellfix_cli::{CliError, CommonArgs};
use spellfix_engine::{CheckReport, CorrectionEngine, EngineOptions, ScanBudget};

#[derive(Parser, Debug)]
#[command(name = "spellfix-check", version, about = "Check spelling of text")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Pick the closest dictionary word instead of the first close enough one
    #[arg(long)]
    best: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Largest edit distance for a suggestion
    #[arg(long, default_value_t = EngineOptions::default().max_distance)]
    max_distance: usize,

    /// Give up on a word after this many dictionary comparisons
    #[arg(long, value_name = "N")]
    max_comparisons: Option<usize>,

    /// Text to check (reads stdin if omitted)
    text: Vec<String>,
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

    let mut budget = ScanBudget::unlimited();
    if let Some(n) = cli.max_comparisons {
        budget = budget.with_max_comparisons(n);
    }
    let options = EngineOptions {
        max_distance: cli.max_distance,
        budget,
    };
    let mut engine = CorrectionEngine::with_options(dictionary, options);

    let text = if cli.text.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io {
                path: "<stdin>".into(),
                source,
            })?;
        buf
    } else {
        cli.text.join(" ")
    };

    let report = if cli.best {
        let misspelled = engine.classify(&spellfix_engine::tokenizer::tokenize(&text));
        let corrections = engine.suggest_best(&misspelled);
        CheckReport {
            misspelled,
            corrections,
        }
    } else {
        engine.check_text(&text)
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = if cli.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)
    } else {
        write_report(&mut out, &report)
    };
    written
        .and_then(|()| out.flush())
        .map_err(|source| CliError::Io {
            path: "<stdout>".into(),
            source,
        })
}

fn write_report(out: &mut impl Write, report: &CheckReport) -> io::Result<()> {
    for word in &report.misspelled {
        writeln!(out, "W: {word}")?;
        if let Some(c) = report.corrections.iter().find(|c| c.misspelled == *word) {
            writeln!(out, "S: {}", c.suggestion)?;
        }
    }
    Ok(())
}
