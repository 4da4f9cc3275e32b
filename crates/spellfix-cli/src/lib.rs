// spellfix-cli: shared utilities for the command-line tools.

pub mod menu;
pub mod prompt;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use env_logger::Builder;
use log::LevelFilter;
use spellfix_engine::{Dictionary, DictionaryError};

/// Environment variable naming the word list file.
pub const DICT_ENV: &str = "SPELLFIX_DICT";

/// Word list file name looked up in the home and working directories.
const WORDS_FILE: &str = "words.txt";

/// Error type for the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not find a word list in any of the search paths:\n{}", format_paths(.searched))]
    DictionaryNotFound { searched: Vec<PathBuf> },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Word list file (whitespace-separated words)
    #[arg(short = 'd', long = "dict", env = DICT_ENV, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    /// Log level selected by `-q` / `-v`. Warnings are shown by default.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Initialize logging to stderr. `RUST_LOG` overrides `level`.
pub fn init_logging(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Build the list of word list files to try, in order.
///
/// 1. `explicit` (from `--dict` or `SPELLFIX_DICT`)
/// 2. `~/.spellfix/words.txt`
/// 3. `/usr/share/dict/words`
/// 4. `words.txt` in the current directory
pub fn build_search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".spellfix").join(WORDS_FILE));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Locate and load the word list.
///
/// An explicit path is used as-is: if it cannot be read, that is an error
/// rather than a reason to try the fallbacks.
pub fn load_dictionary(explicit: Option<&Path>) -> Result<Dictionary, CliError> {
    if let Some(path) = explicit {
        return Ok(Dictionary::open(path)?);
    }

    let searched = build_search_paths(None);
    for path in &searched {
        if path.is_file() {
            return Ok(Dictionary::open(path)?);
        }
    }
    Err(CliError::DictionaryNotFound { searched })
}

/// Read a whole text file.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a whole text file.
pub fn write_text(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
