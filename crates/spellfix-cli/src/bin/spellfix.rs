// spellfix: interactive spell checker.
//
// Presents a menu for loading a word list, checking text, correcting a file
// in place, adding words and purging the suggestion cache.
//
// Usage:
//   spellfix [-d PATH] [-v|-q]
//
// With -d (or SPELLFIX_DICT) the word list is loaded before the menu opens.

use std::io;

use clap::Parser;
use spellfix_cli::CommonArgs;
use spellfix_cli::menu::Menu;
use spellfix_engine::{CorrectionEngine, Dictionary};

#[derive(Parser, Debug)]
#[command(name = "spellfix", version, about = "Interactive spell checker")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    spellfix_cli::init_logging(cli.common.log_level());

    let dictionary = match cli.common.dict.as_deref() {
        Some(path) => {
            let (dictionary, err) = Dictionary::open_or_empty(path);
            match err {
                Some(e) => eprintln!("{e}; starting with an empty dictionary"),
                None if dictionary.is_empty() => {
                    eprintln!("{}: no words found", path.display())
                }
                None => println!("Dictionary loaded successfully. ({} words)", dictionary.len()),
            }
            dictionary
        }
        None => Dictionary::new(),
    };
    let mut engine = CorrectionEngine::new(dictionary);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&mut engine, stdin.lock(), stdout.lock());
    if let Err(e) = menu.run() {
        spellfix_cli::fatal(&format!("terminal I/O failed: {e}"));
    }

    let stats = engine.stats();
    log::info!(
        "session: {} scans, {} cache hits, {} comparisons",
        stats.scans,
        stats.cache_hits,
        stats.comparisons
    );
}
