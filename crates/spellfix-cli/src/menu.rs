// Interactive spell checker menu.

use std::io::{self, BufRead, Write};
use std::path::Path;

use spellfix_engine::normalizer::normalize_word;
use spellfix_engine::{CorrectionEngine, Dictionary};

use crate::prompt::{PromptChooser, read_line};

/// One menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LoadDictionary,
    CheckText,
    CorrectFile,
    AddWord,
    PurgeCache,
    Quit,
}

impl Command {
    /// Parse a menu answer. Case and surrounding whitespace are ignored.
    pub fn parse(answer: &str) -> Option<Self> {
        let mut chars = answer.trim().chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c.to_ascii_uppercase() {
            'L' => Some(Command::LoadDictionary),
            'C' => Some(Command::CheckText),
            'F' => Some(Command::CorrectFile),
            'A' => Some(Command::AddWord),
            'P' => Some(Command::PurgeCache),
            'Q' => Some(Command::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\
---- Spell Checker Menu ----
L: Load dictionary
C: Check text
F: Correct a file
A: Add a word to the dictionary
P: Purge the suggestion cache
Q: Quit
";

/// Menu loop state: the engine plus the terminal it talks to.
pub struct Menu<'a, R, W> {
    engine: &'a mut CorrectionEngine,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: &'a mut CorrectionEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "\n{MENU}")?;
            let Some(answer) = self.prompt("Choose an option: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let keep_going = match Command::parse(&answer) {
                Some(command) => self.dispatch(command)?,
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Run one command. Returns `false` when the loop should stop.
    pub fn dispatch(&mut self, command: Command) -> io::Result<bool> {
        let completed = match command {
            Command::LoadDictionary => self.load_dictionary()?,
            Command::CheckText => self.check_text()?,
            Command::CorrectFile => self.correct_file()?,
            Command::AddWord => self.add_word()?,
            Command::PurgeCache => {
                self.engine.purge();
                writeln!(self.output, "Cache purged.")?;
                true
            }
            Command::Quit => {
                writeln!(self.output, "Exiting program.")?;
                return Ok(false);
            }
        };
        Ok(completed)
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        read_line(&mut self.input, &mut self.output, message)
    }

    // Each command returns `Ok(false)` only when input ended mid-command.

    fn load_dictionary(&mut self) -> io::Result<bool> {
        let Some(path) = self.prompt("Enter dictionary file path: ")? else {
            return Ok(false);
        };
        let (dictionary, err) = Dictionary::open_or_empty(Path::new(path.trim()));
        match err {
            Some(e) => {
                writeln!(self.output, "Failed to load dictionary: {e}")?;
            }
            None if dictionary.is_empty() => {
                writeln!(self.output, "Failed to load dictionary: no words found.")?;
            }
            None => {
                writeln!(
                    self.output,
                    "Dictionary loaded successfully. ({} words)",
                    dictionary.len()
                )?;
            }
        }
        self.engine.set_dictionary(dictionary);
        Ok(true)
    }

    fn check_text(&mut self) -> io::Result<bool> {
        if self.engine.dictionary().is_empty() {
            writeln!(self.output, "Please load a dictionary first.")?;
            return Ok(true);
        }
        let Some(text) = self.prompt("Enter text to check: ")? else {
            return Ok(false);
        };

        let report = self.engine.check_text(&text);
        if report.misspelled.is_empty() {
            writeln!(self.output, "No misspelled words found.")?;
            return Ok(true);
        }

        writeln!(self.output, "Misspelled words:")?;
        for word in &report.misspelled {
            writeln!(self.output, "  {word}")?;
        }
        if !report.corrections.is_empty() {
            writeln!(self.output, "Corrections:")?;
            for correction in &report.corrections {
                writeln!(self.output, "  {correction}")?;
            }
        }
        Ok(true)
    }

    fn correct_file(&mut self) -> io::Result<bool> {
        let Some(path) = self.prompt("Enter file path to correct: ")? else {
            return Ok(false);
        };
        let path = Path::new(path.trim());
        let text = match crate::read_text(path) {
            Ok(text) => text,
            Err(e) => {
                writeln!(self.output, "Unable to open file: {e}")?;
                return Ok(true);
            }
        };

        let result = {
            let mut chooser = PromptChooser::new(&mut self.input, &mut self.output);
            self.engine.correct_text(&text, &mut chooser)
        };

        if !result.changed {
            writeln!(self.output, "No changes made to the file.")?;
            return Ok(true);
        }
        match crate::write_text(path, &result.text) {
            Ok(()) => writeln!(
                self.output,
                "File corrected successfully ({} applied).",
                result.applied.len()
            )?,
            Err(e) => writeln!(self.output, "Unable to write file: {e}")?,
        }
        Ok(true)
    }

    fn add_word(&mut self) -> io::Result<bool> {
        let Some(answer) = self.prompt("Enter word to add: ")? else {
            return Ok(false);
        };
        let Some(word) = normalize_word(&answer) else {
            writeln!(self.output, "Not a valid word.")?;
            return Ok(true);
        };
        if self.engine.insert(word) {
            writeln!(self.output, "Word added successfully.")?;
        } else {
            writeln!(self.output, "Word already exists in the dictionary.")?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run(engine: &mut CorrectionEngine, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(engine, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("l"), Some(Command::LoadDictionary));
        assert_eq!(Command::parse(" Q \n"), Some(Command::Quit));
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse("load"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn check_requires_dictionary() {
        let mut engine = CorrectionEngine::new(Dictionary::new());
        let out = run(&mut engine, "C\nQ\n");
        assert!(out.contains("Please load a dictionary first."));
        assert!(out.contains("Exiting program."));
    }

    #[test]
    fn invalid_option() {
        let mut engine = CorrectionEngine::new(Dictionary::new());
        let out = run(&mut engine, "Z\nQ\n");
        assert!(out.contains("Invalid option. Please try again."));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut engine = CorrectionEngine::new(Dictionary::new());
        let out = run(&mut engine, "");
        assert!(out.contains("---- Spell Checker Menu ----"));
        assert!(!out.contains("Exiting program."));
    }

    #[test]
    fn load_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "hello world").unwrap();

        let mut engine = CorrectionEngine::new(Dictionary::new());
        let script = format!("L\n{}\nC\nHelo wrold!\nC\nhello\nQ\n", path.display());
        let out = run(&mut engine, &script);

        assert!(out.contains("Dictionary loaded successfully. (2 words)"));
        assert!(out.contains("Misspelled words:\n  helo\n  wrold\n"));
        assert!(out.contains("Corrections:\n  helo -> hello\n  wrold -> world\n"));
        assert!(out.contains("No misspelled words found."));
    }

    #[test]
    fn failed_load_leaves_empty_dictionary() {
        let mut engine = CorrectionEngine::new(Dictionary::load("hello"));
        let out = run(&mut engine, "L\n/nonexistent/words.txt\nQ\n");
        assert!(out.contains("Failed to load dictionary"));
        assert!(engine.dictionary().is_empty());
    }

    #[test]
    fn empty_word_list_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, " \n123 ...\n").unwrap();

        let mut engine = CorrectionEngine::new(Dictionary::new());
        let script = format!("L\n{}\nQ\n", path.display());
        let out = run(&mut engine, &script);

        assert!(out.contains("Failed to load dictionary: no words found."));
        assert!(!out.contains("Dictionary loaded successfully"));
        assert!(engine.dictionary().is_empty());
    }

    #[test]
    fn add_word() {
        let mut engine = CorrectionEngine::new(Dictionary::new());
        let out = run(&mut engine, "A\nHello!\nA\nhello\nA\n123\nQ\n");
        assert!(out.contains("Word added successfully."));
        assert!(out.contains("Word already exists in the dictionary."));
        assert!(out.contains("Not a valid word."));
        assert!(engine.dictionary().contains("hello"));
    }

    #[test]
    fn purge_cache() {
        let mut engine = CorrectionEngine::new(Dictionary::load("hello"));
        engine.check_text("helo");
        assert!(!engine.cache().is_empty());
        let out = run(&mut engine, "P\nQ\n");
        assert!(out.contains("Cache purged."));
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn correct_file_writes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "helo wrold").unwrap();

        let mut engine = CorrectionEngine::new(Dictionary::load("hello world"));
        let script = format!("F\n{}\n1\n0\nQ\n", path.display());
        let out = run(&mut engine, &script);

        assert!(out.contains("Suggestions for \"helo\":"));
        assert!(out.contains("File corrected successfully (1 applied)."));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello wrold");
    }

    #[test]
    fn correct_file_unchanged_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "hello   world\n").unwrap();

        let mut engine = CorrectionEngine::new(Dictionary::load("hello world"));
        let script = format!("F\n{}\nQ\n", path.display());
        let out = run(&mut engine, &script);

        assert!(out.contains("No changes made to the file."));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello   world\n");
    }

    #[test]
    fn correct_missing_file() {
        let mut engine = CorrectionEngine::new(Dictionary::load("hello"));
        let out = run(&mut engine, "F\n/nonexistent/note.txt\nQ\n");
        assert!(out.contains("Unable to open file"));
    }
}
