// Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

use spellfix_engine::corrector::select;
use spellfix_engine::{Chooser, Selection, Token, Word};

/// Print `message` without a newline and read one line of input.
///
/// Returns `Ok(None)` at end of input. The trailing newline is stripped.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Parse a numbered menu answer. Anything that is not a number means skip.
pub fn parse_choice(answer: &str) -> Selection {
    match answer.trim().parse::<usize>() {
        Ok(n) => Selection::from_menu_choice(n),
        Err(_) => Selection::Skip,
    }
}

/// Asks the user to pick a replacement for each misspelled word.
///
/// Suggestions are listed from 1; `0` leaves the word unchanged. A number
/// outside the list is reported and treated as a skip, as is end of input.
pub struct PromptChooser<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> PromptChooser<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, token: &Token, suggestions: &[Word]) -> io::Result<Selection> {
        writeln!(self.output, "Misspelled word: {}", token.text)?;
        writeln!(self.output, "Suggestions for \"{}\":", token.text)?;
        for (i, suggestion) in suggestions.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, suggestion)?;
        }
        writeln!(self.output, "0: Skip (make no change)")?;

        let Some(answer) = read_line(self.input, self.output, "Choose a correction (number): ")?
        else {
            writeln!(self.output)?;
            return Ok(Selection::Skip);
        };

        let selection = parse_choice(&answer);
        match select(suggestions, selection) {
            Ok(Some(_)) => {
                writeln!(self.output, "Applying correction...")?;
                Ok(selection)
            }
            Ok(None) => Ok(Selection::Skip),
            Err(e) => {
                writeln!(self.output, "Invalid choice ({e}); no change made.")?;
                Ok(Selection::Skip)
            }
        }
    }
}

impl<R: BufRead, W: Write> Chooser for PromptChooser<'_, R, W> {
    fn choose(&mut self, token: &Token, suggestions: &[Word]) -> Selection {
        self.ask(token, suggestions).unwrap_or_else(|e| {
            log::error!("prompt failed: {e}");
            Selection::Skip
        })
    }
}
