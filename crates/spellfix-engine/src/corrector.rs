// Applying chosen corrections to a token stream
//
// Corrections are applied by token position, never by searching the text:
// replacing the third token must not touch an earlier token that happens
// to be spelled the same. `replace_first` is the unrelated raw-text
// utility and is not used on this path.

use spellfix_core::token::{Token, TokenType};
use spellfix_core::word::{Correction, Word};

/// Error returned when a selection cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The chosen suggestion index is outside the suggestion list.
    #[error("suggestion {index} is out of range (have {len})")]
    OutOfRange { index: usize, len: usize },

    /// The token index is outside the token sequence.
    #[error("token {index} is out of range (have {len})")]
    NoSuchToken { index: usize, len: usize },
}

/// What the user picked for a misspelled token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Leave the token as it is.
    Skip,
    /// Use the suggestion at this zero-based index.
    Suggestion(usize),
}

impl Selection {
    /// Interpret a menu number where `0` means skip and `n` picks the
    /// `n`-th suggestion (one-based).
    pub fn from_menu_choice(choice: usize) -> Self {
        match choice {
            0 => Selection::Skip,
            n => Selection::Suggestion(n - 1),
        }
    }
}

/// Resolve a selection against a suggestion list.
///
/// Returns `Ok(None)` for [`Selection::Skip`].
pub fn select(suggestions: &[Word], selection: Selection) -> Result<Option<&Word>, SelectionError> {
    match selection {
        Selection::Skip => Ok(None),
        Selection::Suggestion(index) => {
            suggestions
                .get(index)
                .map(Some)
                .ok_or(SelectionError::OutOfRange {
                    index,
                    len: suggestions.len(),
                })
        }
    }
}

/// Replace the token at `index` with `replacement`.
pub fn replace_token(
    tokens: &mut [Token],
    index: usize,
    replacement: &Word,
) -> Result<(), SelectionError> {
    let len = tokens.len();
    let token = tokens
        .get_mut(index)
        .ok_or(SelectionError::NoSuchToken { index, len })?;
    token.text = replacement.to_string();
    token.token_type = TokenType::Word;
    Ok(())
}

/// Apply `selection` to the token at `index`.
///
/// Both indices are validated before anything is changed; on error the
/// tokens are untouched. Returns the replacement if a token was replaced.
pub fn apply_selection(
    tokens: &mut [Token],
    index: usize,
    suggestions: &[Word],
    selection: Selection,
) -> Result<Option<Word>, SelectionError> {
    if index >= tokens.len() {
        return Err(SelectionError::NoSuchToken {
            index,
            len: tokens.len(),
        });
    }
    match select(suggestions, selection)? {
        Some(replacement) => {
            replace_token(tokens, index, replacement)?;
            Ok(Some(replacement.clone()))
        }
        None => Ok(None),
    }
}

/// Join tokens back into text.
///
/// Tokens are separated by one space, except that a token starting with
/// punctuation is attached to the one before it. Original runs of
/// whitespace and line breaks collapse to single spaces.
pub fn reassemble(tokens: &[Token]) -> String {
    let capacity = tokens.iter().map(|t| t.text.len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && !token.starts_with_punctuation() {
            text.push(' ');
        }
        text.push_str(&token.text);
    }
    text
}

/// Replace the first occurrence of `old` in `text` with `new`.
///
/// Matches raw substrings, including inside longer words. Returns the text
/// unchanged when `old` does not occur or is empty.
pub fn replace_first(text: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return text.to_string();
    }
    text.replacen(old, new, 1)
}

// ---------------------------------------------------------------------------
// Choosing corrections
// ---------------------------------------------------------------------------

/// Decides which suggestion, if any, to apply to a misspelled token.
///
/// Implemented by interactive front ends; any `FnMut(&Token, &[Word]) ->
/// Selection` closure also works.
pub trait Chooser {
    fn choose(&mut self, token: &Token, suggestions: &[Word]) -> Selection;
}

impl<F> Chooser for F
where
    F: FnMut(&Token, &[Word]) -> Selection,
{
    fn choose(&mut self, token: &Token, suggestions: &[Word]) -> Selection {
        self(token, suggestions)
    }
}

/// Accepts the first suggestion for every token.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptFirst;

impl Chooser for AcceptFirst {
    fn choose(&mut self, _token: &Token, suggestions: &[Word]) -> Selection {
        if suggestions.is_empty() {
            Selection::Skip
        } else {
            Selection::Suggestion(0)
        }
    }
}

/// A misspelled token together with the suggestions offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCorrection {
    /// Position of the token in the token list.
    pub index: usize,
    /// Normalized form of the token.
    pub word: Word,
    /// Suggestions, never empty.
    pub suggestions: Vec<Word>,
}

/// Ask `chooser` about each pending correction, apply the selections and
/// reassemble the text.
///
/// A selection that cannot be applied is logged and the token is left as
/// it was.
pub fn apply_choices(
    mut tokens: Vec<Token>,
    pending: &[PendingCorrection],
    chooser: &mut impl Chooser,
) -> FileCorrection {
    let mut applied = Vec::new();

    for p in pending {
        let Some(token) = tokens.get(p.index) else {
            log::warn!("no token at index {} for {}", p.index, p.word);
            continue;
        };
        let selection = chooser.choose(token, &p.suggestions);
        match apply_selection(&mut tokens, p.index, &p.suggestions, selection) {
            Ok(Some(replacement)) => applied.push(Correction::new(p.word.clone(), replacement)),
            Ok(None) => {}
            Err(e) => log::warn!("ignoring selection for {:?}: {e}", tokens[p.index].text),
        }
    }

    FileCorrection {
        text: reassemble(&tokens),
        changed: !applied.is_empty(),
        applied,
    }
}

/// Result of correcting a whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCorrection {
    /// The reassembled text. When nothing changed this is the reassembled
    /// original, not the original bytes.
    pub text: String,
    /// Whether any token was replaced.
    pub changed: bool,
    /// Corrections that were applied, in text order.
    pub applied: Vec<Correction>,
}
