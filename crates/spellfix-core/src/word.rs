// Dictionary words and corrections

use std::fmt;

use serde::Serialize;

/// Error returned when a string is not a valid [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("empty word")]
    Empty,
    #[error("invalid character {ch:?} at byte offset {pos}")]
    InvalidChar { ch: char, pos: usize },
}

/// A non-empty sequence of lowercase ASCII letters.
///
/// Words are the unit stored in the dictionary, compared by the edit
/// distance, and used as cache keys. Raw text is turned into words by the
/// normalizer; `Word::new` only validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Validate `text` as a word.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some((pos, ch)) = text.char_indices().find(|(_, c)| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidChar { ch, pos });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in letters (always at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a valid word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ---------------------------------------------------------------------------
// Correction
// ---------------------------------------------------------------------------

/// A proposed fix: the misspelled word and the dictionary word suggested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub misspelled: Word,
    pub suggestion: Word,
}

impl Correction {
    pub fn new(misspelled: Word, suggestion: Word) -> Self {
        Self {
            misspelled,
            suggestion,
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.misspelled, self.suggestion)
    }
}
