// Text tokens produced by the tokenizer

use crate::character::is_punctuation;

/// What a token holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A whitespace-delimited chunk, possibly with embedded punctuation.
    /// May be empty when the chunk was a lone punctuation character.
    Word,
    /// A single punctuation character split off the end of a chunk.
    Punctuation,
}

/// A token of the original text.
///
/// `text` is the raw form used for display and reassembly. The normalized
/// form is derived on demand by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,

    /// The raw text of this token.
    pub text: String,

    /// Byte offset of the token in the source text.
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        Self {
            token_type,
            text: text.into(),
            pos,
        }
    }

    pub fn word(text: impl Into<String>, pos: usize) -> Self {
        Self::new(TokenType::Word, text, pos)
    }

    pub fn punctuation(mark: char, pos: usize) -> Self {
        Self::new(TokenType::Punctuation, mark, pos)
    }

    /// Returns `true` if the token's first character is punctuation.
    ///
    /// Reassembly glues such tokens to their predecessor without a space.
    /// An empty token never starts with punctuation.
    pub fn starts_with_punctuation(&self) -> bool {
        self.text.chars().next().is_some_and(is_punctuation)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
