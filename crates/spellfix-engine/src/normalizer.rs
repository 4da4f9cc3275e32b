// Token normalization: letters only, lowercased

use spellfix_core::character::{is_letter, simple_lower};
use spellfix_core::token::Token;
use spellfix_core::word::Word;

/// Keep only the letters of `token`, lowercased, in their original order.
///
/// Digits, punctuation, symbols and non-ASCII characters are dropped, not
/// replaced. The result is empty when the token has no letters.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|&c| is_letter(c))
        .map(simple_lower)
        .collect()
}

/// Normalize `token` into a checkable word.
///
/// Returns `None` for tokens without letters (e.g. a lone punctuation mark);
/// those are never spell-checked.
pub fn normalize_word(token: &str) -> Option<Word> {
    Word::new(normalize(token)).ok()
}

/// Normalized form of a token's raw text.
pub fn token_word(token: &Token) -> Option<Word> {
    normalize_word(&token.text)
}
