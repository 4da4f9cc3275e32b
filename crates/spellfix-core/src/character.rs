// Character classification for tokenizing and normalizing text
//
// Only ASCII is classified. A character outside ASCII is never a letter (so
// the normalizer drops it) and never punctuation (so the tokenizer keeps it
// attached to its word).

/// Check whether a character is an ASCII letter (`A-Z`, `a-z`).
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether a character is ASCII punctuation.
///
/// This is every printable, non-alphanumeric, non-space ASCII character:
/// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Check whether a character separates words.
///
/// Recognizes space, tab, line feed, vertical tab, form feed and carriage
/// return. Unlike [`char::is_ascii_whitespace`], vertical tab (U+000B) is
/// included.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r')
}

/// Convert an ASCII letter to lowercase. Other characters are returned as-is.
pub fn simple_lower(c: char) -> char {
    c.to_ascii_lowercase()
}
