// Whitespace tokenizer with trailing punctuation split
//
// Text is split on runs of whitespace. When a chunk ends in a punctuation
// character, that one character becomes its own token. Only the last
// character is examined: "wait..." yields "wait.." and ".", and "(word)"
// yields "(word" and ")". Punctuation inside a chunk stays attached.
//
// A chunk that is a single punctuation mark yields an empty word token
// followed by the mark. The empty token normalizes to nothing, so it is
// never checked, and it keeps the mark separated from the previous word
// when the tokens are joined again.

use spellfix_core::character::{is_punctuation, is_whitespace};
use spellfix_core::token::Token;

/// Split `text` into tokens, in order.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (pos, chunk) in chunks(text) {
        push_chunk(&mut tokens, chunk, pos);
    }
    tokens
}

/// Iterate over the whitespace-delimited chunks of `text` with their byte
/// offsets.
fn chunks(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = text;
    let mut offset = 0;
    std::iter::from_fn(move || {
        let start = rest.find(|c: char| !is_whitespace(c))?;
        let after_start = &rest[start..];
        let len = after_start.find(is_whitespace).unwrap_or(after_start.len());
        let chunk = &after_start[..len];
        let pos = offset + start;
        offset = pos + len;
        rest = &after_start[len..];
        Some((pos, chunk))
    })
}

fn push_chunk(tokens: &mut Vec<Token>, chunk: &str, pos: usize) {
    match chunk.char_indices().next_back() {
        Some((last_pos, last)) if is_punctuation(last) => {
            tokens.push(Token::word(&chunk[..last_pos], pos));
            tokens.push(Token::punctuation(last, pos + last_pos));
        }
        _ => tokens.push(Token::word(chunk, pos)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellfix_core::token::TokenType;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn splits_on_whitespace() {
        let tokens = tokenize("the quick  brown\tfox\n");
        assert_eq!(texts(&tokens), ["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn empty_and_blank_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n ").is_empty());
    }

    #[test]
    fn trailing_punctuation_is_split() {
        let tokens = tokenize("helo wrold!");
        assert_eq!(texts(&tokens), ["helo", "wrold", "!"]);
        assert_eq!(tokens[2].token_type, TokenType::Punctuation);
        assert_eq!(tokens[2].pos, 10);
    }

    #[test]
    fn only_one_trailing_character_is_split() {
        let tokens = tokenize("wait...");
        assert_eq!(texts(&tokens), ["wait..", "."]);
    }

    #[test]
    fn embedded_and_leading_punctuation_stay() {
        let tokens = tokenize("don't (stop");
        assert_eq!(texts(&tokens), ["don't", "(stop"]);
    }

    #[test]
    fn lone_punctuation_yields_empty_word_token() {
        let tokens = tokenize("a - b");
        assert_eq!(texts(&tokens), ["a", "", "-", "b"]);
        assert_eq!(tokens[1].token_type, TokenType::Word);
        assert_eq!(tokens[1].pos, 2);
        assert_eq!(tokens[2].pos, 2);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("  one two,");
        assert_eq!(tokens[0].pos, 2);
        assert_eq!(tokens[1].pos, 6);
        assert_eq!(tokens[2].pos, 9);
    }

    #[test]
    fn non_ascii_trailing_character_is_not_split() {
        let tokens = tokenize("caf\u{00E9} ok\u{2026}");
        assert_eq!(texts(&tokens), ["caf\u{00E9}", "ok\u{2026}"]);
    }

    #[test]
    fn tokenizing_twice_is_identical() {
        let text = "Hello, world! How are you?";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
