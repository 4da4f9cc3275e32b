// Known-word set and word list loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use spellfix_core::character::is_whitespace;
use spellfix_core::word::Word;

use crate::normalizer::normalize_word;

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be opened or read.
    #[error("could not open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A set of known words.
///
/// Entries are normalized on the way in, with the same normalizer that is
/// applied to text tokens, so "Hello," in a word list and "hello" in text
/// match. Iteration yields words in the order they were first added; this
/// is the order in which suggestion scans visit candidates.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Insertion-ordered entries.
    words: Vec<Word>,
    /// Membership index over `words`.
    index: HashSet<Word>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from the contents of a word list.
    ///
    /// The list is whitespace-separated; any number of words may share a
    /// line. Entries without letters are skipped and repeated entries are
    /// kept once.
    pub fn load(word_list: &str) -> Self {
        let mut dictionary = Self::new();
        for raw in word_list.split(is_whitespace).filter(|s| !s.is_empty()) {
            if let Some(word) = normalize_word(raw) {
                dictionary.insert(word);
            }
        }
        dictionary
    }

    /// Read and load a word list file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|source| DictionaryError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        let dictionary = Self::load(&contents);
        log::info!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Like [`Dictionary::open`], but an unreadable source gives an empty
    /// dictionary alongside the error instead of failing.
    pub fn open_or_empty(path: impl AsRef<Path>) -> (Self, Option<DictionaryError>) {
        match Self::open(path) {
            Ok(dictionary) => (dictionary, None),
            Err(e) => {
                log::warn!("{e}");
                (Self::new(), Some(e))
            }
        }
    }

    /// Membership test. `word` is compared as given; normalize text tokens
    /// before asking.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Add a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.index.contains(word.as_str()) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.insert(word);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn load_splits_on_any_whitespace() {
        let dict = Dictionary::load("hello world\nfoo\tbar\r\n\n  baz ");
        assert_eq!(dict.len(), 5);
        for w in ["hello", "world", "foo", "bar", "baz"] {
            assert!(dict.contains(w), "{w}");
        }
    }

    #[test]
    fn load_normalizes_entries() {
        let dict = Dictionary::load("Hello World's 42");
        assert!(dict.contains("hello"));
        assert!(dict.contains("worlds"));
        assert!(!dict.contains("Hello"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn load_keeps_first_occurrence_order() {
        let dict = Dictionary::load("b a b c a");
        let order: Vec<&str> = dict.iter().map(Word::as_str).collect();
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn empty_word_list() {
        let dict = Dictionary::load("");
        assert!(dict.is_empty());
        assert!(!dict.contains(""));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut dict = Dictionary::new();
        assert!(dict.insert(word("cat")));
        assert!(!dict.insert(word("cat")));
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("cat"));
    }

    #[test]
    fn insert_appends_to_iteration_order() {
        let mut dict = Dictionary::load("one two");
        dict.insert(word("three"));
        let order: Vec<&str> = dict.iter().map(Word::as_str).collect();
        assert_eq!(order, ["one", "two", "three"]);
    }

    #[test]
    fn collect_from_words() {
        let dict: Dictionary = ["x", "y", "x"].into_iter().map(word).collect();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn open_missing_file_is_source_unavailable() {
        let err = Dictionary::open("/nonexistent/spellfix/words.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/spellfix/words.txt"));
    }

    #[test]
    fn open_or_empty_recovers() {
        let (dict, err) = Dictionary::open_or_empty("/nonexistent/spellfix/words.txt");
        assert!(dict.is_empty());
        assert!(err.is_some());
    }
}
