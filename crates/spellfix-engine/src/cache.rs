// Suggestion cache: misspelled word -> first suggestion found for it

use hashbrown::HashMap;
use spellfix_core::word::Word;

/// Memoizes the suggestion found for each misspelled word.
///
/// An entry, once stored, is never replaced: a later `store` for the same
/// word is ignored even if it carries a better suggestion. Entries are only
/// removed by [`SuggestionCache::purge`]. The cache has no size bound and no
/// eviction.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    entries: HashMap<Word, Word>,
}

impl SuggestionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached suggestion for `word`, if any.
    pub fn lookup(&self, word: &str) -> Option<&Word> {
        self.entries.get(word)
    }

    /// Store `suggestion` for `word` unless `word` already has an entry.
    ///
    /// Returns `true` if the entry was stored.
    pub fn store(&mut self, word: Word, suggestion: Word) -> bool {
        match self.entries.entry(word) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(suggestion);
                true
            }
        }
    }

    /// Remove every entry.
    pub fn purge(&mut self) {
        self.entries.clear();
    }

    /// Return the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = SuggestionCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.lookup("helo").is_none());
    }

    #[test]
    fn store_and_lookup() {
        let mut cache = SuggestionCache::new();
        assert!(cache.store(word("helo"), word("hello")));
        assert_eq!(cache.lookup("helo"), Some(&word("hello")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn first_writer_wins() {
        let mut cache = SuggestionCache::new();
        assert!(cache.store(word("helo"), word("help")));
        assert!(!cache.store(word("helo"), word("hello")));
        assert_eq!(cache.lookup("helo"), Some(&word("help")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn purge_removes_everything() {
        let mut cache = SuggestionCache::new();
        cache.store(word("helo"), word("hello"));
        cache.store(word("wrold"), word("world"));
        cache.purge();
        assert!(cache.is_empty());
        assert!(cache.lookup("helo").is_none());
    }

    #[test]
    fn store_after_purge_takes_new_value() {
        let mut cache = SuggestionCache::new();
        cache.store(word("helo"), word("help"));
        cache.purge();
        assert!(cache.store(word("helo"), word("hello")));
        assert_eq!(cache.lookup("helo"), Some(&word("hello")));
    }

    #[test]
    fn purge_on_empty_cache_is_harmless() {
        let mut cache = SuggestionCache::new();
        cache.purge();
        assert!(cache.is_empty());
    }
}
