// Suggestion strategies: first-match with cache, and global best match

use spellfix_core::word::{Correction, Word};

use super::status::ScanStatus;
use crate::cache::SuggestionCache;
use crate::dictionary::Dictionary;
use crate::distance::levenshtein_within;

/// Largest edit distance at which a dictionary word is offered as a correction.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

// =========================================================================
// Suggester
// =========================================================================

/// A policy for picking a correction for a misspelled word.
pub trait Suggester {
    /// Find a correction for one word, or `None` if no dictionary entry
    /// qualifies (or the budget in `status` ran out).
    fn suggest_word(
        &mut self,
        word: &Word,
        dictionary: &Dictionary,
        status: &mut ScanStatus,
    ) -> Option<Word>;

    /// Suggest corrections for `misspelled`, in input order.
    ///
    /// Words without a correction are left out; the output is shorter than
    /// the input in that case, never padded.
    fn suggest(
        &mut self,
        misspelled: &[Word],
        dictionary: &Dictionary,
        status: &mut ScanStatus,
    ) -> Vec<Correction> {
        misspelled
            .iter()
            .filter_map(|word| {
                self.suggest_word(word, dictionary, status)
                    .map(|suggestion| Correction::new(word.clone(), suggestion))
            })
            .collect()
    }
}

// =========================================================================
// CachedFirstMatch
// =========================================================================

/// Takes the first dictionary entry within `max_distance` and remembers it.
///
/// The scan visits entries in dictionary iteration order and stops at the
/// first qualifying one, so the result is not necessarily the closest
/// entry. The answer is stored in a [`SuggestionCache`] and returned for the
/// same word from then on without scanning, until the cache is purged.
#[derive(Debug, Clone)]
pub struct CachedFirstMatch {
    cache: SuggestionCache,
    max_distance: usize,
}

impl CachedFirstMatch {
    pub fn new(max_distance: usize) -> Self {
        Self {
            cache: SuggestionCache::new(),
            max_distance,
        }
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    /// Drop every remembered suggestion.
    pub fn purge(&mut self) {
        self.cache.purge();
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }
}

impl Default for CachedFirstMatch {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl Suggester for CachedFirstMatch {
    fn suggest_word(
        &mut self,
        word: &Word,
        dictionary: &Dictionary,
        status: &mut ScanStatus,
    ) -> Option<Word> {
        if let Some(cached) = self.cache.lookup(word.as_str()) {
            log::debug!("cache hit: {word} -> {cached}");
            status.record_cache_hit();
            return Some(cached.clone());
        }

        status.start_scan();
        for entry in dictionary {
            if status.should_abort() {
                log::debug!("scan budget exhausted while looking up {word}");
                return None;
            }
            status.charge();
            if levenshtein_within(word.as_bytes(), entry.as_bytes(), self.max_distance).is_some() {
                log::debug!("cache miss: {word} -> {entry}");
                self.cache.store(word.clone(), entry.clone());
                return Some(entry.clone());
            }
        }
        log::debug!("no suggestion within {} for {word}", self.max_distance);
        None
    }
}

// =========================================================================
// BestMatch
// =========================================================================

/// Scans the whole dictionary for the closest entry.
///
/// The entry with the smallest edit distance wins, provided it is within
/// `max_distance`; among equally close entries the earliest in iteration
/// order wins. Nothing is cached, so every call scans.
///
/// This was the earlier suggestion policy, superseded by
/// [`CachedFirstMatch`]. It remains for callers that want the closest
/// match rather than the cheapest one.
#[derive(Debug, Clone, Copy)]
pub struct BestMatch {
    max_distance: usize,
}

impl BestMatch {
    pub fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }
}

impl Default for BestMatch {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl Suggester for BestMatch {
    fn suggest_word(
        &mut self,
        word: &Word,
        dictionary: &Dictionary,
        status: &mut ScanStatus,
    ) -> Option<Word> {
        status.start_scan();
        let mut best: Option<(&Word, usize)> = None;
        for entry in dictionary {
            if status.should_abort() {
                log::debug!("scan budget exhausted while looking up {word}");
                return None;
            }
            status.charge();
            // Only a strictly closer entry can replace the current best.
            let bound = match best {
                Some((_, d)) => d - 1,
                None => self.max_distance,
            };
            if let Some(d) = levenshtein_within(word.as_bytes(), entry.as_bytes(), bound) {
                best = Some((entry, d));
                if d == 0 {
                    break;
                }
            }
        }
        best.map(|(entry, _)| entry.clone())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::status::ScanBudget;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    fn status() -> ScanStatus {
        ScanStatus::new(ScanBudget::unlimited())
    }

    #[test]
    fn first_match_takes_earliest_qualifying_entry() {
        // "heal" (distance 2) comes before "hello" (distance 1).
        let dict = Dictionary::load("heal hello");
        let mut suggester = CachedFirstMatch::default();
        let got = suggester.suggest_word(&word("helo"), &dict, &mut status());
        assert_eq!(got, Some(word("heal")));
    }

    #[test]
    fn best_match_takes_closest_entry() {
        let dict = Dictionary::load("heal hello");
        let mut suggester = BestMatch::default();
        let got = suggester.suggest_word(&word("helo"), &dict, &mut status());
        assert_eq!(got, Some(word("hello")));
    }

    #[test]
    fn best_match_ties_go_to_earliest() {
        // "cat" and "cut" are both distance 1 from "cot".
        let dict = Dictionary::load("cut cat");
        let mut suggester = BestMatch::default();
        let got = suggester.suggest_word(&word("cot"), &dict, &mut status());
        assert_eq!(got, Some(word("cut")));
    }

    #[test]
    fn nothing_within_threshold() {
        let dict = Dictionary::load("elephant");
        let mut first = CachedFirstMatch::default();
        let mut best = BestMatch::default();
        assert_eq!(first.suggest_word(&word("cat"), &dict, &mut status()), None);
        assert_eq!(best.suggest_word(&word("cat"), &dict, &mut status()), None);
        assert!(first.cache().is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let dict = Dictionary::load("world");
        let mut suggester = CachedFirstMatch::default();
        assert_eq!(
            suggester.suggest_word(&word("wrold"), &dict, &mut status()),
            Some(word("world"))
        );
        assert_eq!(
            suggester.suggest_word(&word("wxxxd"), &dict, &mut status()),
            None
        );
    }

    #[test]
    fn cache_hit_skips_scan() {
        let dict = Dictionary::load("hello world");
        let mut suggester = CachedFirstMatch::default();

        let mut first = status();
        suggester.suggest_word(&word("helo"), &dict, &mut first);
        assert_eq!(first.scans(), 1);
        assert_eq!(first.comparisons(), 1);

        let mut second = status();
        let got = suggester.suggest_word(&word("helo"), &dict, &mut second);
        assert_eq!(got, Some(word("hello")));
        assert_eq!(second.scans(), 0);
        assert_eq!(second.comparisons(), 0);
        assert_eq!(second.cache_hits(), 1);
    }

    #[test]
    fn cached_answer_is_sticky() {
        let mut dict = Dictionary::load("heal");
        let mut suggester = CachedFirstMatch::default();
        suggester.suggest_word(&word("helo"), &dict, &mut status());

        dict.insert(word("hello"));
        let got = suggester.suggest_word(&word("helo"), &dict, &mut status());
        assert_eq!(got, Some(word("heal")));

        suggester.purge();
        // After a purge the scan runs again; "heal" is still first.
        let mut after = status();
        let got = suggester.suggest_word(&word("helo"), &dict, &mut after);
        assert_eq!(got, Some(word("heal")));
        assert_eq!(after.scans(), 1);
    }

    #[test]
    fn best_match_never_caches() {
        let dict = Dictionary::load("hello");
        let mut suggester = BestMatch::default();
        let mut st = status();
        suggester.suggest_word(&word("helo"), &dict, &mut st);
        suggester.suggest_word(&word("helo"), &dict, &mut st);
        assert_eq!(st.scans(), 2);
    }

    #[test]
    fn suggest_keeps_input_order_and_drops_misses() {
        let dict = Dictionary::load("hello world");
        let mut suggester = CachedFirstMatch::default();
        let got = suggester.suggest(&words(&["wrold", "zzzzzzz", "helo"]), &dict, &mut status());
        let pairs: Vec<(&str, &str)> = got
            .iter()
            .map(|c| (c.misspelled.as_str(), c.suggestion.as_str()))
            .collect();
        assert_eq!(pairs, [("wrold", "world"), ("helo", "hello")]);
    }

    #[test]
    fn empty_dictionary_suggests_nothing() {
        let dict = Dictionary::new();
        let mut suggester = CachedFirstMatch::default();
        let mut st = status();
        assert!(suggester.suggest(&words(&["helo"]), &dict, &mut st).is_empty());
        assert_eq!(st.comparisons(), 0);
    }

    #[test]
    fn exhausted_budget_suggests_nothing_and_caches_nothing() {
        let dict = Dictionary::load("aaaa bbbb hello");
        let mut suggester = CachedFirstMatch::default();
        let mut st = ScanStatus::new(ScanBudget::unlimited().with_max_comparisons(2));
        assert_eq!(suggester.suggest_word(&word("helo"), &dict, &mut st), None);
        assert!(st.is_exhausted());
        assert!(suggester.cache().is_empty());
    }

    #[test]
    fn cache_hits_are_served_after_exhaustion() {
        let dict = Dictionary::load("hello");
        let mut suggester = CachedFirstMatch::default();
        suggester.suggest_word(&word("helo"), &dict, &mut status());

        let mut st = ScanStatus::new(ScanBudget::unlimited().with_max_comparisons(0));
        assert_eq!(
            suggester.suggest_word(&word("helo"), &dict, &mut st),
            Some(word("hello"))
        );
    }

    #[test]
    fn custom_threshold() {
        let dict = Dictionary::load("hello");
        let mut strict = CachedFirstMatch::new(0);
        assert_eq!(strict.suggest_word(&word("helo"), &dict, &mut status()), None);
        let mut loose = BestMatch::new(3);
        assert_eq!(
            loose.suggest_word(&word("hxxo"), &dict, &mut status()),
            Some(word("hello"))
        );
    }
}
