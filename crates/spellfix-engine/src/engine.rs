// CorrectionEngine: the session object front ends talk to.
//
// Owns the dictionary and the suggestion cache for one session. All
// mutation goes through `&mut self`; for concurrent callers wrap the engine
// in a `SharedEngine`.
//
// Design notes:
// - The cache belongs to the cached first-match suggester, which the engine
//   owns. Replacing the dictionary does not purge it; stale entries are only
//   dropped by `purge`.
// - The best-match path builds a `BestMatch` per call since it keeps no
//   state.
// - Every request gets a fresh `ScanStatus` built from the configured
//   budget, and each scan inside it starts over. Suggestions therefore do
//   not depend on how the words are batched: `check_text` and
//   `correct_text` agree. Counters are folded into `EngineStats` afterwards.

use serde::Serialize;
use spellfix_core::token::Token;
use spellfix_core::word::{Correction, Word};

use crate::cache::SuggestionCache;
use crate::corrector::{Chooser, FileCorrection, PendingCorrection, apply_choices};
use crate::dictionary::Dictionary;
use crate::normalizer::token_word;
use crate::suggestion::{
    BestMatch, CachedFirstMatch, DEFAULT_MAX_DISTANCE, ScanBudget, ScanStatus, Suggester,
};
use crate::tokenizer::tokenize;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Largest edit distance accepted for a suggestion.
    pub max_distance: usize,
    /// Limits applied to each dictionary scan.
    pub budget: ScanBudget,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            budget: ScanBudget::unlimited(),
        }
    }
}

/// Running totals over the lifetime of an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    /// Suggestions answered from the cache.
    pub cache_hits: usize,
    /// Dictionary scans performed.
    pub scans: usize,
    /// Edit distance evaluations performed.
    pub comparisons: usize,
    /// Scans that ran out of budget.
    pub exhausted_scans: usize,
}

impl EngineStats {
    fn record(&mut self, status: &ScanStatus) {
        self.cache_hits += status.cache_hits();
        self.scans += status.scans();
        self.comparisons += status.comparisons();
        self.exhausted_scans += status.exhausted_scans();
    }
}

/// Outcome of checking a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Misspelled words in text order, repeats included.
    pub misspelled: Vec<Word>,
    /// Suggestions for the misspelled words that have one, in the same order.
    pub corrections: Vec<Correction>,
}

/// Return the normalized form of every token that is not in `dictionary`.
///
/// Tokens without letters are never reported. Order follows the tokens and
/// repeated misspellings are reported each time they occur.
pub fn classify(tokens: &[Token], dictionary: &Dictionary) -> Vec<Word> {
    tokens
        .iter()
        .filter_map(token_word)
        .filter(|word| !dictionary.contains(word.as_str()))
        .collect()
}

/// Spelling classification and correction over one dictionary.
#[derive(Debug, Clone)]
pub struct CorrectionEngine {
    dictionary: Dictionary,
    suggester: CachedFirstMatch,
    options: EngineOptions,
    stats: EngineStats,
}

impl CorrectionEngine {
    /// Create an engine with default options.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_options(dictionary, EngineOptions::default())
    }

    pub fn with_options(dictionary: Dictionary, options: EngineOptions) -> Self {
        Self {
            dictionary,
            suggester: CachedFirstMatch::new(options.max_distance),
            options,
            stats: EngineStats::default(),
        }
    }

    // =========================================================================
    // Dictionary
    // =========================================================================

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Swap in a new dictionary. Cached suggestions are kept.
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
    }

    /// Add a word to the dictionary. Returns `false` if it was already known.
    pub fn insert(&mut self, word: Word) -> bool {
        let inserted = self.dictionary.insert(word);
        if !inserted {
            log::debug!("insert skipped: word already in dictionary");
        }
        inserted
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Misspelled words among `tokens`; see [`classify`].
    pub fn classify(&self, tokens: &[Token]) -> Vec<Word> {
        classify(tokens, &self.dictionary)
    }

    /// Suggest corrections with the cached first-match policy.
    ///
    /// Output order matches input order; words without a suggestion are
    /// omitted.
    pub fn suggest(&mut self, misspelled: &[Word]) -> Vec<Correction> {
        let mut status = ScanStatus::new(self.options.budget);
        let corrections = self
            .suggester
            .suggest(misspelled, &self.dictionary, &mut status);
        self.stats.record(&status);
        corrections
    }

    /// Suggest corrections with the best-match policy: the closest entry
    /// within the threshold, computed afresh each call. Does not read or
    /// fill the cache.
    pub fn suggest_best(&mut self, misspelled: &[Word]) -> Vec<Correction> {
        let mut status = ScanStatus::new(self.options.budget);
        let corrections = BestMatch::new(self.options.max_distance).suggest(
            misspelled,
            &self.dictionary,
            &mut status,
        );
        self.stats.record(&status);
        corrections
    }

    /// Tokenize `text`, classify it and suggest corrections.
    pub fn check_text(&mut self, text: &str) -> CheckReport {
        let misspelled = self.classify(&tokenize(text));
        let corrections = self.suggest(&misspelled);
        CheckReport {
            misspelled,
            corrections,
        }
    }

    // =========================================================================
    // Correcting
    // =========================================================================

    /// Suggestions for every misspelled token that has at least one.
    pub fn pending_corrections(&mut self, tokens: &[Token]) -> Vec<PendingCorrection> {
        let mut pending = Vec::new();
        for (index, token) in tokens.iter().enumerate() {
            let Some(word) = token_word(token) else {
                continue;
            };
            if self.dictionary.contains(word.as_str()) {
                continue;
            }
            let suggestions: Vec<Word> = self
                .suggest(std::slice::from_ref(&word))
                .into_iter()
                .map(|c| c.suggestion)
                .collect();
            if !suggestions.is_empty() {
                pending.push(PendingCorrection {
                    index,
                    word,
                    suggestions,
                });
            }
        }
        pending
    }

    /// Correct a whole text, asking `chooser` about every misspelled token
    /// that has a suggestion.
    ///
    /// A selection that cannot be applied is logged and the token is left
    /// as it was.
    pub fn correct_text(&mut self, text: &str, chooser: &mut impl Chooser) -> FileCorrection {
        let tokens = tokenize(text);
        let pending = self.pending_corrections(&tokens);
        apply_choices(tokens, &pending, chooser)
    }

    // =========================================================================
    // Cache
    // =========================================================================

    /// Drop every cached suggestion. The dictionary is not affected.
    pub fn purge(&mut self) {
        log::debug!("purging {} cached suggestions", self.suggester.cache().len());
        self.suggester.purge();
    }

    pub fn cache(&self) -> &SuggestionCache {
        self.suggester.cache()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }
}

// =========================================================================
// Tests
// =========================================================================
