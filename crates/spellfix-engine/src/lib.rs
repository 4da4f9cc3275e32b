//! Spelling correction engine.
//!
//! Classifies the tokens of a text against a word list and proposes
//! corrections for unknown words by Levenshtein distance, memoizing the
//! result of every dictionary scan.
//!
//! # Architecture
//!
//! - [`normalizer`] -- strips non-letters and lowercases a token
//! - [`tokenizer`] -- whitespace tokenizer with trailing punctuation split
//! - [`dictionary`] -- the known-word set and its loaders
//! - [`distance`] -- edit distance
//! - [`cache`] -- first-writer-wins suggestion cache
//! - [`suggestion`] -- the `Suggester` strategies and scan budget
//! - [`engine`] -- `CorrectionEngine`, the session object the UI talks to
//! - [`corrector`] -- applying chosen suggestions to a token stream
//! - [`shared`] -- a lock-serialized engine for concurrent callers

pub mod cache;
pub mod corrector;
pub mod dictionary;
pub mod distance;
pub mod engine;
pub mod normalizer;
pub mod shared;
pub mod suggestion;
pub mod tokenizer;

pub use cache::SuggestionCache;
pub use corrector::{
    AcceptFirst, Chooser, FileCorrection, PendingCorrection, Selection, SelectionError,
};
pub use dictionary::{Dictionary, DictionaryError};
pub use engine::{CheckReport, CorrectionEngine, EngineOptions, EngineStats};
pub use shared::SharedEngine;
pub use suggestion::{BestMatch, CachedFirstMatch, ScanBudget, Suggester};

pub use spellfix_core::token::{Token, TokenType};
pub use spellfix_core::word::{Correction, Word, WordError};
