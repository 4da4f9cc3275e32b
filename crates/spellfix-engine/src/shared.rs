// Lock-serialized engine for concurrent callers

use std::sync::Arc;

use parking_lot::Mutex;
use spellfix_core::token::Token;
use spellfix_core::word::{Correction, Word};

use crate::corrector::{Chooser, FileCorrection, apply_choices};
use crate::dictionary::Dictionary;
use crate::engine::{CheckReport, CorrectionEngine, EngineStats};
use crate::tokenizer::tokenize;

/// A [`CorrectionEngine`] that can be cloned and used from several threads.
///
/// Every operation takes the engine lock for its whole duration, so
/// dictionary inserts never overlap a scan and two cache stores for the same
/// word never interleave. The one exception is the chooser passed to
/// `correct_text`, which runs unlocked. Long scans block other callers;
/// bound them with a [`ScanBudget`](crate::ScanBudget) in the engine options.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<CorrectionEngine>>,
}

impl SharedEngine {
    pub fn new(engine: CorrectionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn classify(&self, tokens: &[Token]) -> Vec<Word> {
        self.inner.lock().classify(tokens)
    }

    pub fn suggest(&self, misspelled: &[Word]) -> Vec<Correction> {
        self.inner.lock().suggest(misspelled)
    }

    pub fn suggest_best(&self, misspelled: &[Word]) -> Vec<Correction> {
        self.inner.lock().suggest_best(misspelled)
    }

    pub fn check_text(&self, text: &str) -> CheckReport {
        self.inner.lock().check_text(text)
    }

    /// Like [`CorrectionEngine::correct_text`], but `chooser` runs after
    /// the lock is released, so a prompt waiting on a user does not block
    /// other callers.
    pub fn correct_text(&self, text: &str, chooser: &mut impl Chooser) -> FileCorrection {
        let tokens = tokenize(text);
        let pending = self.inner.lock().pending_corrections(&tokens);
        apply_choices(tokens, &pending, chooser)
    }

    pub fn insert(&self, word: Word) -> bool {
        self.inner.lock().insert(word)
    }

    pub fn set_dictionary(&self, dictionary: Dictionary) {
        self.inner.lock().set_dictionary(dictionary);
    }

    pub fn purge(&self) {
        self.inner.lock().purge();
    }

    pub fn stats(&self) -> EngineStats {
        self.inner.lock().stats()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut CorrectionEngine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }
}

impl From<CorrectionEngine> for SharedEngine {
    fn from(engine: CorrectionEngine) -> Self {
        Self::new(engine)
    }
}
