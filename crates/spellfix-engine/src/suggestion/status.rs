// Per-scan budget and request bookkeeping

use std::time::{Duration, Instant};

/// How many deadline checks are skipped between clock reads.
const CLOCK_CHECK_INTERVAL: usize = 64;

/// Limits on the work done by one dictionary scan.
///
/// A scan is the search for one uncached word, so every word of a
/// [`Suggester::suggest`](super::Suggester::suggest) call gets the full
/// budget. The default budget is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanBudget {
    /// Maximum number of distance evaluations per scan.
    pub max_comparisons: Option<usize>,
    /// Wall-clock limit measured from the start of each scan.
    pub deadline: Option<Duration>,
}

impl ScanBudget {
    /// A budget with no limits.
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_comparisons(mut self, max: usize) -> Self {
        self.max_comparisons = Some(max);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Tracks the cost of a suggestion request and decides when a scan aborts.
///
/// Each distance evaluation is charged one unit via [`ScanStatus::charge`].
/// [`ScanStatus::start_scan`] resets the budget; once it runs out,
/// `should_abort` stays `true` until the next scan starts. Totals across
/// all scans of the request are kept for statistics.
#[derive(Debug)]
pub struct ScanStatus {
    budget: ScanBudget,
    scan_started: Instant,
    scan_comparisons: usize,
    scan_exhausted: bool,
    comparisons: usize,
    scans: usize,
    cache_hits: usize,
    exhausted_scans: usize,
}

impl ScanStatus {
    pub fn new(budget: ScanBudget) -> Self {
        Self {
            budget,
            scan_started: Instant::now(),
            scan_comparisons: 0,
            scan_exhausted: false,
            comparisons: 0,
            scans: 0,
            cache_hits: 0,
            exhausted_scans: 0,
        }
    }

    /// Returns `true` if the current scan should make no more distance
    /// evaluations.
    pub fn should_abort(&mut self) -> bool {
        if self.scan_exhausted {
            return true;
        }
        let over_count = self
            .budget
            .max_comparisons
            .is_some_and(|max| self.scan_comparisons >= max);
        let over_time = self.budget.deadline.is_some_and(|deadline| {
            self.scan_comparisons % CLOCK_CHECK_INTERVAL == 0
                && self.scan_started.elapsed() >= deadline
        });
        if over_count || over_time {
            self.scan_exhausted = true;
            self.exhausted_scans += 1;
        }
        self.scan_exhausted
    }

    /// Charge one distance evaluation.
    pub fn charge(&mut self) {
        self.scan_comparisons += 1;
        self.comparisons += 1;
    }

    /// Record the start of a dictionary scan (a cache miss) and give it a
    /// fresh budget.
    pub fn start_scan(&mut self) {
        self.scans += 1;
        self.scan_started = Instant::now();
        self.scan_comparisons = 0;
        self.scan_exhausted = false;
    }

    pub fn record_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    /// Number of distance evaluations charged so far, over all scans.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Number of dictionary scans started.
    pub fn scans(&self) -> usize {
        self.scans
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// Number of scans that ran out of budget.
    pub fn exhausted_scans(&self) -> usize {
        self.exhausted_scans
    }

    /// Whether any scan ran out of budget.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted_scans > 0
    }
}
