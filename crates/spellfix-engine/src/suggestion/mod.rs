// Suggestion generation
//
//   - `strategy`: the `Suggester` trait and its two policies
//   - `status`: per-scan budget and request counters

pub mod status;
pub mod strategy;

pub use status::{ScanBudget, ScanStatus};
pub use strategy::{BestMatch, CachedFirstMatch, DEFAULT_MAX_DISTANCE, Suggester};
