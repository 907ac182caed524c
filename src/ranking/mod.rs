//! Ranking of scored candidates
//!
//! A fixed-capacity, always-sorted top-K structure fed one candidate at a time.

mod top_k;

pub use top_k::{DEFAULT_TOP, Ranking, ScoredEntry};
