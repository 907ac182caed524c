//! Command implementations

pub mod rank;

pub use rank::{RankConfig, RankResult, rank_words, run_rank};
