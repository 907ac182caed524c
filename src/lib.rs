//! Dictionary Ranker
//!
//! Scores every entry of a word list against a reference word and keeps the
//! entries that contain the most of its characters.
//!
//! # Quick Start
//!
//! ```rust
//! use dicrank::core::{Candidate, Reference};
//! use dicrank::ranking::Ranking;
//!
//! let reference = Reference::new("egtoyz");
//! let mut ranking = Ranking::new(10);
//!
//! for line in ["heterozygous/X", "cat", "dog"] {
//!     let candidate = Candidate::normalize(line);
//!     let score = reference.score(&candidate);
//!     ranking.register(candidate.into_text(), score);
//! }
//!
//! assert_eq!(ranking.to_string(), "heterozygous 6\ndog 2\ncat 1");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Top-K ranking
pub mod ranking;

// Word list input
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
