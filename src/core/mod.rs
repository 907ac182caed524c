//! Core domain types for dictionary ranking
//!
//! Candidates and the reference word they are scored against. Everything here
//! is pure and independent of I/O.

mod candidate;
mod reference;

pub use candidate::{Candidate, DELIMITERS};
pub use reference::{Reference, score};
