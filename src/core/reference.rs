//! Reference word scoring
//!
//! The score of a candidate is the number of reference characters, counted
//! with repetition, that appear at least once in the candidate. A reference
//! of `"egtoyz"` scores `"heterozygous"` at 6 and `"dog"` at 2; a reference of
//! `"oo"` scores `"dog"` at 2 because the repeated `o` counts twice.

use super::Candidate;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word whose characters define the scoring criterion
///
/// Characters are grouped by multiplicity up front so each distinct
/// character is looked up in a candidate only once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    text: String,
    char_counts: FxHashMap<char, usize>,
}

impl Reference {
    /// Create a reference from a word, used exactly as given (no case folding)
    ///
    /// # Examples
    /// ```
    /// use dicrank::core::{Candidate, Reference};
    ///
    /// let reference = Reference::new("egtoyz");
    /// assert_eq!(reference.score(&Candidate::normalize("heterozygous/X")), 6);
    /// assert_eq!(reference.score(&Candidate::normalize("cat")), 1);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();

        let mut char_counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in text.chars() {
            *char_counts.entry(ch).or_insert(0) += 1;
        }

        Self { text, char_counts }
    }

    /// Get the reference word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Highest score any candidate can reach
    #[inline]
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.char_counts.values().sum()
    }

    /// Score a candidate against this reference
    #[must_use]
    pub fn score(&self, candidate: &Candidate) -> usize {
        self.char_counts
            .iter()
            .filter(|&(&ch, _)| candidate.contains(ch))
            .map(|(_, &count)| count)
            .sum()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Score a single candidate string against a reference string
///
/// Convenience for one-off scoring; build a [`Reference`] once when scoring
/// many candidates.
#[must_use]
pub fn score(candidate: &str, reference: &str) -> usize {
    reference.chars().filter(|&ch| candidate.contains(ch)).count()
}
