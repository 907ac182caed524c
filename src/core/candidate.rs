//! Dictionary candidate representation
//!
//! A Candidate is one word-list line after normalization: lowercased and cut
//! at the first delimiter so ispell affix flags and trailing metadata drop off.

use std::fmt;

/// Delimiters that end the word part of a dictionary line, in priority order
pub const DELIMITERS: [char; 3] = ['/', ' ', '\t'];

/// A normalized word token taken from one word-list line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalize a raw dictionary line into a candidate
    ///
    /// Never fails: an empty or malformed line yields a (possibly empty)
    /// candidate all the same.
    ///
    /// # Examples
    /// ```
    /// use dicrank::core::Candidate;
    ///
    /// assert_eq!(Candidate::normalize("Heterozygous/X").text(), "heterozygous");
    /// assert_eq!(Candidate::normalize("cat\tnoun").text(), "cat");
    /// assert_eq!(Candidate::normalize("").text(), "");
    /// ```
    #[must_use]
    pub fn normalize(line: &str) -> Self {
        // Simple per-character mapping: no final-sigma context, no expansion
        let mut text: String = line
            .chars()
            .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
            .collect();

        // Each delimiter is checked against the already truncated text
        for delimiter in DELIMITERS {
            if let Some(end) = text.find(delimiter) {
                text.truncate(end);
            }
        }

        Self { text }
    }

    /// Get the candidate as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the candidate contains a character anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.text.contains(ch)
    }

    /// Take ownership of the underlying string
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
