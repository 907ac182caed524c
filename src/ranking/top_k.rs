//! Bounded top-K ranking
//!
//! Keeps the highest-scoring entries seen so far in a sorted array of fixed
//! capacity. The array is sorted by descending score after every mutation, so
//! the last slot is always the true minimum and is the only eviction point.
//! Entries with equal scores stay in first-seen order.

use std::fmt;
use tracing::trace;

/// Default number of entries kept
pub const DEFAULT_TOP: usize = 10;

/// A retained word and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    pub word: String,
    pub score: usize,
}

impl fmt::Display for ScoredEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.score)
    }
}

/// The best entries seen so far, sorted by descending score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    entries: Vec<ScoredEntry>,
    capacity: usize,
}

impl Ranking {
    /// Create an empty ranking holding at most `capacity` entries
    ///
    /// # Panics
    /// Panics if `capacity` is zero
    ///
    /// # Examples
    /// ```
    /// use dicrank::ranking::Ranking;
    ///
    /// let mut ranking = Ranking::new(2);
    /// ranking.register("cat", 1);
    /// ranking.register("heterozygous", 6);
    /// ranking.register("dog", 2);
    /// assert_eq!(ranking.to_string(), "heterozygous 6\ndog 2");
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ranking capacity must be at least 1");
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Offer a scored word to the ranking
    ///
    /// While the ranking has room the word is always kept. Once full, it is
    /// kept only if its score is strictly greater than the current lowest,
    /// which it then replaces. Returns whether the word was kept.
    pub fn register(&mut self, word: impl Into<String>, score: usize) -> bool {
        if self.entries.len() == self.capacity {
            match self.entries.last() {
                Some(lowest) if score > lowest.score => {
                    let evicted = self.entries.pop();
                    trace!(?evicted, score, "evicted lowest entry");
                }
                _ => return false,
            }
        }

        // After every entry scoring at least as high: descending, ties first-seen
        let at = self.entries.partition_point(|entry| entry.score >= score);
        self.entries.insert(
            at,
            ScoredEntry {
                word: word.into(),
                score,
            },
        );
        true
    }

    /// Retained entries, best first
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ScoredEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Score of the lowest retained entry, if any
    #[inline]
    #[must_use]
    pub fn lowest_score(&self) -> Option<usize> {
        self.entries.last().map(|entry| entry.score)
    }

    /// Score of the best retained entry, if any
    #[inline]
    #[must_use]
    pub fn best_score(&self) -> Option<usize> {
        self.entries.first().map(|entry| entry.score)
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Self::new(DEFAULT_TOP)
    }
}

/// One `"<word> <score>"` line per entry, no trailing newline
impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
