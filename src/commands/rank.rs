//! Rank command
//!
//! Scans a word list once, scoring every candidate against the reference word
//! and keeping the best ones.

use crate::core::{Candidate, Reference};
use crate::error::Result;
use crate::ranking::{DEFAULT_TOP, Ranking};
use crate::wordlists::LineSource;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for ranking a word list
pub struct RankConfig {
    pub path: PathBuf,
    pub reference: String,
    pub top: usize,
}

impl RankConfig {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, reference: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reference: reference.into(),
            top: DEFAULT_TOP,
        }
    }

    /// Keep `top` entries instead of the default
    #[must_use]
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

/// Result of ranking a word list
pub struct RankResult {
    pub ranking: Ranking,
    pub reference: Reference,
    pub candidates_scanned: usize,
    pub duration: Duration,
}

impl RankResult {
    /// Scan throughput in candidates per second
    #[must_use]
    pub fn words_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.candidates_scanned as f64 / secs
        } else {
            0.0
        }
    }
}

/// Score and rank a stream of candidates
///
/// Returns the ranking and the number of candidates consumed.
///
/// # Panics
///
/// Panics if `top` is zero.
///
/// # Examples
/// ```
/// use dicrank::commands::rank_words;
/// use dicrank::core::{Candidate, Reference};
///
/// let candidates = ["heterozygous/X", "cat", "dog"].map(Candidate::normalize);
/// let (ranking, scanned) = rank_words(candidates, &Reference::new("egtoyz"), 10);
///
/// assert_eq!(scanned, 3);
/// assert_eq!(ranking.to_string(), "heterozygous 6\ndog 2\ncat 1");
/// ```
#[must_use]
pub fn rank_words<I>(candidates: I, reference: &Reference, top: usize) -> (Ranking, usize)
where
    I: IntoIterator<Item = Candidate>,
{
    let mut ranking = Ranking::new(top);
    let mut scanned = 0;

    for candidate in candidates {
        let score = reference.score(&candidate);
        ranking.register(candidate.into_text(), score);
        scanned += 1;
    }

    (ranking, scanned)
}

/// Open the configured word list and rank it
///
/// # Errors
///
/// Returns an error if the word list cannot be opened. Nothing is ranked in
/// that case.
///
/// # Panics
///
/// Panics if `config.top` is zero.
pub fn run_rank(config: &RankConfig) -> Result<RankResult> {
    let reference = Reference::new(config.reference.as_str());
    let source = LineSource::open(&config.path)?;

    let start = Instant::now();
    let (ranking, candidates_scanned) = rank_words(source, &reference, config.top);
    let duration = start.elapsed();

    debug!(
        candidates_scanned,
        kept = ranking.len(),
        best = ?ranking.best_score(),
        ?duration,
        "ranked word list"
    );

    Ok(RankResult {
        ranking,
        reference,
        candidates_scanned,
        duration,
    })
}
