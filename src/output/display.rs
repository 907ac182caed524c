//! Display functions for command results

use super::formatters::{format_duration, score_bar};
use crate::commands::RankResult;
use crate::ranking::Ranking;
use colored::Colorize;

/// Print the ranking to stdout, one `"<word> <score>"` line per entry
pub fn print_ranking(ranking: &Ranking) {
    println!("{ranking}");
}

/// Print a summary of the scan to stderr
///
/// Goes to stderr so the ranking on stdout stays machine-readable.
pub fn print_scan_summary(result: &RankResult) {
    let max_score = result.reference.max_score();
    let best = result.ranking.best_score().unwrap_or(0);

    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(
        " {} {} ",
        "SCAN SUMMARY:".bright_cyan().bold(),
        result.reference.text().bright_yellow().bold()
    );
    eprintln!("{}", "═".repeat(60).cyan());

    eprintln!("   Candidates:   {}", result.candidates_scanned);
    eprintln!(
        "   Kept:         {} of {}",
        result.ranking.len(),
        result.ranking.capacity()
    );
    eprintln!(
        "   Best score:   [{}] {}",
        score_bar(best, max_score, 20).green(),
        format!("{best}/{max_score}").bright_yellow()
    );
    eprintln!("   Time taken:   {}", format_duration(result.duration));
    eprintln!("   Words/second: {:.1}", result.words_per_second());
}
