//! Dictionary Ranker - CLI
//!
//! Prints the dictionary words that share the most characters with a reference word.

use anyhow::Result;
use clap::{Parser, builder::RangedU64ValueParser};
use dicrank::{
    commands::{RankConfig, run_rank},
    output::{print_ranking, print_scan_summary},
    ranking::DEFAULT_TOP,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dicrank",
    about = "Rank dictionary words by how many characters of WORD they contain",
    after_help = "Example:\n  $ dicrank en_GB.dic egtoyz\n  benzoylmethylecgonine 6\n  cyberorganization 6\n  ...",
    version,
    author
)]
struct Cli {
    /// Word list, one entry per line (e.g. an ispell *.dic file)
    #[arg(allow_hyphen_values = true)]
    file: PathBuf,

    /// Word whose characters are matched
    #[arg(allow_hyphen_values = true)]
    word: String,

    /// Number of top entries to print
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_TOP,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    top: usize,

    /// Print a scan summary to stderr
    #[arg(long)]
    stats: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Usage errors exit with 1; help and version still exit cleanly
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if !err.use_stderr() {
            err.exit();
        }
        let _ = err.print();
        process::exit(1);
    });

    init_tracing();

    let config = RankConfig::new(cli.file, cli.word).with_top(cli.top);
    let result = run_rank(&config)?;

    print_ranking(&result.ranking);
    if cli.stats {
        print_scan_summary(&result);
    }

    Ok(())
}
