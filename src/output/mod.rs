//! Terminal output formatting
//!
//! The ranking itself on stdout, optional scan diagnostics on stderr.

pub mod display;
pub mod formatters;

pub use display::{print_ranking, print_scan_summary};
