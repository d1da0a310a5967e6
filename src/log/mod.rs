//! Extraction of reported hit rates from the simulator results log.

pub mod parse;

pub use parse::{extract_hit_rates, parse_results_file};
