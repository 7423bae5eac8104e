//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_insert_reports, print_load_warning, print_lookup_results,
    print_seed_result, print_stats, print_word_list,
};
