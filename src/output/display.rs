//! Display functions for command results

use super::formatters::{color_label, height_bar};
use crate::commands::{
    AddOutcome, BenchmarkConfig, BenchmarkResult, Dictionary, InsertReport, LookupResult,
    SeedResult, TreeStats,
};
use crate::core::OrderedStringSet;
use colored::Colorize;
use std::path::Path;

/// Warn when the word list could not be loaded
pub fn print_load_warning(dictionary: &Dictionary) {
    if let Some(err) = dictionary.load_error() {
        eprintln!("{} {err}", "⚠ Starting with an empty dictionary:".yellow().bold());
    }
}

/// Print the outcome of each insert
pub fn print_insert_reports(reports: &[InsertReport]) {
    for report in reports {
        match &report.result {
            Ok(AddOutcome::Added) => {
                println!("{} {}", "✓ added".green().bold(), report.input.trim());
            }
            Ok(AddOutcome::AddedNotPersisted(err)) => {
                println!(
                    "{} {} ({err})",
                    "⚠ added, not saved".yellow().bold(),
                    report.input.trim()
                );
            }
            Ok(AddOutcome::AlreadyPresent) => {
                println!("{} {}", "• already present".bright_black(), report.input.trim());
            }
            Err(err) => {
                println!("{} {:?}: {err}", "❌ rejected".red().bold(), report.input);
            }
        }
    }
}

/// Print found / not found for each query
pub fn print_lookup_results(results: &[LookupResult]) {
    for result in results {
        match &result.found {
            Some(stored) if *stored == result.query => {
                println!("{} {}", "✓ found".green().bold(), result.query);
            }
            Some(stored) => {
                println!(
                    "{} {} (stored as {})",
                    "✓ found".green().bold(),
                    result.query,
                    stored.bright_white().bold()
                );
            }
            None => println!("{} {}", "✗ not found".red().bold(), result.query),
        }
    }
}

/// Print tree statistics
pub fn print_stats(stats: &TreeStats, path: &Path) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY TREE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 {}", path.display().to_string().bright_white());
    println!("   Tree size:        {}", stats.size.to_string().bright_yellow().bold());
    println!(
        "   Tree height:      [{}] {} / {:.2}",
        height_bar(stats.height, stats.height_bound, 20).green(),
        stats.height,
        stats.height_bound
    );
    println!("   Black height:     {}", stats.black_height);
    println!("   Root color:       {}", color_label(stats.root_color));

    match &stats.violation {
        None => println!("   Invariants:       {}", "OK".green().bold()),
        Some(violation) => println!("   Invariants:       {}", violation.to_string().red().bold()),
    }
}

/// Print the first `limit` words in order (all when `None`)
pub fn print_word_list(words: &OrderedStringSet, limit: Option<usize>) {
    let shown = limit.unwrap_or(words.len()).min(words.len());

    for (i, word) in words.iter().take(shown).enumerate() {
        println!("{:>6}  {word}", (i + 1).to_string().bright_black());
    }

    if shown < words.len() {
        println!(
            "{}",
            format!("… {} more of {} words", words.len() - shown, words.len()).bright_black()
        );
    }
}

/// Print seeding counts
pub fn print_seed_result(result: &SeedResult) {
    println!(
        "{} {} added, {} already present",
        "🌱 Seeded:".bright_cyan().bold(),
        result.added.to_string().green().bold(),
        result.duplicates
    );
    if result.not_persisted > 0 {
        println!(
            "{} {} words could not be written to the word list",
            "⚠".yellow(),
            result.not_persisted
        );
    }
    if result.invalid > 0 {
        println!("{} {} invalid entries skipped", "⚠".yellow(), result.invalid);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, config: &BenchmarkConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let order = if config.sorted { "ascending" } else { "random" };

    println!("\n📊 {}", "Workload:".bright_cyan().bold());
    println!("   Trees built:      {}", result.trials.len());
    println!("   Keys per tree:    {} ({order})", result.keys_per_trial);
    println!("   Duplicates:       {}", result.total_duplicates);

    println!("\n🌳 {}", "Shape:".bright_cyan().bold());
    println!(
        "   Average height:   {}",
        format!("{:.2}", result.average_height).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_height.to_string().green());
    println!("   Worst case:       {}", result.max_height.to_string().yellow());
    println!(
        "   Height bound:     [{}] {:.2}",
        height_bar(result.max_height, result.height_bound, 20).green(),
        result.height_bound
    );
    if let Some(first) = result.trials.first() {
        println!("   Black height:     {}", first.black_height);
    }
    println!(
        "   Invariants:       {}",
        if result.all_valid {
            "OK".green().bold()
        } else {
            "VIOLATED".red().bold()
        }
    );

    println!("\n⏱  {}", "Performance:".bright_cyan().bold());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Inserts/second:   {:.0}", result.inserts_per_second);
}
