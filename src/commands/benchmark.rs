//! Benchmark command
//!
//! Builds many trees from random (or ascending) keys and checks how their height compares
//! with the red-black bound.

use super::stats::height_bound;
use crate::core::OrderedStringSet;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Keys generated per tree
    pub count: usize,
    /// Independent trees to build
    pub trials: usize,
    /// Letters per random key
    pub key_length: usize,
    /// Insert keys in ascending order instead of at random
    pub sorted: bool,
    /// Base seed; trial `i` uses `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            trials: 8,
            key_length: 6,
            sorted: false,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Shape of one benchmark tree
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub size: usize,
    pub duplicates: usize,
    pub height: usize,
    pub black_height: usize,
    /// Invariants hold and the size matches the number of distinct keys
    pub valid: bool,
    pub insert_time: Duration,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub trials: Vec<TrialResult>,
    pub keys_per_trial: usize,
    pub min_height: usize,
    pub max_height: usize,
    pub average_height: f64,
    /// Bound for the largest tree built
    pub height_bound: f64,
    pub total_duplicates: usize,
    pub all_valid: bool,
    pub duration: Duration,
    pub inserts_per_second: f64,
}

impl BenchmarkConfig {
    /// Inserts across all trials, saturating on overflow
    #[must_use]
    pub const fn total_inserts(&self) -> usize {
        self.count.saturating_mul(self.trials)
    }
}

/// Run the benchmark, building trials in parallel
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.trials as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} trees ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let trials: Vec<TrialResult> = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let result = run_trial(config, trial);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let min_height = trials.iter().map(|t| t.height).min().unwrap_or(0);
    let max_height = trials.iter().map(|t| t.height).max().unwrap_or(0);
    let average_height = if trials.is_empty() {
        0.0
    } else {
        trials.iter().map(|t| t.height).sum::<usize>() as f64 / trials.len() as f64
    };
    let largest = trials.iter().map(|t| t.size).max().unwrap_or(0);
    let total_inserts = config.total_inserts() as f64;

    BenchmarkResult {
        keys_per_trial: config.count,
        min_height,
        max_height,
        average_height,
        height_bound: height_bound(largest),
        total_duplicates: trials.iter().map(|t| t.duplicates).sum(),
        all_valid: trials.iter().all(|t| t.valid),
        duration,
        inserts_per_second: total_inserts / duration.as_secs_f64().max(f64::EPSILON),
        trials,
    }
}

fn run_trial(config: &BenchmarkConfig, trial: usize) -> TrialResult {
    let keys = trial_keys(config, trial);
    let distinct: FxHashSet<String> = keys.iter().map(|key| key.to_lowercase()).collect();

    let start = Instant::now();
    let mut set = OrderedStringSet::new();
    let mut duplicates = 0;
    for key in keys {
        if !set.insert(key).is_inserted() {
            duplicates += 1;
        }
    }
    let insert_time = start.elapsed();

    TrialResult {
        size: set.len(),
        duplicates,
        height: set.height(),
        black_height: set.black_height(),
        valid: set.check_invariants().is_ok() && set.len() == distinct.len(),
        insert_time,
    }
}

fn trial_keys(config: &BenchmarkConfig, trial: usize) -> Vec<String> {
    if config.sorted {
        let width = config.count.to_string().len();
        return (0..config.count).map(|i| format!("w{i:0width$}")).collect();
    }

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(trial as u64));
    (0..config.count)
        .map(|_| {
            (0..config.key_length)
                .map(|_| {
                    let letter = char::from(rng.random_range(b'a'..=b'z'));
                    // Mixed case exercises case-insensitive duplicate detection
                    if rng.random_bool(0.5) {
                        letter.to_ascii_uppercase()
                    } else {
                        letter
                    }
                })
                .collect()
        })
        .collect()
}
