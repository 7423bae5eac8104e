//! Word Tree - CLI
//!
//! Case-insensitive word dictionary backed by a red-black tree, with TUI and CLI modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordtree::{
    commands::{
        BenchmarkConfig, Dictionary, TreeStats, insert_words, lookup_words, run_benchmark,
        run_simple, seed_dictionary,
    },
    logging::{self, LogTarget},
    output::{
        print_benchmark_result, print_insert_reports, print_load_warning, print_lookup_results,
        print_seed_result, print_stats, print_word_list,
    },
    wordlists::{SAMPLE, WordStore},
};

#[derive(Parser)]
#[command(
    name = "wordtree",
    about = "Case-insensitive word dictionary backed by a red-black tree",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (created on first insert)
    #[arg(short, long, global = true, default_value = "Dictionary.txt")]
    dictionary: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text menu without TUI)
    Simple,

    /// Insert words and append new ones to the word list
    Insert {
        /// Words to insert
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Look up words (case-insensitive)
    Search {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show tree size, height, black height and invariant status
    Stats,

    /// List words in sorted order
    List {
        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Add the built-in sample words to the word list
    Seed,

    /// Benchmark tree building on random keys
    Benchmark {
        /// Keys inserted per tree
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,

        /// Number of independent trees
        #[arg(short, long, default_value = "8")]
        trials: usize,

        /// Letters per random key
        #[arg(short, long, default_value = "6")]
        length: usize,

        /// Insert keys in ascending order (worst case for an unbalanced tree)
        #[arg(long)]
        sorted: bool,

        /// Base random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

impl Commands {
    /// Play draws on the alternate screen, so stderr output would corrupt it
    const fn log_target(&self) -> LogTarget {
        match self {
            Self::Play => LogTarget::Disabled,
            _ => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logging::init(command.log_target());
    let store = WordStore::new(cli.dictionary);

    match command {
        Commands::Play => run_play_command(Dictionary::open(store)),
        Commands::Simple => run_simple(&mut Dictionary::open(store)),
        Commands::Insert { words } => {
            let mut dictionary = open_dictionary(store);
            let reports = insert_words(&mut dictionary, words.as_slice());
            print_insert_reports(&reports);
            Ok(())
        }
        Commands::Search { words } => {
            let dictionary = open_dictionary(store);
            let results = lookup_words(&dictionary, words.as_slice());
            print_lookup_results(&results);
            Ok(())
        }
        Commands::Stats => {
            let dictionary = open_dictionary(store);
            let stats = TreeStats::collect(dictionary.words());
            print_stats(&stats, dictionary.store().path());
            if let Some(violation) = stats.violation {
                bail!("tree invariant violated: {violation}");
            }
            Ok(())
        }
        Commands::List { limit } => {
            let dictionary = open_dictionary(store);
            print_word_list(dictionary.words(), limit);
            Ok(())
        }
        Commands::Seed => {
            let mut dictionary = open_dictionary(store);
            let result = seed_dictionary(&mut dictionary, SAMPLE);
            print_seed_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            trials,
            length,
            sorted,
            seed,
        } => run_benchmark_command(count, trials, length, sorted, seed),
    }
}

/// Load the word list, warning on stderr if it was unavailable
fn open_dictionary(store: WordStore) -> Dictionary {
    let dictionary = Dictionary::open(store);
    print_load_warning(&dictionary);
    dictionary
}

fn run_benchmark_command(
    count: usize,
    trials: usize,
    length: usize,
    sorted: bool,
    seed: u64,
) -> Result<()> {
    if length == 0 && !sorted {
        bail!("--length must be at least 1");
    }

    let config = BenchmarkConfig {
        count,
        trials,
        key_length: length,
        sorted,
        seed,
        show_progress: true,
    };

    let order = if sorted { "ascending" } else { "random" };
    println!("Building {trials} trees of {count} {order} keys...");

    let result = run_benchmark(&config);
    print_benchmark_result(&result, &config);

    if !result.all_valid {
        bail!("a benchmark tree violated the red-black invariants");
    }
    Ok(())
}

fn run_play_command(dictionary: Dictionary) -> Result<()> {
    use wordtree::interactive::{App, run_tui};

    let app = App::new(dictionary);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Commands {
        Cli::parse_from(args.iter().copied()).command.unwrap_or(Commands::Play)
    }

    #[test]
    fn tui_mode_disables_stderr_logging() {
        assert_eq!(command(&["wordtree"]).log_target(), LogTarget::Disabled);
        assert_eq!(command(&["wordtree", "play"]).log_target(), LogTarget::Disabled);
    }

    #[test]
    fn cli_modes_log_to_stderr() {
        for args in [
            &["wordtree", "simple"][..],
            &["wordtree", "stats"][..],
            &["wordtree", "insert", "pear"][..],
            &["wordtree", "-d", "words.txt", "search", "fig"][..],
        ] {
            assert_eq!(command(args).log_target(), LogTarget::Stderr);
        }
    }
}
