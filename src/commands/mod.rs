//! Command implementations

pub mod benchmark;
pub mod dictionary;
pub mod insert;
pub mod lookup;
pub mod seed;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use dictionary::{AddOutcome, Dictionary};
pub use insert::{InsertReport, insert_words};
pub use lookup::{LookupResult, lookup_words};
pub use seed::{SeedResult, seed_dictionary};
pub use simple::run_simple;
pub use stats::TreeStats;
