//! # replace-bench
//!
//! Measures conditional in-place replacement (`replace_if`) over large `i32`
//! sequences:
//!
//! - a sequential baseline and the [ExecutionPolicy] variants (`seq`, `par`, `par_unseq`),
//! - a hand-partitioned replace over K freshly spawned threads, swept from
//!   `K = 1` to `thread_factor * hardware_threads`,
//! - optionally the same partitioning on reused K-thread rayon pools,
//!
//! and reports the K with the lowest latency.
//!
//! ```no_run
//! use replace_bench::{BenchOptions, Benchmark};
//!
//! let bench = Benchmark::new(BenchOptions {
//!     sizes: vec![1_000_000],
//!     ..BenchOptions::default()
//! })?;
//! let tiers = bench.run(std::io::stdout().lock())?;
//! println!("best K: {:?}", tiers[0].best.map(|b| b.k));
//! # Ok::<(), replace_bench::BenchError>(())
//! ```

pub mod data;
pub mod driver;
pub mod error;
pub mod options;
pub mod partition;
pub mod policy;
pub mod report;
pub mod timing;

pub use data::{generate_data, generate_data_with};
pub use driver::{Benchmark, hardware_threads};
pub use error::BenchError;
pub use options::{BenchOptions, DivisibleBy};
pub use partition::{partition_ranges, partitioned_replace_if, pooled_partitioned_replace_if};
pub use policy::ExecutionPolicy;
pub use report::{BestK, Configuration, ReportWriter, TierReport, TrialResult, best_k};
pub use timing::{measure, measure_ms, measure_result};
