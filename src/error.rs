//! Error type shared by the benchmark harness.

use crate::report::Configuration;
use std::io;

/// Everything that can end a benchmark run early.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("failed to spawn worker thread for partition {partition}: {source}")]
    ThreadSpawn {
        partition: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker thread for partition {partition} panicked")]
    WorkerPanicked { partition: usize },

    #[error("failed to build a {threads}-thread pool: {source}")]
    PoolBuild {
        threads: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },

    #[error("{0} produced a different result than the sequential pass")]
    ResultMismatch(Configuration),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
