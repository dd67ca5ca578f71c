//! Fixed-size rayon thread pools, built once per thread count and reused.

use parking_lot::Mutex;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// Thread pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    num_threads: usize,
    stack_size: usize,
    thread_name: Option<String>,
}

impl PoolConfig {
    /// Pool with exactly `num_threads` workers (at least one), one per partition.
    pub fn for_partitions(num_threads: usize) -> Self {
        Self {
            num_threads: num_threads.max(1),
            stack_size: 2 * 1024 * 1024, // 2MB
            thread_name: Some(format!("replace-k{}", num_threads)),
        }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Build the thread pool.
    pub fn build(self) -> Result<ThreadPool, ThreadPoolBuildError> {
        let mut builder = ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .stack_size(self.stack_size);

        if let Some(name) = self.thread_name {
            builder = builder.thread_name(move |i| format!("{}-{}", name, i));
        }

        builder.build()
    }
}

/// Pools keyed by thread count. A pool is built on first request and kept
/// until the cache is dropped.
#[derive(Default)]
pub struct PoolCache {
    pools: Mutex<HashMap<usize, Arc<ThreadPool>>>,
}

impl PoolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool with `num_threads` workers, building it if needed.
    pub fn get_or_build(&self, num_threads: usize) -> Result<Arc<ThreadPool>, ThreadPoolBuildError> {
        let num_threads = num_threads.max(1);
        let mut pools = self.pools.lock();
        if let Some(pool) = pools.get(&num_threads) {
            return Ok(Arc::clone(pool));
        }
        let pool = Arc::new(PoolConfig::for_partitions(num_threads).build()?);
        pools.insert(num_threads, Arc::clone(&pool));
        Ok(pool)
    }

    /// Number of pools built so far.
    pub fn len(&self) -> usize {
        self.pools.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.lock().is_empty()
    }
}
