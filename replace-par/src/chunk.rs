//! Chunk sizing for the chunked parallel pass.

/// Chunk-size heuristics for work-stealing over cheap per-item work.
pub struct ChunkSizeOptimizer;

impl ChunkSizeOptimizer {
    /// Cheap per-item work. Larger chunks to reduce overhead (~2 chunks per thread, at least 100).
    pub fn cheap(collection_size: usize, num_threads: usize) -> usize {
        let target_chunks = num_threads.max(1) * 2;
        (collection_size / target_chunks).max(100)
    }

    /// L2 (~256KB per core).
    pub fn l2_cache_friendly<T>() -> usize {
        const L2: usize = 256 * 1024;
        let item_size = std::mem::size_of::<T>().max(1);
        (L2 / item_size).max(1)
    }

    /// Chunk size for a vectorizable inner loop: [cheap](Self::cheap), capped so a chunk fits in L2.
    pub fn vectorized<T>(collection_size: usize, num_threads: usize) -> usize {
        Self::cheap(collection_size, num_threads).min(Self::l2_cache_friendly::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cheap_has_floor() {
        assert_eq!(ChunkSizeOptimizer::cheap(10, 8), 100);
        assert_eq!(ChunkSizeOptimizer::cheap(0, 0), 100);
        assert_eq!(ChunkSizeOptimizer::cheap(1_000_000, 4), 125_000);
    }

    #[test]
    fn test_vectorized_capped_by_l2() {
        let l2 = ChunkSizeOptimizer::l2_cache_friendly::<i32>();
        assert_eq!(l2, 65_536);
        assert_eq!(ChunkSizeOptimizer::vectorized::<i32>(10_000_000, 4), l2);
        assert_eq!(ChunkSizeOptimizer::vectorized::<i32>(1_000, 4), 125);
    }
}
