//! Execution policies for the whole-slice replacement.

use replace_par::chunk::ChunkSizeOptimizer;
use replace_par::par::ParallelReplace;
use replace_par::replace_if;
use std::fmt;

/// How a whole-slice `replace_if` is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionPolicy {
    /// Plain sequential loop; the baseline.
    NoPolicy,
    /// Explicitly sequential.
    Seq,
    /// Element-wise parallel over the rayon global pool.
    Par,
    /// Parallel over large chunks, each a tight loop the compiler can vectorize.
    ParUnseq,
}

impl ExecutionPolicy {
    /// Every policy, in report order.
    pub const ALL: [ExecutionPolicy; 4] = [
        ExecutionPolicy::NoPolicy,
        ExecutionPolicy::Seq,
        ExecutionPolicy::Par,
        ExecutionPolicy::ParUnseq,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExecutionPolicy::NoPolicy => "No policy",
            ExecutionPolicy::Seq => "seq",
            ExecutionPolicy::Par => "par",
            ExecutionPolicy::ParUnseq => "par_unseq",
        }
    }

    /// Replaces every element of `data` matching `predicate` with `new_value`.
    pub fn replace_if<T, F>(self, data: &mut [T], predicate: F, new_value: T)
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Sync + Send,
    {
        match self {
            ExecutionPolicy::NoPolicy => replace_if(data, predicate, new_value),
            ExecutionPolicy::Seq => data
                .iter_mut()
                .filter(|item| predicate(item))
                .for_each(|item| *item = new_value.clone()),
            ExecutionPolicy::Par => data.par_replace_if(predicate, new_value),
            ExecutionPolicy::ParUnseq => {
                let chunk =
                    ChunkSizeOptimizer::vectorized::<T>(data.len(), rayon::current_num_threads());
                data.par_chunked_replace_if(chunk, predicate, new_value);
            }
        }
    }
}

impl fmt::Display for ExecutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
