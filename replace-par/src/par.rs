//! Parallel replacement over mutable slices using [Rayon].
//!
//! [Rayon]: https://docs.rs/rayon

use rayon::prelude::*;

/// Parallel `replace_if` for slices.
pub trait ParallelReplace<T> {
    /// Element-wise parallel pass; rayon decides the splitting.
    fn par_replace_if<F>(&mut self, predicate: F, new_value: T)
    where
        F: Fn(&T) -> bool + Sync + Send;

    /// Splits into `chunk_size` chunks processed in parallel, each with a tight
    /// sequential loop the compiler can vectorize. A `chunk_size` of 0 is treated as 1.
    fn par_chunked_replace_if<F>(&mut self, chunk_size: usize, predicate: F, new_value: T)
    where
        F: Fn(&T) -> bool + Sync + Send;
}

impl<T> ParallelReplace<T> for [T]
where
    T: Clone + Send + Sync,
{
    fn par_replace_if<F>(&mut self, predicate: F, new_value: T)
    where
        F: Fn(&T) -> bool + Sync + Send,
    {
        self.par_iter_mut().for_each(|item| {
            if predicate(item) {
                *item = new_value.clone();
            }
        });
    }

    fn par_chunked_replace_if<F>(&mut self, chunk_size: usize, predicate: F, new_value: T)
    where
        F: Fn(&T) -> bool + Sync + Send,
    {
        self.par_chunks_mut(chunk_size.max(1))
            .for_each(|chunk| crate::replace_if(chunk, &predicate, new_value.clone()));
    }
}
