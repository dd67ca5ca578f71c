//! Thread-partitioned `replace_if`.
//!
//! The slice is cut into K contiguous, disjoint partitions with
//! [partition_ranges]. [partitioned_replace_if] hands each partition to its own
//! freshly spawned OS thread and joins them all before returning.
//! [pooled_partitioned_replace_if] does the same on a prebuilt rayon pool, so
//! thread creation stays out of the measurement.

use crate::error::BenchError;
use rayon::ThreadPool;
use replace_par::replace_if;
use std::ops::Range;
use std::thread;

/// Splits `0..n` into `k` contiguous half-open ranges of `n / k` elements,
/// with the last range absorbing the remainder. `k == 0` is treated as 1.
///
/// When `n < k` the leading ranges are empty and the last one covers everything.
pub fn partition_ranges(n: usize, k: usize) -> Vec<Range<usize>> {
    let k = k.max(1);
    let chunk = n / k;
    (0..k)
        .map(|i| {
            let start = i * chunk;
            let end = if i == k - 1 { n } else { start + chunk };
            start..end
        })
        .collect()
}

/// Borrows `data` as `k` disjoint mutable sub-slices laid out by [partition_ranges].
fn split_partitions<T>(data: &mut [T], k: usize) -> Vec<&mut [T]> {
    let mut parts = Vec::with_capacity(k);
    let mut rest = data;
    for range in partition_ranges(rest.len(), k) {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        parts.push(head);
        rest = tail;
    }
    parts
}

/// Replaces every element matching `predicate` with `new_value` using `k` threads.
///
/// With `k <= 1`, or fewer than `k` elements, this is a plain single-threaded
/// pass and no thread is spawned. Otherwise one scoped thread per partition is
/// spawned and all of them are joined before returning, whatever happens.
///
/// # Errors
///
/// [BenchError::ThreadSpawn] if the OS refuses a thread,
/// [BenchError::WorkerPanicked] if a worker panics (the first such partition
/// is reported). The contents of `data` are unspecified after an error.
pub fn partitioned_replace_if<T, F>(
    data: &mut [T],
    k: usize,
    predicate: F,
    new_value: T,
) -> Result<(), BenchError>
where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Sync,
{
    if k <= 1 || data.len() < k {
        replace_if(data, predicate, new_value);
        return Ok(());
    }

    let predicate = &predicate;
    let parts = split_partitions(data, k);
    thread::scope(|scope| -> Result<(), BenchError> {
        let mut handles = Vec::with_capacity(k);
        for (partition, part) in parts.into_iter().enumerate() {
            let new_value = new_value.clone();
            let handle = thread::Builder::new()
                .spawn_scoped(scope, move || replace_if(part, predicate, new_value))
                .map_err(|source| BenchError::ThreadSpawn { partition, source })?;
            handles.push((partition, handle));
        }

        let mut outcome = Ok(());
        for (partition, handle) in handles {
            if handle.join().is_err() && outcome.is_ok() {
                outcome = Err(BenchError::WorkerPanicked { partition });
            }
        }
        outcome
    })
}

/// [partitioned_replace_if] on an existing pool: the same `k` partitions run as
/// scoped tasks on `pool` instead of on new threads. Same single-threaded
/// fallback for `k <= 1` or fewer than `k` elements.
///
/// A panicking task is propagated by rayon to the caller.
pub fn pooled_partitioned_replace_if<T, F>(
    pool: &ThreadPool,
    data: &mut [T],
    k: usize,
    predicate: F,
    new_value: T,
) where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Sync,
{
    if k <= 1 || data.len() < k {
        replace_if(data, predicate, new_value);
        return;
    }

    let predicate = &predicate;
    let parts = split_partitions(data, k);
    pool.scope(|scope| {
        for part in parts {
            let new_value = new_value.clone();
            scope.spawn(move |_| replace_if(part, predicate, new_value));
        }
    });
}
