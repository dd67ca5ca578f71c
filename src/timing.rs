//! Wall-clock timing on the monotonic clock.

use std::time::{Duration, Instant};

/// Runs `work` once and returns how long it took.
pub fn measure<F>(work: F) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();
    work();
    start.elapsed()
}

/// Runs `work` once and returns the elapsed time in whole milliseconds.
pub fn measure_ms<F>(work: F) -> u64
where
    F: FnOnce(),
{
    duration_ms(measure(work))
}

/// Times fallible work. The error is returned as-is, without a timing.
pub fn measure_result<T, E, F>(work: F) -> Result<(T, u64), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let value = work()?;
    Ok((value, duration_ms(start.elapsed())))
}

fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
