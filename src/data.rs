//! Sample data generation.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use std::ops::RangeInclusive;

/// `n` values drawn uniformly from `range`, from an entropy-seeded generator.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn generate_data(n: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    generate_data_with(&mut rand::thread_rng(), n, range)
}

/// Same as [generate_data] with a caller-supplied generator.
pub fn generate_data_with<R>(rng: &mut R, n: usize, range: RangeInclusive<i32>) -> Vec<i32>
where
    R: Rng + ?Sized,
{
    let dist = Uniform::new_inclusive(*range.start(), *range.end());
    dist.sample_iter(rng).take(n).collect()
}
