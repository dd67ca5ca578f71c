//! Benchmark options. Set in code; the binary runs with [BenchOptions::default].

use crate::error::BenchError;
use std::ops::RangeInclusive;

/// Tier sizes used when nothing else is configured.
pub const DEFAULT_SIZES: [usize; 3] = [100_000, 1_000_000, 10_000_000];

/// Fallback when the hardware thread count cannot be determined.
pub const FALLBACK_HARDWARE_THREADS: usize = 4;

/// Selects elements that are multiples of the wrapped divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisibleBy(pub i32);

impl DivisibleBy {
    #[inline]
    pub fn matches(&self, x: &i32) -> bool {
        // wrapping_rem keeps i32::MIN % -1 from overflowing
        x.wrapping_rem(self.0) == 0
    }
}

/// What to benchmark and with which data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchOptions {
    /// One tier per entry; each tier gets its own base dataset.
    pub sizes: Vec<usize>,
    /// Inclusive range the generated values are drawn from.
    pub value_range: RangeInclusive<i32>,
    /// Elements divisible by this are replaced. Must be non-zero.
    pub divisor: i32,
    pub replacement: i32,
    /// The K sweep runs `1..=thread_factor * hardware_threads`.
    pub thread_factor: usize,
    /// Overrides detection when set.
    pub hardware_threads: Option<usize>,
    /// Also sweep K over reused rayon pools.
    pub pooled_sweep: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            value_range: 0..=1000,
            divisor: 12,
            replacement: 4,
            thread_factor: 2,
            hardware_threads: None,
            pooled_sweep: false,
        }
    }
}

impl BenchOptions {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidOptions("no tier sizes given".into()));
        }
        if self.value_range.is_empty() {
            return Err(BenchError::InvalidOptions(format!(
                "empty value range {}..={}",
                self.value_range.start(),
                self.value_range.end()
            )));
        }
        if self.divisor == 0 {
            return Err(BenchError::InvalidOptions("divisor must be non-zero".into()));
        }
        if self.thread_factor == 0 {
            return Err(BenchError::InvalidOptions("thread factor must be at least 1".into()));
        }
        if self.hardware_threads == Some(0) {
            return Err(BenchError::InvalidOptions(
                "hardware thread override must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn predicate(&self) -> DivisibleBy {
        DivisibleBy(self.divisor)
    }

    /// Highest K in the sweep for the given hardware thread count.
    pub fn max_k(&self, hardware_threads: usize) -> usize {
        self.thread_factor * hardware_threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = BenchOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.sizes, vec![100_000, 1_000_000, 10_000_000]);
        assert_eq!(options.max_k(8), 16);
    }

    #[test]
    fn test_predicate_divisible() {
        let options = BenchOptions {
            divisor: 7,
            ..BenchOptions::default()
        };
        let pred = options.predicate();
        assert_eq!(pred, DivisibleBy(7));
        assert!(pred.matches(&14));
        assert!(pred.matches(&0));
        assert!(pred.matches(&-7));
        assert!(!pred.matches(&13));
        assert!(DivisibleBy(-1).matches(&i32::MIN));
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let cases = [
            BenchOptions {
                sizes: vec![],
                ..BenchOptions::default()
            },
            BenchOptions {
                value_range: 10..=0,
                ..BenchOptions::default()
            },
            BenchOptions {
                divisor: 0,
                ..BenchOptions::default()
            },
            BenchOptions {
                thread_factor: 0,
                ..BenchOptions::default()
            },
            BenchOptions {
                hardware_threads: Some(0),
                ..BenchOptions::default()
            },
        ];
        for options in cases {
            assert!(
                matches!(options.validate(), Err(BenchError::InvalidOptions(_))),
                "{:?}",
                options
            );
        }
    }
}
