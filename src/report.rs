//! Trial results and the plain-text report.

use crate::policy::ExecutionPolicy;
use std::fmt;
use std::io::{self, Write};

/// What a trial measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configuration {
    Policy(ExecutionPolicy),
    /// Partitioned replace on K fresh threads.
    Threads(usize),
    /// Partitioned replace on a reused K-thread pool.
    PooledThreads(usize),
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Configuration::Policy(policy) => write!(f, "{}", policy),
            Configuration::Threads(k) => write!(f, "K={}", k),
            Configuration::PooledThreads(k) => write!(f, "pooled K={}", k),
        }
    }
}

/// One timed execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    pub configuration: Configuration,
    pub elapsed_ms: u64,
}

/// Fastest K of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestK {
    pub k: usize,
    pub elapsed_ms: u64,
    /// `k / hardware_threads`.
    pub ratio: f64,
}

impl BestK {
    pub fn from_table(table: &[(usize, u64)], hardware_threads: usize) -> Option<Self> {
        best_k(table).map(|(k, elapsed_ms)| Self {
            k,
            elapsed_ms,
            ratio: k as f64 / hardware_threads.max(1) as f64,
        })
    }
}

/// Everything measured for one input size.
#[derive(Debug, Clone, PartialEq)]
pub struct TierReport {
    pub size: usize,
    pub policies: Vec<TrialResult>,
    pub sweep: Vec<TrialResult>,
    pub best: Option<BestK>,
    /// Empty unless the pooled sweep is enabled.
    pub pooled_sweep: Vec<TrialResult>,
    pub pooled_best: Option<BestK>,
}

/// The `(K, elapsed)` row with the strictly smallest time; ties keep the earlier row.
pub fn best_k(table: &[(usize, u64)]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for &(k, elapsed) in table {
        match best {
            Some((_, best_elapsed)) if elapsed >= best_elapsed => {}
            _ => best = Some((k, elapsed)),
        }
    }
    best
}

/// Writes the report lines to any [Write] sink.
pub struct ReportWriter<W> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn hardware_threads(&mut self, threads: usize) -> io::Result<()> {
        write!(self.out, "Hardware threads: {}\n\n", threads)
    }

    pub fn tier(&mut self, size: usize) -> io::Result<()> {
        writeln!(self.out, "---- N = {} ----", size)
    }

    pub fn policy(&mut self, policy: ExecutionPolicy, elapsed_ms: u64) -> io::Result<()> {
        writeln!(self.out, "{}: {} ms", policy.name(), elapsed_ms)
    }

    pub fn sweep_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}:", title)?;
        writeln!(self.out, "{:>8}{:>12}", "K", "       time (ms)")?;
        writeln!(self.out, "------------------")
    }

    pub fn sweep_row(&mut self, k: usize, elapsed_ms: u64) -> io::Result<()> {
        writeln!(self.out, "{:>8}{:>12}", k, elapsed_ms)
    }

    pub fn best(&mut self, best: &BestK) -> io::Result<()> {
        write!(
            self.out,
            "\nBest K = {} (~ {:.2}x CPU threads)\n\n",
            best.k, best.ratio
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut ReportWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_best_k_strict_minimum_first_wins() {
        assert_eq!(best_k(&[]), None);
        assert_eq!(best_k(&[(1, 9)]), Some((1, 9)));
        assert_eq!(best_k(&[(1, 9), (2, 5), (3, 7)]), Some((2, 5)));
        assert_eq!(best_k(&[(1, 5), (2, 3), (3, 3), (4, 4)]), Some((2, 3)));
        assert_eq!(best_k(&[(1, 0), (2, 0)]), Some((1, 0)));
    }

    #[test]
    fn test_best_k_ratio() {
        let best = BestK::from_table(&[(1, 10), (2, 8), (6, 2)], 4).unwrap();
        assert_eq!(best.k, 6);
        assert_eq!(best.elapsed_ms, 2);
        assert!((best.ratio - 1.5).abs() < f64::EPSILON);
        assert!(BestK::from_table(&[], 4).is_none());
    }

    #[test]
    fn test_header_and_policy_lines() {
        assert_eq!(render(|w| w.hardware_threads(8)), "Hardware threads: 8\n\n");
        assert_eq!(render(|w| w.tier(100_000)), "---- N = 100000 ----\n");
        assert_eq!(
            render(|w| w.policy(ExecutionPolicy::NoPolicy, 3)),
            "No policy: 3 ms\n"
        );
        assert_eq!(
            render(|w| w.policy(ExecutionPolicy::ParUnseq, 0)),
            "par_unseq: 0 ms\n"
        );
    }

    #[test]
    fn test_sweep_table_shape() {
        let text = render(|w| {
            w.sweep_header("Custom parallel replace_if (K threads)")?;
            w.sweep_row(1, 12)?;
            w.sweep_row(16, 3)
        });
        assert_eq!(
            text,
            "\nCustom parallel replace_if (K threads):\n       K       time (ms)\n------------------\n       1          12\n      16           3\n"
        );
    }

    #[test]
    fn test_best_line_two_decimals() {
        let best = BestK {
            k: 5,
            elapsed_ms: 1,
            ratio: 5.0 / 12.0,
        };
        assert_eq!(
            render(|w| w.best(&best)),
            "\nBest K = 5 (~ 0.42x CPU threads)\n\n"
        );
    }

    #[test]
    fn test_configuration_display() {
        assert_eq!(Configuration::Policy(ExecutionPolicy::Par).to_string(), "par");
        assert_eq!(Configuration::Threads(3).to_string(), "K=3");
        assert_eq!(Configuration::PooledThreads(2).to_string(), "pooled K=2");
    }
}
