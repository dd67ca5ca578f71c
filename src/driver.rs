//! The benchmark loop: one base dataset per tier, every configuration timed
//! once on its own copy.

use crate::data::generate_data;
use crate::error::BenchError;
use crate::options::{BenchOptions, FALLBACK_HARDWARE_THREADS};
use crate::partition::{partitioned_replace_if, pooled_partitioned_replace_if};
use crate::policy::ExecutionPolicy;
use crate::report::{BestK, Configuration, ReportWriter, TierReport, TrialResult};
use crate::timing::{measure_ms, measure_result};
use log::{debug, info};
use replace_par::pool::PoolCache;
use replace_par::replace_if;
use std::hint::black_box;
use std::io::Write;

/// Hardware execution contexts reported by the OS, or
/// [FALLBACK_HARDWARE_THREADS] when that is unknown (zero).
pub fn hardware_threads() -> usize {
    or_fallback(num_cpus::get())
}

fn or_fallback(threads: usize) -> usize {
    if threads == 0 {
        FALLBACK_HARDWARE_THREADS
    } else {
        threads
    }
}

/// Runs the configured benchmark and writes the report.
pub struct Benchmark {
    options: BenchOptions,
    hardware_threads: usize,
    pools: PoolCache,
}

impl Benchmark {
    /// Validates `options` and resolves the hardware thread count.
    pub fn new(options: BenchOptions) -> Result<Self, BenchError> {
        options.validate()?;
        let hardware_threads = options.hardware_threads.unwrap_or_else(hardware_threads);
        Ok(Self {
            options,
            hardware_threads,
            pools: PoolCache::new(),
        })
    }

    pub fn options(&self) -> &BenchOptions {
        &self.options
    }

    pub fn hardware_threads(&self) -> usize {
        self.hardware_threads
    }

    /// Every tier in order: generate, measure, report.
    pub fn run<W: Write>(&self, out: W) -> Result<Vec<TierReport>, BenchError> {
        let mut report = ReportWriter::new(out);
        report.hardware_threads(self.hardware_threads)?;
        info!(
            "benchmarking {} tier(s), K up to {}",
            self.options.sizes.len(),
            self.options.max_k(self.hardware_threads)
        );

        let mut tiers = Vec::with_capacity(self.options.sizes.len());
        for &size in &self.options.sizes {
            let base = generate_data(size, self.options.value_range.clone());
            tiers.push(self.run_tier(&base, &mut report)?);
        }
        report.flush()?;
        Ok(tiers)
    }

    /// Measures every configuration against copies of `base`.
    pub fn run_tier<W: Write>(
        &self,
        base: &[i32],
        report: &mut ReportWriter<W>,
    ) -> Result<TierReport, BenchError> {
        let size = base.len();
        info!("tier N = {}", size);
        report.tier(size)?;

        let predicate = self.options.predicate();
        let predicate = move |x: &i32| predicate.matches(x);
        let replacement = self.options.replacement;

        let mut expected = base.to_vec();
        replace_if(&mut expected, predicate, replacement);

        let mut policies = Vec::with_capacity(ExecutionPolicy::ALL.len());
        for policy in ExecutionPolicy::ALL {
            let mut data = base.to_vec();
            let elapsed_ms = measure_ms(|| policy.replace_if(&mut data, predicate, replacement));
            let configuration = Configuration::Policy(policy);
            check(configuration, &data, &expected)?;
            report.policy(policy, elapsed_ms)?;
            policies.push(trial(configuration, elapsed_ms));
        }

        let max_k = self.options.max_k(self.hardware_threads);

        report.sweep_header("Custom parallel replace_if (K threads)")?;
        let mut sweep = Vec::with_capacity(max_k);
        for k in 1..=max_k {
            let mut data = base.to_vec();
            let ((), elapsed_ms) = measure_result(|| {
                partitioned_replace_if(&mut data, k, predicate, replacement)
            })?;
            let configuration = Configuration::Threads(k);
            check(configuration, &data, &expected)?;
            report.sweep_row(k, elapsed_ms)?;
            sweep.push(trial(configuration, elapsed_ms));
        }
        let best = BestK::from_table(&table(&sweep), self.hardware_threads);
        if let Some(best) = &best {
            report.best(best)?;
        }

        let mut pooled_sweep = Vec::new();
        if self.options.pooled_sweep {
            report.sweep_header("Pooled parallel replace_if (K-thread pools)")?;
            for k in 1..=max_k {
                let pool = self
                    .pools
                    .get_or_build(k)
                    .map_err(|source| BenchError::PoolBuild { threads: k, source })?;
                let mut data = base.to_vec();
                let elapsed_ms = measure_ms(|| {
                    pooled_partitioned_replace_if(&pool, &mut data, k, predicate, replacement)
                });
                let configuration = Configuration::PooledThreads(k);
                check(configuration, &data, &expected)?;
                report.sweep_row(k, elapsed_ms)?;
                pooled_sweep.push(trial(configuration, elapsed_ms));
            }
        }
        let pooled_best = BestK::from_table(&table(&pooled_sweep), self.hardware_threads);
        if let Some(best) = &pooled_best {
            report.best(best)?;
        }

        Ok(TierReport {
            size,
            policies,
            sweep,
            best,
            pooled_sweep,
            pooled_best,
        })
    }
}

fn trial(configuration: Configuration, elapsed_ms: u64) -> TrialResult {
    debug!("{}: {} ms", configuration, elapsed_ms);
    TrialResult {
        configuration,
        elapsed_ms,
    }
}

fn table(trials: &[TrialResult]) -> Vec<(usize, u64)> {
    trials
        .iter()
        .filter_map(|t| match t.configuration {
            Configuration::Threads(k) | Configuration::PooledThreads(k) => Some((k, t.elapsed_ms)),
            Configuration::Policy(_) => None,
        })
        .collect()
}

/// Outside the timed region: the trial's output must equal the reference pass.
fn check(configuration: Configuration, data: &[i32], expected: &[i32]) -> Result<(), BenchError> {
    if black_box(data) != expected {
        return Err(BenchError::ResultMismatch(configuration));
    }
    Ok(())
}
