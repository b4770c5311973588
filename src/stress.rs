/*!
 * Concurrent Stress Runner
 *
 * Hammers one shared collection from many threads and verifies that no
 * element was lost or duplicated.
 */

use crate::core::{CollectionError, CollectionResult};
use crate::monitoring::PhaseSpan;
use crate::{ConcurrentList, ConcurrentQueue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub const THREADS_ENV: &str = "COLLECTIONS_STRESS_THREADS";
pub const OPS_ENV: &str = "COLLECTIONS_STRESS_OPS";

/// Stress run parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressConfig {
    /// Concurrent writer threads
    pub threads: usize,
    /// Inserts performed by each thread
    pub ops_per_thread: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            threads: 8,
            ops_per_thread: 10_000,
        }
    }
}

impl StressConfig {
    pub const fn new(threads: usize, ops_per_thread: usize) -> Self {
        Self {
            threads,
            ops_per_thread,
        }
    }

    /// Read overrides from the environment, falling back to defaults
    pub fn from_env() -> CollectionResult<Self> {
        Self::from_overrides(
            std::env::var(THREADS_ENV).ok().as_deref(),
            std::env::var(OPS_ENV).ok().as_deref(),
        )
    }

    /// Apply raw override values; `None` keeps the default
    pub fn from_overrides(
        threads: Option<&str>,
        ops_per_thread: Option<&str>,
    ) -> CollectionResult<Self> {
        let defaults = Self::default();
        let config = Self {
            threads: parse_positive(THREADS_ENV, threads, defaults.threads)?,
            ops_per_thread: parse_positive(OPS_ENV, ops_per_thread, defaults.ops_per_thread)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject runs whose total element count does not fit in `usize`
    pub fn validate(&self) -> CollectionResult<()> {
        match self.threads.checked_mul(self.ops_per_thread) {
            Some(_) => Ok(()),
            None => Err(CollectionError::InvalidArgument(format!(
                "{} threads x {} ops per thread overflows the element count",
                self.threads, self.ops_per_thread
            ))),
        }
    }

    /// Total number of elements a run inserts
    ///
    /// Saturates for configurations that fail [`StressConfig::validate`].
    pub const fn expected(&self) -> usize {
        self.threads.saturating_mul(self.ops_per_thread)
    }

    /// Value inserted by `thread` on its `op`-th call; unique across the run
    const fn value(&self, thread: usize, op: usize) -> u64 {
        (thread * self.ops_per_thread + op) as u64
    }
}

fn parse_positive(
    name: &'static str,
    raw: Option<&str>,
    default: usize,
) -> CollectionResult<usize> {
    match raw {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(CollectionError::InvalidArgument(format!(
                "{} must be a positive integer, got {:?}",
                name, raw
            ))),
        },
    }
}

/// Outcome of one stress run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressReport {
    pub collection: String,
    pub expected: usize,
    pub observed: usize,
    pub duplicates: usize,
    pub missing: usize,
    /// Items that came out ahead of an earlier item from the same producer
    pub order_violations: usize,
    pub duration: Duration,
}

impl StressReport {
    fn from_values(collection: &str, expected: usize, values: &[u64], duration: Duration) -> Self {
        let unique: HashSet<u64> = values.iter().copied().collect();

        Self {
            collection: collection.to_string(),
            expected,
            observed: values.len(),
            duplicates: values.len() - unique.len(),
            missing: (0..expected as u64).filter(|v| !unique.contains(v)).count(),
            order_violations: 0,
            duration,
        }
    }

    /// Every inserted element observed exactly once, in producer order
    pub fn is_consistent(&self) -> bool {
        self.observed == self.expected
            && self.duplicates == 0
            && self.missing == 0
            && self.order_violations == 0
    }

    fn log(&self) {
        if self.is_consistent() {
            info!(
                collection = %self.collection,
                expected = self.expected,
                duration_ms = self.duration.as_millis() as u64,
                "stress run consistent"
            );
        } else {
            warn!(
                collection = %self.collection,
                expected = self.expected,
                observed = self.observed,
                duplicates = self.duplicates,
                missing = self.missing,
                order_violations = self.order_violations,
                "stress run inconsistent"
            );
        }
    }
}

/// Concurrent `add` from `config.threads` threads, then verify the snapshot
///
/// Elements already in the list are left in place and excluded from the
/// check; only what this run appended is verified.
pub fn run_list_stress(
    list: &ConcurrentList<u64>,
    config: StressConfig,
) -> CollectionResult<StressReport> {
    config.validate()?;
    let baseline = list.len();
    let mut phase = PhaseSpan::new("list_add");
    let start = Instant::now();

    thread::scope(|scope| {
        for t in 0..config.threads {
            scope.spawn(move || {
                for op in 0..config.ops_per_thread {
                    list.add(config.value(t, op));
                }
            });
        }
    });

    let duration = start.elapsed();
    phase.add_items(config.expected() as u64);

    let values: Vec<u64> = list.iter().skip(baseline).flatten().collect();
    let report =
        StressReport::from_values(list.config().label, config.expected(), &values, duration);
    report.log();
    Ok(report)
}

/// Concurrent `enqueue` from `config.threads` threads, then drain and verify
///
/// Each producer's items must also come out in the order it enqueued them.
/// Items queued before the run come out first; they are drained and excluded
/// from the check.
pub fn run_queue_stress(
    queue: &ConcurrentQueue<u64>,
    config: StressConfig,
) -> CollectionResult<StressReport> {
    config.validate()?;
    let baseline = queue.len();
    let mut phase = PhaseSpan::new("queue_enqueue");
    let start = Instant::now();

    thread::scope(|scope| -> CollectionResult<()> {
        let handles: Vec<_> = (0..config.threads)
            .map(|t| {
                scope.spawn(move || -> CollectionResult<()> {
                    for op in 0..config.ops_per_thread {
                        queue.enqueue(config.value(t, op))?;
                    }
                    Ok(())
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(result) => result?,
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        Ok(())
    })?;

    let duration = start.elapsed();
    phase.add_items(config.expected() as u64);

    let mut values = Vec::with_capacity(config.expected());
    while let Some(value) = queue.try_dequeue() {
        values.push(value);
    }
    let values = values.split_off(baseline.min(values.len()));

    let mut report =
        StressReport::from_values(queue.config().label, config.expected(), &values, duration);

    // Values from one producer must come out increasing
    let mut last_seen: Vec<Option<u64>> = vec![None; config.threads];
    for &value in &values {
        let producer = value as usize / config.ops_per_thread.max(1);
        if let Some(slot) = last_seen.get_mut(producer) {
            if matches!(*slot, Some(prev) if prev >= value) {
                report.order_violations += 1;
            }
            *slot = Some(value);
        }
    }

    report.log();
    Ok(report)
}
