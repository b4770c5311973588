/*!
 * Collections Stress Driver
 *
 * Runs the concurrent insert workload against a shared list and a shared
 * queue and exits non-zero if either lost or duplicated elements.
 *
 * Environment variables:
 * - COLLECTIONS_STRESS_THREADS: writer threads (default: 8)
 * - COLLECTIONS_STRESS_OPS: inserts per thread (default: 10000)
 * - COLLECTIONS_TRACE_JSON: JSON log output
 */

use miette::miette;
use tracing::{error, info};

use concurrent_collections::{
    init_tracing, run_list_stress, run_queue_stress, CollectionConfig, ConcurrentList,
    ConcurrentQueue, StressConfig,
};

fn main() -> miette::Result<()> {
    init_tracing();

    let config = StressConfig::from_env()?;
    info!(
        threads = config.threads,
        ops_per_thread = config.ops_per_thread,
        "Starting stress run"
    );

    let list = ConcurrentList::with_config(
        CollectionConfig::default()
            .with_capacity(config.expected())
            .with_label("stress_list"),
    );
    let list_report = run_list_stress(&list, config)?;

    let queue = ConcurrentQueue::with_config(
        CollectionConfig::default()
            .with_capacity(config.expected())
            .with_label("stress_queue"),
    );
    let queue_report = run_queue_stress(&queue, config)?;

    let failed: Vec<&str> = [&list_report, &queue_report]
        .into_iter()
        .filter(|report| !report.is_consistent())
        .map(|report| report.collection.as_str())
        .collect();

    if failed.is_empty() {
        info!(
            list_ms = list_report.duration.as_millis() as u64,
            queue_ms = queue_report.duration.as_millis() as u64,
            "All stress runs consistent"
        );
        Ok(())
    } else {
        error!(failed = ?failed, "Stress run detected inconsistencies");
        Err(miette!(
            code = "collections::stress_inconsistent",
            help = "Rerun with RUST_LOG=trace to inspect per-operation events.",
            "inconsistent collections: {}",
            failed.join(", ")
        ))
    }
}
