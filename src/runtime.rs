//! Thread-count selection.
//!
//! The engine partitions work by thread index itself, so all that is needed
//! here is a count: rayon's pool is used as-is and never reconfigured.

use std::thread;

const ENV_HINTS: [&str; 2] = ["PRIMEPI_THREADS", "RAYON_NUM_THREADS"];

fn parse_env_threads(keys: &[&str]) -> Option<usize> {
    for &key in keys {
        if let Ok(v) = std::env::var(key) {
            if let Ok(val) = v.parse::<usize>() {
                if val > 0 {
                    return Some(val);
                }
            }
        }
    }
    None
}

/// Resolve a requested worker count; 0 means auto-detect from the
/// environment hints, then from the hardware.
pub fn validate_threads(threads: usize) -> usize {
    if threads > 0 {
        return threads;
    }
    if let Some(count) = parse_env_threads(&ENV_HINTS) {
        return count;
    }
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .max(1)
}

/// Cap the worker count so that every worker gets at least `min_dist` of
/// the `dist`-sized range.
pub fn ideal_num_threads(threads: usize, dist: u64, min_dist: u64) -> usize {
    let max_threads = (dist / min_dist.max(1)).max(1);
    (threads as u64).clamp(1, max_threads) as usize
}

/// Per-round progress lines are off unless the host opts in.
pub(crate) fn status_enabled() -> bool {
    std::env::var_os("PRIMEPI_STATUS").is_some()
}
