#![cfg(all(feature = "parallel", not(target_arch = "wasm32")))]

use rayon::ThreadPool;
use std::sync::OnceLock;

/// Best-effort Rayon thread pool for column-parallel classification.
///
/// Rayon's **global** pool can fail to initialize under tight resource
/// limits (e.g. many test binaries sharing one host) and then panics on
/// first use, so the classifier uses a crate-local pool instead. If no pool
/// can be created at all, callers fall back to single-threaded execution.
static CLASSIFIER_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

pub(crate) fn classifier_pool() -> Option<&'static ThreadPool> {
    CLASSIFIER_POOL.get_or_init(build_pool).as_ref()
}

fn build_pool() -> Option<ThreadPool> {
    let threads = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(1);

    let try_build = |n| rayon::ThreadPoolBuilder::new().num_threads(n).build();
    match try_build(threads) {
        Ok(pool) => Some(pool),
        // A constrained host may still manage a one-thread pool.
        Err(_) if threads > 1 => try_build(1).ok(),
        Err(_) => None,
    }
}
