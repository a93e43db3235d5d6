use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

// Negative requests count back from the number of available cores: -1 is "all of them".
fn normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Resolves the requested number of worker threads against the cores available on this machine.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get() as isize;
    Ok(normalize(requested, max))
}

/// Builds a rayon pool with the resolved number of threads. The calling thread takes part in the work.
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .use_current_thread()
        .build()?;
    Ok(pool)
}
