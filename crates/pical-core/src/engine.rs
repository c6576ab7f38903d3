//! The quadrature engine: partition, evaluate, reduce, time.
//!
//! `T == 1` runs [`sum_range`] over `[0, n)` on the calling thread. `T > 1`
//! spawns exactly `T` scoped threads, one per [`WorkRange`]. Each worker owns
//! a copy of its range and the interval width and hands back its partial
//! sum through its join handle. The calling thread joins every worker in
//! ascending index order and reduces in that same order, so repeated runs
//! with the same `T` are bit-identical.

use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::constants::PI_REFERENCE;
use crate::error::PiError;
use crate::integrand::sum_range;
use crate::params::TaskParams;
use crate::partition::{Partition, WorkRange};

/// Which code path produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPath {
    /// Summed on the calling thread, no workers spawned.
    Serial,
    /// Summed by `T` scoped worker threads.
    Parallel,
}

/// One worker's contribution before reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialSum {
    /// The range the worker summed.
    pub range: WorkRange,
    /// `Σ f(x_i)` over the range (not yet scaled by `h`).
    pub sum: f64,
    /// Time the worker spent inside its loop.
    pub duration: Duration,
}

/// Result of one π computation.
#[derive(Debug, Clone)]
pub struct PiEstimate {
    /// `h * Σ partials`.
    pub value: f64,
    /// Monotonic time from before partitioning to after reduction.
    pub elapsed: Duration,
    /// Number of sample intervals `n`.
    pub intervals: u64,
    /// Number of workers `T`.
    pub threads: usize,
    pub path: ExecutionPath,
    /// Per-worker partial sums in worker order. Empty on the serial path.
    pub partials: Vec<PartialSum>,
}

impl PiEstimate {
    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Absolute error against [`PI_REFERENCE`].
    #[must_use]
    pub fn abs_error(&self) -> f64 {
        (self.value - PI_REFERENCE).abs()
    }
}

/// Midpoint-rule quadrature of `4 / (1 + x^2)` over `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadratureEngine;

impl QuadratureEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute π for validated parameters.
    pub fn compute(&self, params: &TaskParams) -> Result<PiEstimate, PiError> {
        self.compute_raw(params.intervals(), params.threads())
    }

    /// Compute π with `n` intervals and `threads` workers.
    ///
    /// Unlike [`TaskParams`], `n` is not bounded by `i32::MAX` here; index
    /// arithmetic is `u64` throughout. Zero `n` or zero `threads` is
    /// rejected. Workers beyond `n` receive empty ranges and contribute 0.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_raw(&self, n: u64, threads: usize) -> Result<PiEstimate, PiError> {
        if n == 0 {
            return Err(PiError::InvalidArgument(
                "the number of intervals must be positive".into(),
            ));
        }
        if threads == 0 {
            return Err(PiError::InvalidArgument(
                "the number of threads must be positive".into(),
            ));
        }

        let h = 1.0 / n as f64;
        let start = Instant::now();

        let (sum, path, partials) = if threads == 1 {
            (serial_sum(n, h), ExecutionPath::Serial, Vec::new())
        } else {
            let partition = Partition::new(n, threads);
            debug_assert!(partition.is_exact_cover());
            debug!(n, threads, "partitioned sample range");
            let partials = parallel_sum(&partition, h)?;
            (reduce(&partials), ExecutionPath::Parallel, partials)
        };

        let elapsed = start.elapsed();
        let value = h * sum;
        debug!(n, threads, ?path, ?elapsed, value, "pi estimate complete");

        Ok(PiEstimate {
            value,
            elapsed,
            intervals: n,
            threads,
            path,
            partials,
        })
    }
}

/// Serial path: one loop over `[0, n)` on the calling thread.
pub(crate) fn serial_sum(n: u64, h: f64) -> f64 {
    sum_range(0, n, h)
}

/// Ascending-worker-order reduction.
pub(crate) fn reduce(partials: &[PartialSum]) -> f64 {
    partials.iter().fold(0.0, |acc, p| acc + p.sum)
}

/// Parallel path: one scoped thread per range, joined in worker order.
///
/// If a spawn fails, workers that already started are joined before the
/// error is returned; no partial result escapes.
pub(crate) fn parallel_sum(partition: &Partition, h: f64) -> Result<Vec<PartialSum>, PiError> {
    let outcome = crossbeam::thread::scope(|scope| -> Result<Vec<PartialSum>, PiError> {
        let mut handles = Vec::with_capacity(partition.len());
        for &range in partition {
            let spawned = scope
                .builder()
                .name(format!("pical-worker-{}", range.worker))
                .spawn(move |_| {
                    let started = Instant::now();
                    let sum = sum_range(range.start, range.end, h);
                    (sum, started.elapsed())
                });
            match spawned {
                Ok(handle) => handles.push((range, handle)),
                Err(source) => {
                    error!(worker = range.worker, %source, "failed to spawn worker");
                    for (_, handle) in handles {
                        let _ = handle.join();
                    }
                    return Err(PiError::Spawn {
                        worker: range.worker,
                        source,
                    });
                }
            }
        }

        // Barrier: every handle is joined before anything is reduced.
        let mut partials = Vec::with_capacity(handles.len());
        let mut failed = None;
        for (range, handle) in handles {
            match handle.join() {
                Ok((sum, duration)) => {
                    debug!(
                        worker = range.worker,
                        start = range.start,
                        end = range.end,
                        sum,
                        ?duration,
                        "worker joined"
                    );
                    partials.push(PartialSum {
                        range,
                        sum,
                        duration,
                    });
                }
                Err(_) => {
                    error!(worker = range.worker, "worker panicked");
                    if failed.is_none() {
                        failed = Some(range.worker);
                    }
                }
            }
        }

        match failed {
            Some(worker) => Err(PiError::Join { worker }),
            None => Ok(partials),
        }
    });

    // Every handle is joined explicitly above, so the scope itself only
    // fails if a worker panicked while its handle was being dropped.
    outcome.unwrap_or(Err(PiError::Scope))
}
