//! # pical-core
//!
//! Midpoint-rule quadrature of `4 / (1 + x^2)` over `[0, 1]`, split across a
//! fixed number of worker threads by static contiguous partitioning.

pub mod constants;
pub mod engine;
pub mod error;
pub mod integrand;
pub mod params;
pub mod partition;

// Re-exports
pub use constants::{exit_codes, DEFAULT_INTERVALS, DEFAULT_THREADS, MAX_INTERVALS, PI_REFERENCE};
pub use engine::{ExecutionPath, PartialSum, PiEstimate, QuadratureEngine};
pub use error::PiError;
pub use params::TaskParams;
pub use partition::{chunk_range, Partition, WorkRange};

/// Approximate π with `n` intervals over `threads` workers.
///
/// This is a convenience wrapper around [`QuadratureEngine::compute_raw`].
///
/// # Example
/// ```
/// let est = pical_core::compute_pi(1, 1).unwrap();
/// assert_eq!(est.value, 3.2);
///
/// let est = pical_core::compute_pi(100_000, 4).unwrap();
/// assert!(est.abs_error() < 1e-9);
/// ```
pub fn compute_pi(n: u64, threads: usize) -> Result<PiEstimate, PiError> {
    QuadratureEngine::new().compute_raw(n, threads)
}
