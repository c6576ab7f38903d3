//! Validated task parameters.

use crate::constants::MAX_INTERVALS;
use crate::error::PiError;

/// Number of sample intervals and workers for one computation.
///
/// Construction through [`TaskParams::new`] enforces `0 < n <= i32::MAX`
/// and `threads > 0`. Values are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskParams {
    intervals: u64,
    threads: usize,
}

impl TaskParams {
    /// Validate raw (possibly negative) user input.
    pub fn new(intervals: i64, threads: i64) -> Result<Self, PiError> {
        if intervals <= 0 || intervals > MAX_INTERVALS {
            return Err(PiError::InvalidArgument(format!(
                "The number of intervals must be between 1 and {MAX_INTERVALS}"
            )));
        }
        let threads = usize::try_from(threads).ok().filter(|&t| t > 0).ok_or_else(|| {
            PiError::InvalidArgument("The number of threads must be greater than 0".into())
        })?;
        Ok(Self {
            intervals: intervals.unsigned_abs(),
            threads,
        })
    }

    /// Total number of sample intervals `n`.
    #[must_use]
    pub fn intervals(&self) -> u64 {
        self.intervals
    }

    /// Number of workers `T`.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }
}
