//! Constants for quadrature defaults, bounds, and exit codes.

/// Default number of sample intervals.
pub const DEFAULT_INTERVALS: i64 = 2_000_000_000;

/// Default number of workers (serial path).
pub const DEFAULT_THREADS: i64 = 1;

/// Largest accepted number of sample intervals (`i32::MAX`).
pub const MAX_INTERVALS: i64 = 2_147_483_647;

/// Reference value of π used to report the absolute error.
#[allow(clippy::excessive_precision)]
pub const PI_REFERENCE: f64 = 3.141_592_653_589_793_238_462_643;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Invalid argument, spawn failure, or worker failure.
    pub const ERROR_GENERIC: u8 = 1;
}
