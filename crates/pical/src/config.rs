//! Application configuration from positional CLI arguments.

use clap::Parser;

use pical_core::{PiError, TaskParams, DEFAULT_INTERVALS, DEFAULT_THREADS};

/// pical: approximate pi by midpoint-rule quadrature of 4/(1+x^2) over [0,1].
#[derive(Parser, Debug)]
#[command(name = "pical", version, about)]
pub struct AppConfig {
    /// Number of sample intervals (1 to 2147483647).
    #[arg(value_name = "N", default_value_t = DEFAULT_INTERVALS, allow_negative_numbers = true)]
    pub n: i64,

    /// Number of worker threads; 1 runs on the calling thread.
    #[arg(value_name = "THREADS", default_value_t = DEFAULT_THREADS, allow_negative_numbers = true)]
    pub threads: i64,
}

impl AppConfig {
    /// Validate the raw arguments. Out-of-range values are rejected, never clamped.
    pub fn task_params(&self) -> Result<TaskParams, PiError> {
        TaskParams::new(self.n, self.threads)
    }
}
