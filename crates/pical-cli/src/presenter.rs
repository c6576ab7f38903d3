//! CLI result presenter.

use pical_core::PiEstimate;
use tracing::info;

use crate::output::{format_elapsed, format_estimate};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a successful estimate.
    fn present_result(&self, estimate: &PiEstimate);

    /// Present a rejected argument.
    fn present_invalid_argument(&self, message: &str);

    /// Present a failed computation.
    fn present_error(&self, error: &str);
}

/// Presenter writing to stdout/stderr.
#[derive(Debug, Default)]
pub struct CLIResultPresenter;

impl CLIResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Full stdout text for an estimate.
    #[must_use]
    pub fn render(estimate: &PiEstimate) -> String {
        format!(
            "{}\n{}",
            format_elapsed(estimate.elapsed),
            format_estimate(estimate.value)
        )
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, estimate: &PiEstimate) {
        info!(
            intervals = estimate.intervals,
            threads = estimate.threads,
            path = ?estimate.path,
            "presenting estimate"
        );
        println!("{}", Self::render(estimate));
    }

    // Range violations go to stdout, preceded by a blank line.
    fn present_invalid_argument(&self, message: &str) {
        println!("\n{message}");
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
