//! CLI output formatting.

use std::time::Duration;

use pical_core::PI_REFERENCE;

/// `Time elapsed: <secs> seconds`, six decimals.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Time elapsed: {:.6} seconds", elapsed.as_secs_f64())
}

/// The estimate and its absolute error against [`PI_REFERENCE`], twenty
/// decimals each, preceded by a blank line.
#[must_use]
pub fn format_estimate(value: f64) -> String {
    format!(
        "\npi is approximately = {value:.20}\nError               = {:.20}",
        (value - PI_REFERENCE).abs()
    )
}
