//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use pical_cli::ResultPresenter;
use pical_core::QuadratureEngine;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    let params = config.task_params()?;
    debug!(
        intervals = params.intervals(),
        threads = params.threads(),
        "validated arguments"
    );

    let estimate = QuadratureEngine::new()
        .compute(&params)
        .context("pi computation aborted")?;

    presenter.present_result(&estimate);
    Ok(())
}
