//! Error reporting and exit codes.

use pical_cli::ResultPresenter;
use pical_core::{exit_codes, PiError};

/// Report an application error through `presenter` and return the exit code.
///
/// Rejected arguments are printed verbatim to stdout; every other failure
/// goes to stderr with its full context chain.
pub fn handle_error(err: &anyhow::Error, presenter: &dyn ResultPresenter) -> u8 {
    match err.downcast_ref::<PiError>() {
        Some(PiError::InvalidArgument(message)) => presenter.present_invalid_argument(message),
        _ => presenter.present_error(&format!("{err:#}")),
    }
    exit_code(err)
}

/// Exit code for an application error.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<PiError>() {
        Some(
            PiError::InvalidArgument(_)
            | PiError::Spawn { .. }
            | PiError::Join { .. }
            | PiError::Scope,
        )
        | None => exit_codes::ERROR_GENERIC,
    }
}
