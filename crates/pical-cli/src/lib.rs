//! # pical-cli
//!
//! CLI output formatting and result presentation.

pub mod output;
pub mod presenter;

pub use presenter::{CLIResultPresenter, ResultPresenter};
