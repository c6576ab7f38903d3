//! pical library: application logic for the pi quadrature CLI.

pub mod app;
pub mod config;
pub mod errors;
