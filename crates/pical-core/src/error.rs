//! Error type for quadrature runs.

/// Error type for π computations.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    /// A task parameter is outside its accepted bounds.
    #[error("{0}")]
    InvalidArgument(String),

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        /// Index of the worker that could not be started.
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker terminated without producing its partial sum.
    #[error("worker {worker} panicked before returning its partial sum")]
    Join {
        /// Index of the failed worker.
        worker: usize,
    },

    /// The worker scope ended with an unobserved panic.
    #[error("worker scope terminated abnormally")]
    Scope,
}
