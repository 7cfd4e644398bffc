use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the classifier can report.
///
/// Shape and label errors are raised at the boundary of the call that would
/// break an invariant (construction, training, prediction); nothing is
/// retried or silently recovered.
#[derive(Error, Debug)]
pub enum Error {
    /// A vector or matrix did not have the length the network expects.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A class label fell outside `[0, n_classes)`.
    #[error("invalid label {label}: expected a class index in [0, {n_classes})")]
    InvalidLabel { label: usize, n_classes: usize },

    /// A network shape or hyperparameter was rejected before any work started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed dataset content.
    #[error("failed to parse dataset: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn dimension(context: &'static str, expected: usize, actual: usize) -> Error {
        Error::DimensionMismatch { context, expected, actual }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Error {
        Error::InvalidConfiguration(msg.into())
    }
}
