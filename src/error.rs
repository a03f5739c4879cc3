use thiserror::Error;

/// Top-level error type for cage coefficient computations.
#[derive(Debug, Error)]
pub enum CageFieldError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to cage geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("a cage needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("vertex {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
}

/// Errors related to coefficient operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("no cage configuration set")]
    MissingCage,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`CageFieldError`].
pub type Result<T> = std::result::Result<T, CageFieldError>;
