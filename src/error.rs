//! Error types for matrix construction, multiplication and parsing

use thiserror::Error;

use crate::types::Shape;

/// Errors raised by the matrix types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Shared dimension of a product does not match
    #[error("cannot multiply a {}x{} matrix by a {}x{} matrix: shared dimension differs ({} vs {})",
        .left.0, .left.1, .right.0, .right.1, .left.1, .right.0)]
    ShapeMismatch { left: Shape, right: Shape },

    /// Number of supplied values does not fill the requested shape
    #[error("expected {expected} values for a {rows}x{cols} matrix, got {found}")]
    DataLength { rows: usize, cols: usize, expected: usize, found: usize },

    /// Conversion target has a different shape
    #[error("expected a {}x{} matrix, got {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    WrongShape { expected: Shape, found: Shape },

    /// A matrix needs at least one row and one column
    #[error("matrix dimensions must be non-zero, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    /// `rows * cols` does not fit in `usize`
    #[error("a {rows}x{cols} matrix has more elements than fit in memory")]
    TooLarge { rows: usize, cols: usize },

    /// Random range is empty, inverted or not finite
    #[error("invalid random range [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },

    /// A token in a printed grid is not a number
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    /// A printed grid row has a different column count than the first row
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow { line: usize, expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Failure while running the demo sequence
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("writing output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
