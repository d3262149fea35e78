//! # matrix_demo Quickstart
//!
//! ```rust
//! use matrix_demo::prelude::*;
//!
//! let a = Matrix2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! let b = Matrix3x2::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
//!
//! // Shapes are checked at compile time: 2x3 * 3x2 = 2x2
//! let c: Matrix2 = a * b;
//! assert_eq!(c, Matrix2::from_rows([[22.0, 28.0], [49.0, 64.0]]));
//!
//! // ...and at run time for dynamic matrices
//! let x = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! assert!(x.try_mul(&x).is_err());
//! ```

// Core modules
pub mod classical;
pub mod dynamic;
pub mod error;
pub mod fixed;
pub mod format;
pub mod random;
pub mod types;

// Demo driver and binary support
pub mod demo;
pub mod prelude;
pub mod telemetry;

// --- Public API exports ---

pub use classical::{multiply_matrices, multiply_rect};
pub use dynamic::DMatrix;
pub use error::{DemoError, MatrixError, Result};
pub use fixed::{Matrix, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3};
pub use format::{format_general, parse_grid, MatrixFormat};
pub use random::{seeded_rng, UniformRange};
pub use types::{Scalar, Shape};
