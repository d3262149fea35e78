// src/prelude.rs
//! The "everything" import for matrix_demo.
//!
//! ```rust
//! use matrix_demo::prelude::*;
//! ```

// matrix types
pub use crate::dynamic::DMatrix;
pub use crate::fixed::{Matrix, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3};

// randomness and formatting
pub use crate::format::MatrixFormat;
pub use crate::random::{seeded_rng, UniformRange};

pub use crate::error::MatrixError;
