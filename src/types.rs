// src/types.rs
//! Scalar type shared by every matrix in the crate.

/// Element type of all matrices.
pub type Scalar = f64;

/// `(rows, cols)` of a matrix.
pub type Shape = (usize, usize);
