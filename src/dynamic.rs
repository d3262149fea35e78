// src/dynamic.rs
//! Matrices whose shape is only known at run time.

use std::fmt;
use std::ops::{Index, Mul};

use rand::Rng;

use crate::classical::multiply_rect;
use crate::error::{MatrixError, Result};
use crate::format::MatrixFormat;
use crate::random::UniformRange;
use crate::types::{Scalar, Shape};

/// A rows×cols matrix stored row-major.
///
/// Both dimensions are non-zero and `data.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct DMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

// Construction
impl DMatrix {
    /// Take ownership of `data`, laid out row by row.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Scalar>) -> Result<Self> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::DataLength {
                rows,
                cols,
                expected: len,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn from_row_slice(rows: usize, cols: usize, values: &[Scalar]) -> Result<Self> {
        Self::from_vec(rows, cols, values.to_vec())
    }

    /// Build from a list of rows which must all have the same length.
    pub fn from_rows(rows: &[Vec<Scalar>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((line, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatrixError::RaggedRow {
                line: line + 1,
                expected: cols,
                found: row.len(),
            });
        }
        Self::from_vec(rows.len(), cols, rows.concat())
    }

    pub fn from_fn<F: FnMut(usize, usize) -> Scalar>(rows: usize, cols: usize, mut f: F) -> Result<Self> {
        let len = element_count(rows, cols)?;
        let data = (0..len).map(|idx| f(idx / cols, idx % cols)).collect();
        Self::from_vec(rows, cols, data)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Self::from_vec(rows, cols, vec![0.0; len])
    }

    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Fill with independent uniform samples from `range`.
    pub fn random<G: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut G, range: &UniformRange) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Self::from_vec(rows, cols, range.sample_vec(rng, len))
    }

    pub(crate) fn from_fixed_rows<const C: usize>(rows: &[[Scalar; C]]) -> Self {
        Self {
            rows: rows.len(),
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }
}

/// `rows * cols`, rejecting empty and overflowing shapes.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::ZeroDimension { rows, cols });
    }
    rows.checked_mul(cols).ok_or(MatrixError::TooLarge { rows, cols })
}

// Accessors
impl DMatrix {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[Scalar] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> std::slice::Chunks<'_, Scalar> {
        self.data.chunks(self.cols)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Deconstruct into `(data, (rows, cols))`.
    pub fn into_vec(self) -> (Vec<Scalar>, Shape) {
        (self.data, (self.rows, self.cols))
    }
}

// Math
impl DMatrix {
    /// Matrix product `self * rhs`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] when `self.cols() != rhs.rows()`.
    pub fn try_mul(&self, rhs: &DMatrix) -> Result<DMatrix> {
        if self.cols != rhs.rows {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let data = multiply_rect(&self.data, &rhs.data, self.rows, self.cols, rhs.cols);
        Ok(DMatrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    pub fn transpose(&self) -> DMatrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        DMatrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl Index<(usize, usize)> for DMatrix {
    type Output = Scalar;
    /// Index is `(row, col)`
    fn index(&self, (row, col): (usize, usize)) -> &Scalar {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for a {}x{} matrix",
            row, col, self.rows, self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<'a> Mul<&'a DMatrix> for &'a DMatrix {
    type Output = DMatrix;
    /// Matrix product.
    ///
    /// # Panics
    /// If the shared dimension differs. Use [`DMatrix::try_mul`] to handle it.
    fn mul(self, rhs: &'a DMatrix) -> DMatrix {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<DMatrix> for DMatrix {
    type Output = DMatrix;
    fn mul(self, rhs: DMatrix) -> DMatrix {
        &self * &rhs
    }
}

impl fmt::Display for DMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MatrixFormat::from_formatter(f).write_grid(f, self.row_iter())
    }
}
