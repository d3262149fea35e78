// src/fixed.rs
//! Fixed-shape matrices with compile-time row and column counts.
//!
//! Because the shape is part of the type, multiplying a `Matrix<R, C>` by
//! anything other than a `Matrix<C, P>` does not compile:
//!
//! ```compile_fail
//! use matrix_demo::Matrix2x3;
//!
//! let a = Matrix2x3::zeros();
//! let _ = a * a; // 2x3 * 2x3
//! ```

use std::fmt;
use std::ops::{Index, Mul};

use rand::Rng;

use crate::dynamic::DMatrix;
use crate::error::{MatrixError, Result};
use crate::format::MatrixFormat;
use crate::random::UniformRange;
use crate::types::{Scalar, Shape};

/// An R×C matrix stored row by row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    data: [[Scalar; C]; R],
}

pub type Matrix2 = Matrix<2, 2>;
pub type Matrix3 = Matrix<3, 3>;
pub type Matrix4 = Matrix<4, 4>;
pub type Matrix2x3 = Matrix<2, 3>;
pub type Matrix3x2 = Matrix<3, 2>;
pub type Matrix3x4 = Matrix<3, 4>;
pub type Matrix4x3 = Matrix<4, 3>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Construct from an array of rows.
    #[inline(always)]
    pub const fn from_rows(data: [[Scalar; C]; R]) -> Self {
        Self { data }
    }

    /// Construct from exactly `R * C` values laid out row by row.
    pub fn from_row_slice(values: &[Scalar]) -> Result<Self> {
        if values.len() != R * C {
            return Err(MatrixError::DataLength {
                rows: R,
                cols: C,
                expected: R * C,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(|i, j| values[i * C + j]))
    }

    /// Build each entry from its `(row, col)` index.
    pub fn from_fn<F: FnMut(usize, usize) -> Scalar>(mut f: F) -> Self {
        let mut data = [[0.0; C]; R];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = f(i, j);
            }
        }
        Self { data }
    }

    #[inline(always)]
    pub const fn zeros() -> Self {
        Self { data: [[0.0; C]; R] }
    }

    /// Fill with independent uniform samples from `range`.
    pub fn random<G: Rng + ?Sized>(rng: &mut G, range: &UniformRange) -> Self {
        let values = range.sample_vec(rng, R * C);
        Self::from_fn(|i, j| values[i * C + j])
    }

    #[inline(always)]
    pub const fn rows(&self) -> usize {
        R
    }

    #[inline(always)]
    pub const fn cols(&self) -> usize {
        C
    }

    #[inline(always)]
    pub const fn shape(&self) -> Shape {
        (R, C)
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[Scalar; C] {
        &self.data[i]
    }

    #[inline]
    pub fn as_rows(&self) -> &[[Scalar; C]; R] {
        &self.data
    }

    /// Matrix product `self * rhs`; the shared dimension is checked by the
    /// type system.
    pub fn matmul<const P: usize>(&self, rhs: &Matrix<C, P>) -> Matrix<R, P> {
        let mut out = Matrix::<R, P>::zeros();
        for i in 0..R {
            for j in 0..P {
                let mut sum = 0.0;
                for k in 0..C {
                    sum += self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }

    pub fn transpose(&self) -> Matrix<C, R> {
        Matrix::from_fn(|i, j| self.data[j][i])
    }

    /// Copy into a run-time shaped matrix.
    pub fn to_dynamic(&self) -> DMatrix {
        DMatrix::from_fixed_rows(&self.data)
    }
}

impl<const N: usize> Matrix<N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { 1.0 } else { 0.0 })
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize> From<[[Scalar; C]; R]> for Matrix<R, C> {
    fn from(data: [[Scalar; C]; R]) -> Self {
        Self::from_rows(data)
    }
}

impl<const R: usize, const C: usize> TryFrom<&DMatrix> for Matrix<R, C> {
    type Error = MatrixError;

    fn try_from(m: &DMatrix) -> Result<Self> {
        if m.shape() != (R, C) {
            return Err(MatrixError::WrongShape {
                expected: (R, C),
                found: m.shape(),
            });
        }
        Self::from_row_slice(m.as_slice())
    }
}

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = Scalar;
    /// Index is `(row, col)`
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Scalar {
        &self.data[row][col]
    }
}

impl<const R: usize, const C: usize, const P: usize> Mul<Matrix<C, P>> for Matrix<R, C> {
    type Output = Matrix<R, P>;
    #[inline]
    fn mul(self, rhs: Matrix<C, P>) -> Matrix<R, P> {
        self.matmul(&rhs)
    }
}

impl<'a, const R: usize, const C: usize, const P: usize> Mul<&'a Matrix<C, P>> for &'a Matrix<R, C> {
    type Output = Matrix<R, P>;
    #[inline]
    fn mul(self, rhs: &'a Matrix<C, P>) -> Matrix<R, P> {
        self.matmul(rhs)
    }
}

impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MatrixFormat::from_formatter(f).write_grid(f, self.data.iter().map(|r| &r[..]))
    }
}
