//! The demonstration sequence: build a few matrices, multiply them, print
//! every step.
//!
//! ```rust
//! use matrix_demo::demo::{run, DemoConfig};
//!
//! let mut out = Vec::new();
//! let report = run(&mut out, &DemoConfig::with_seed(7)).unwrap();
//! assert_eq!(report.random_ab.shape(), (4, 4));
//! assert!(String::from_utf8(out).unwrap().starts_with("Matrix A:\n"));
//! ```

use std::fmt::Display;
use std::io::Write;

use tracing::{debug, info};

use crate::dynamic::DMatrix;
use crate::error::DemoError;
use crate::fixed::{Matrix2, Matrix2x3, Matrix3, Matrix3x2};
use crate::format::MatrixFormat;
use crate::random::{seeded_rng, UniformRange};

/// Knobs for a demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Seed for the random matrices; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Significant digits per printed entry.
    pub precision: usize,
    /// Interval random entries are drawn from.
    pub range: UniformRange,
}

impl DemoConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            precision: MatrixFormat::DEFAULT_PRECISION,
            range: UniformRange::default(),
        }
    }
}

/// Every matrix the demo built, in the order it printed them.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub a: Matrix3,
    pub b: Matrix3,
    pub ab: Matrix3,
    pub c: Matrix2x3,
    pub d: Matrix3x2,
    pub cd: Matrix2,
    pub random_a: DMatrix,
    pub random_b: DMatrix,
    pub random_ab: DMatrix,
}

/// The two 3×3 literal operands.
pub fn square_operands() -> (Matrix3, Matrix3) {
    let a = Matrix3::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);
    let b = Matrix3::from_rows([
        [9.0, 8.0, 7.0],
        [6.0, 5.0, 4.0],
        [3.0, 2.0, 1.0],
    ]);
    (a, b)
}

/// The 2×3 and 3×2 literal operands.
pub fn rectangular_operands() -> (Matrix2x3, Matrix3x2) {
    let c = Matrix2x3::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
    ]);
    let d = Matrix3x2::from_rows([
        [1.0, 2.0],
        [3.0, 4.0],
        [5.0, 6.0],
    ]);
    (c, d)
}

/// Run the whole sequence, writing every section to `out`.
pub fn run<W: Write + ?Sized>(out: &mut W, config: &DemoConfig) -> Result<DemoReport, DemoError> {
    let precision = MatrixFormat::new(config.precision).precision;
    let mut section = |label: &str, m: &dyn Display, last: bool| -> std::io::Result<()> {
        write!(out, "{}\n{:.*}\n", label, precision, m)?;
        if !last {
            writeln!(out)?;
        }
        Ok(())
    };

    info!("fixed 3x3 product");
    let (a, b) = square_operands();
    section("Matrix A:", &a, false)?;
    section("Matrix B:", &b, false)?;
    let ab = a * b;
    section("Result (A * B):", &ab, false)?;

    info!("fixed 2x3 * 3x2 product");
    let (c, d) = rectangular_operands();
    section("Matrix C (2x3):", &c, false)?;
    section("Matrix D (3x2):", &d, false)?;
    let cd: Matrix2 = c * d;
    section("Result (C * D):", &cd, false)?;

    info!(seed = ?config.seed, low = config.range.low(), high = config.range.high(), "dynamic random product");
    let mut rng = seeded_rng(config.seed);
    let random_a = DMatrix::random(4, 3, &mut rng, &config.range)?;
    let random_b = DMatrix::random(3, 4, &mut rng, &config.range)?;
    section("Random Matrix A (4x3):", &random_a, false)?;
    section("Random Matrix B (3x4):", &random_b, false)?;
    let random_ab = random_a.try_mul(&random_b)?;
    debug!(shape = ?random_ab.shape(), "dynamic product done");
    section("Result (A * B) - 4x4:", &random_ab, true)?;

    Ok(DemoReport {
        a,
        b,
        ab,
        c,
        d,
        cd,
        random_a,
        random_b,
        random_ab,
    })
}
