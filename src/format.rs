//! Text rendering and parsing of matrix grids.
//!
//! Entries are written in "general" notation: `precision` significant
//! digits, trailing zeros stripped, switching to scientific notation when the
//! decimal exponent is below -4 or at least `precision`. All entries of a
//! grid are right-aligned to the width of the widest one and separated by a
//! single space.

use std::fmt;

use crate::dynamic::DMatrix;
use crate::error::{MatrixError, Result};
use crate::types::Scalar;

/// Grid layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixFormat {
    /// Significant digits per entry.
    pub precision: usize,
}

impl MatrixFormat {
    pub const DEFAULT_PRECISION: usize = 6;
    /// Beyond this `f64` carries no further information.
    pub const MAX_PRECISION: usize = 17;

    pub fn new(precision: usize) -> Self {
        Self {
            precision: precision.clamp(1, Self::MAX_PRECISION),
        }
    }

    /// Format taken from a `{:.N}` specifier, falling back to the default.
    pub fn from_formatter(f: &fmt::Formatter<'_>) -> Self {
        Self::new(f.precision().unwrap_or(Self::DEFAULT_PRECISION))
    }

    /// Write rows as an aligned grid without a trailing newline.
    pub fn write_grid<'a, W, I>(&self, out: &mut W, rows: I) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        I: IntoIterator<Item = &'a [Scalar]>,
    {
        let cells: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.iter().map(|&x| format_general(x, self.precision)).collect())
            .collect();
        let width = cells
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);

        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                out.write_char('\n')?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    out.write_char(' ')?;
                }
                write!(out, "{:>width$}", cell, width = width)?;
            }
        }
        Ok(())
    }
}

impl Default for MatrixFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION)
    }
}

/// Format one value with `precision` significant digits, C `%g` style.
pub fn format_general(value: Scalar, precision: usize) -> String {
    let precision = precision.max(1);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to `precision` digits
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Parse a whitespace-separated grid back into a matrix.
///
/// Blank lines are skipped. Every remaining line is one row and all rows must
/// have the same number of entries.
pub fn parse_grid(text: &str) -> Result<DMatrix> {
    let mut cols = None;
    let mut rows = 0;
    let mut data = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let before = data.len();
        for token in line.split_whitespace() {
            let value = token.parse::<Scalar>().map_err(|_| MatrixError::Parse {
                line: line_no,
                token: token.to_string(),
            })?;
            data.push(value);
        }
        let found = data.len() - before;
        match cols {
            None => cols = Some(found),
            Some(expected) if expected != found => {
                return Err(MatrixError::RaggedRow {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    DMatrix::from_vec(rows, cols.unwrap_or(0), data)
}
