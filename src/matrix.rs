//! The fixed 3×3 grid and its construction.
//!
//! Flat input is laid out in row-major order: flat index `i` lands at
//! row `i / COLS`, column `i % COLS`.

use crate::error::{MatrixStatsError, Result};

/// Number of rows in every matrix handled by this crate.
pub const ROWS: usize = 3;

/// Number of columns in every matrix handled by this crate.
pub const COLS: usize = 3;

/// Number of elements in a flat input sequence.
pub const LEN: usize = ROWS * COLS;

/// A `ROWS` × `COLS` grid of `f64` values.
///
/// The shape is part of the type, so a `Matrix` can never hold the wrong
/// number of elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    cells: [[f64; COLS]; ROWS],
}

impl Matrix {
    /// Builds a matrix from a fixed-length flat array in row-major order.
    ///
    /// # Examples
    /// ```
    /// use matrix_stats::Matrix;
    /// let m = Matrix::from_flat([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    /// assert_eq!(m.get(1, 2), 5.0);
    /// ```
    pub fn from_flat(values: [f64; LEN]) -> Self {
        let mut cells = [[0.0; COLS]; ROWS];
        for (i, value) in values.into_iter().enumerate() {
            cells[i / COLS][i % COLS] = value;
        }
        Self { cells }
    }

    /// Reshapes a flat slice into a matrix in row-major order.
    ///
    /// # Errors
    /// [`MatrixStatsError::LengthMismatch`] if `values.len() != ROWS * COLS`.
    pub fn reshape(values: &[f64]) -> Result<Self> {
        let flat: [f64; LEN] = values
            .try_into()
            .map_err(|_| MatrixStatsError::LengthMismatch {
                expected: LEN,
                actual: values.len(),
            })?;
        Ok(Self::from_flat(flat))
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    /// If `row >= ROWS` or `col >= COLS`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }

    /// Returns row `i` as a contiguous slice of `COLS` values.
    pub fn row(&self, i: usize) -> &[f64; COLS] {
        &self.cells[i]
    }

    /// Collects column `j` (one value from each row, top to bottom).
    pub fn column(&self, j: usize) -> [f64; ROWS] {
        let mut out = [0.0; ROWS];
        for (i, row) in self.cells.iter().enumerate() {
            out[i] = row[j];
        }
        out
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[f64; COLS]; ROWS] {
        &self.cells
    }

    /// Flattens the grid back into row-major order.
    pub fn to_flat(&self) -> [f64; LEN] {
        let mut out = [0.0; LEN];
        for (i, row) in self.cells.iter().enumerate() {
            out[i * COLS..(i + 1) * COLS].copy_from_slice(row);
        }
        out
    }
}

/// Produces the placeholder sequence `[0, 1, …, rows * cols − 1]`.
///
/// Used as deterministic demo input.
///
/// # Errors
/// [`MatrixStatsError::InvalidShape`] if either dimension is zero or
/// the element count overflows `u32`.
///
/// # Examples
/// ```
/// use matrix_stats::matrix::build_sequential;
/// assert_eq!(build_sequential(2, 3).unwrap(), vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn build_sequential(rows: usize, cols: usize) -> Result<Vec<u32>> {
    let count = rows
        .checked_mul(cols)
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(MatrixStatsError::InvalidShape { rows, cols })?;
    Ok((0..count).collect())
}
