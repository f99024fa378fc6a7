//! # matrix-stats
//!
//! Validation and descriptive statistics for a fixed 3×3 numeric matrix.
//!
//! A flat sequence of `ROWS * COLS` values is checked, reshaped in
//! row-major order, and summarized with six metrics (mean, variance,
//! standard deviation, max, min, sum). Each metric is reported per column,
//! per row, and over the whole matrix.
//!
//! ## Modules
//!
//! - [`matrix`]: the fixed-shape grid, dimension constants, demo sequence
//! - [`validate`](mod@validate): length and finiteness checks with diagnostics
//! - [`summary`]: per-axis metric reduction and the result type
//! - [`stats`]: compensated sums and the Welford accumulator
//! - [`input`]: parsing text input
//! - [`random`]: seeded demo data
//!
//! ## Design Philosophy
//!
//! - **Shape in the type**: a [`Matrix`] cannot hold the wrong element count
//! - **Numerical stability**: Neumaier summation, Welford variance
//! - **Population statistics**: variance divides by N on every axis
//!
//! ```
//! use matrix_stats::{compute, validate, Metric};
//!
//! let data: Vec<f64> = (0..9).map(f64::from).collect();
//! assert!(validate(&data));
//! let result = compute(&data).unwrap();
//! assert_eq!(result.get(Metric::Sum).overall, 36.0);
//! ```

pub mod error;
pub mod input;
pub mod matrix;
pub mod random;
pub mod stats;
pub mod summary;
pub mod validate;

pub use error::{MatrixStatsError, Result};
pub use matrix::{build_sequential, Matrix, COLS, ROWS};
pub use summary::{compute, AxisStats, Metric, StatResult};
pub use validate::{check, validate};
