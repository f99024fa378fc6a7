//! Per-column, per-row, and whole-matrix statistics.
//!
//! Every metric is reduced three ways over a [`Matrix`]:
//!
//! 1. **columns**: reduce over the row axis, entry `j` covers `m[·][j]`
//! 2. **rows**: reduce over the column axis, entry `i` covers `m[i][·]`
//! 3. **overall**: reduce all `ROWS * COLS` elements as one collection
//!
//! Variance and standard deviation use the population form (divide by N)
//! on every axis.

use std::fmt;

use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::matrix::{Matrix, COLS, ROWS};
use crate::stats;
use crate::validate;

/// One of the six summary metrics, in canonical order.
///
/// Serializes as its [`name`](Metric::name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Mean = 0,
    Variance = 1,
    StandardDeviation = 2,
    Max = 3,
    Min = 4,
    Sum = 5,
}

impl Metric {
    /// Number of metrics.
    pub const COUNT: usize = 6;

    /// All metrics in canonical order.
    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::Mean,
        Metric::Variance,
        Metric::StandardDeviation,
        Metric::Max,
        Metric::Min,
        Metric::Sum,
    ];

    /// Canonical name, used as the key in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Mean => "mean",
            Metric::Variance => "variance",
            Metric::StandardDeviation => "standard deviation",
            Metric::Max => "max",
            Metric::Min => "min",
            Metric::Sum => "sum",
        }
    }

    /// Reduces `data` to this metric.
    ///
    /// Returns NaN where the underlying kernel has no answer (empty input
    /// or a NaN/Inf element). Validated matrices never hit that case.
    pub fn apply(self, data: &[f64]) -> f64 {
        let value = match self {
            Metric::Mean => stats::mean(data),
            Metric::Variance => stats::population_variance(data),
            Metric::StandardDeviation => stats::population_std_dev(data),
            Metric::Max => stats::max(data),
            Metric::Min => stats::min(data),
            Metric::Sum => Some(stats::kahan_sum(data)),
        };
        value.unwrap_or(f64::NAN)
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One metric reduced along both axes and over the whole matrix.
///
/// Serializes as `[[col…], [row…], overall]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStats {
    /// Per-column values (reduced over rows), length `COLS`.
    pub columns: [f64; COLS],
    /// Per-row values (reduced over columns), length `ROWS`.
    pub rows: [f64; ROWS],
    /// The metric over every element.
    pub overall: f64,
}

impl AxisStats {
    /// Reduces `matrix` along each axis with `metric`.
    pub fn reduce(metric: Metric, matrix: &Matrix) -> Self {
        let columns = std::array::from_fn(|j| metric.apply(&matrix.column(j)));
        let rows = std::array::from_fn(|i| metric.apply(matrix.row(i)));
        let overall = metric.apply(&matrix.to_flat());
        Self {
            columns,
            rows,
            overall,
        }
    }
}

impl Serialize for AxisStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&self.columns)?;
        tup.serialize_element(&self.rows)?;
        tup.serialize_element(&self.overall)?;
        tup.end()
    }
}

/// All six metrics for one matrix.
///
/// Always holds exactly one [`AxisStats`] per [`Metric`], in canonical
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatResult {
    entries: [AxisStats; Metric::COUNT],
}

impl StatResult {
    /// Computes every metric for `matrix`.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        debug!(rows = ROWS, cols = COLS, "computing matrix statistics");
        Self {
            entries: Metric::ALL.map(|metric| AxisStats::reduce(metric, matrix)),
        }
    }

    /// Returns the per-axis values for `metric`.
    pub fn get(&self, metric: Metric) -> &AxisStats {
        &self.entries[metric as usize]
    }

    /// Iterates over `(metric, stats)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &AxisStats)> {
        Metric::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Serialize for StatResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Metric::COUNT))?;
        for (metric, stats) in self.iter() {
            map.serialize_entry(&metric, stats)?;
        }
        map.end()
    }
}

impl fmt::Display for StatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:<32} {:<32} overall",
            "metric", "columns", "rows"
        )?;
        for (metric, stats) in self.iter() {
            writeln!(
                f,
                "{:<20} {:<32} {:<32} {}",
                metric.name(),
                format!("{:?}", stats.columns),
                format!("{:?}", stats.rows),
                stats.overall
            )?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Computes every metric for this matrix.
    pub fn stats(&self) -> StatResult {
        StatResult::from_matrix(self)
    }
}

/// Validates `values`, reshapes them, and computes all six metrics.
///
/// # Errors
/// - [`MatrixStatsError::LengthMismatch`](crate::MatrixStatsError::LengthMismatch)
///   if `values.len() != ROWS * COLS`.
/// - [`MatrixStatsError::InvalidValue`](crate::MatrixStatsError::InvalidValue)
///   if any element is NaN or infinite.
///
/// # Examples
/// ```
/// use matrix_stats::{compute, Metric};
/// let data: Vec<f64> = (0..9).map(f64::from).collect();
/// let result = compute(&data).unwrap();
/// let mean = result.get(Metric::Mean);
/// assert_eq!(mean.columns, [3.0, 4.0, 5.0]);
/// assert_eq!(mean.rows, [1.0, 4.0, 7.0]);
/// assert_eq!(mean.overall, 4.0);
/// ```
pub fn compute(values: &[f64]) -> Result<StatResult> {
    validate::check(values)?;
    let matrix = Matrix::reshape(values)?;
    Ok(matrix.stats())
}
