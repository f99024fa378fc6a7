//! Numerically stable reductions over a slice of samples.
//!
//! These are the kernels every matrix metric is built from. Each one
//! reduces a single axis (a row, a column, or the flattened grid).
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier compensated summation, O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm, population form.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use matrix_stats::stats::mean;
/// let v = [0.0, 3.0, 6.0];
/// assert_eq!(mean(&v), Some(3.0));
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the population variance (denominator `n`).
///
/// When the spread is so large that deviations overflow, the samples are
/// rescaled into `[-1, 1]` and the result saturates to `+inf` if the true
/// variance exceeds `f64::MAX`. It is never NaN for finite input.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use matrix_stats::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-10);
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let var = WelfordAccumulator::from_slice(data).population_variance()?;
    if var.is_finite() {
        return Some(var);
    }
    // Overflowed deviations imply a nonzero element, so scale > 0.
    let scale = data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x / scale);
    }
    acc.population_variance().map(|v| v * scale * scale)
}

/// Computes the population standard deviation.
///
/// Equivalent to `sqrt(population_variance(data))`.
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use matrix_stats::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0]), Some(1.0));
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use matrix_stats::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0]), Some(4.0));
/// ```
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation.
///
/// Improved Kahan variant that also handles an addend larger in magnitude
/// than the running sum. Sums of small integers are exact.
///
/// If the running sum overflows, the result saturates to ±inf instead of
/// letting the compensation term turn it into NaN.
///
/// Reference: Neumaier (1974), *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if !t.is_finite() {
            return t;
        }
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and second central moment.
///
/// A run of identical samples never moves M₂ off zero, so the variance
/// of a constant axis is exactly `0.0`.
///
/// # Examples
/// ```
/// use matrix_stats::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[0.0, 3.0, 6.0] {
///     acc.update(x);
/// }
/// assert_eq!(acc.mean(), Some(3.0));
/// assert_eq!(acc.population_variance(), Some(6.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an accumulator fed with every element of `data`, in order.
    pub fn from_slice(data: &[f64]) -> Self {
        let mut acc = Self::new();
        for &x in data {
            acc.update(x);
        }
        acc
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        let n1 = self.count;
        self.count += 1;

        if n1 == 0 {
            self.mean_acc = value;
            return;
        }

        let n = self.count as f64;
        let delta = value - self.mean_acc;
        let delta_n = delta / n;
        self.m2 += delta * delta_n * n1 as f64;
        self.mean_acc += delta_n;
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the population variance (n denominator), or `None` if no
    /// samples have been added.
    pub fn population_variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }

    /// Returns the population standard deviation, or `None` if no samples
    /// have been added.
    pub fn population_std_dev(&self) -> Option<f64> {
        self.population_variance().map(f64::sqrt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[0.0, 1.0, 2.0]), Some(1.0));
        assert_eq!(mean(&[3.0, 4.0, 5.0]), Some(4.0));
    }

    #[test]
    fn test_mean_edge_cases() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, f64::NAN]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY]), None);
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    // --- population variance ---

    #[test]
    fn test_population_variance_known_value() {
        // [0, 1, 2]: mean 1, squared deviations 1 + 0 + 1 = 2, / 3
        let var = population_variance(&[0.0, 1.0, 2.0]).unwrap();
        assert!((var - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_population_variance_single_element_is_zero() {
        assert_eq!(population_variance(&[7.5]), Some(0.0));
    }

    #[test]
    fn test_population_variance_edge_cases() {
        assert_eq!(population_variance(&[]), None);
        assert_eq!(population_variance(&[1.0, f64::NAN, 3.0]), None);
        assert_eq!(population_variance(&[f64::NEG_INFINITY, 3.0]), None);
    }

    #[test]
    fn test_population_std_dev() {
        let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.0).abs() < 1e-12);
    }

    // --- min / max ---

    #[test]
    fn test_min_max() {
        let data = [3.0, -1.0, 4.0, 1.5];
        assert_eq!(min(&data), Some(-1.0));
        assert_eq!(max(&data), Some(4.0));
    }

    #[test]
    fn test_min_max_edge_cases() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(min(&[1.0, f64::NAN]), None);
        assert_eq!(max(&[f64::NAN, 1.0]), None);
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_integers_exact() {
        let data: Vec<f64> = (0..9).map(f64::from).collect();
        assert_eq!(kahan_sum(&data), 36.0);
    }

    #[test]
    fn test_kahan_sum_cancellation() {
        // Naive summation loses the 1.0 entirely.
        let data = [1e16, 1.0, -1e16];
        assert_eq!(kahan_sum(&data), 1.0);
    }

    #[test]
    fn test_kahan_sum_empty() {
        assert_eq!(kahan_sum(&[]), 0.0);
    }

    #[test]
    fn test_kahan_sum_overflow_saturates() {
        assert_eq!(kahan_sum(&[1e308; 9]), f64::INFINITY);
        assert_eq!(kahan_sum(&[-1e308; 3]), f64::NEG_INFINITY);
        assert_eq!(mean(&[1e308; 9]), Some(f64::INFINITY));
    }

    #[test]
    fn test_population_variance_huge_spread() {
        // Deviations overflow; the rescaled pass saturates instead of NaN.
        let var = population_variance(&[-1e308, 1e308, 0.0]).unwrap();
        assert_eq!(var, f64::INFINITY);

        // M₂ = 2e308 overflows, the variance 1e308 does not.
        let var = population_variance(&[-1e154, 1e154]).unwrap();
        assert!((var / 1e308 - 1.0).abs() < 1e-12, "got {var}");
    }

    // --- WelfordAccumulator ---

    #[test]
    fn test_welford_empty() {
        let acc = WelfordAccumulator::new();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.population_variance(), None);
        assert_eq!(acc.population_std_dev(), None);
    }

    #[test]
    fn test_welford_constant_is_exactly_zero() {
        let acc = WelfordAccumulator::from_slice(&[0.1; 9]);
        assert_eq!(acc.count(), 9);
        assert_eq!(acc.population_variance(), Some(0.0));
        assert_eq!(acc.population_std_dev(), Some(0.0));
    }

    #[test]
    fn test_variance_large_offset() {
        // Naive E[X²] − E[X]² would cancel catastrophically here.
        let data: Vec<f64> = (0..9).map(|i| 1e9 + i as f64).collect();
        let var = population_variance(&data).unwrap();
        // Population variance of [0..=8] = 60 / 9
        assert!(
            (var - 60.0 / 9.0).abs() < 1e-5,
            "variance of offset data should be ~6.667, got {var}"
        );
    }
}
