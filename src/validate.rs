//! Input validation for flat matrix sequences.
//!
//! [`check`] returns the reason a sequence is rejected. [`validate`] wraps
//! it with a diagnostic event and reduces the outcome to a `bool`.

use tracing::{error, info};

use crate::error::{MatrixStatsError, Result};
use crate::matrix::LEN;

/// Checks that `values` can be summarized.
///
/// The length is checked first, then every element must be finite.
/// Emits no diagnostics.
///
/// # Errors
/// - [`MatrixStatsError::LengthMismatch`] if `values.len() != ROWS * COLS`.
/// - [`MatrixStatsError::InvalidValue`] for the first NaN or infinite element.
pub fn check(values: &[f64]) -> Result<()> {
    if values.len() != LEN {
        return Err(MatrixStatsError::LengthMismatch {
            expected: LEN,
            actual: values.len(),
        });
    }
    match values.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(MatrixStatsError::InvalidValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Returns `true` iff `values` has exactly `ROWS * COLS` finite elements.
///
/// Logs the outcome: `info` on success, `error` with the reason on failure.
/// The log is observational only.
///
/// # Examples
/// ```
/// use matrix_stats::validate;
/// assert!(validate(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]));
/// assert!(!validate(&[0.0, 1.0]));
/// ```
pub fn validate(values: &[f64]) -> bool {
    match check(values) {
        Ok(()) => {
            info!(len = values.len(), "the array is valid");
            true
        }
        Err(MatrixStatsError::LengthMismatch { expected, actual }) => {
            error!(expected, actual, "the array has invalid length {actual} instead of {expected}");
            false
        }
        Err(e) => {
            error!(
                error = %e,
                "the array contains invalid values (NaN, infinite, or non-numeric)"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::FmtSubscriber;

    fn sequential() -> Vec<f64> {
        (0..9).map(f64::from).collect()
    }

    /// In-memory log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `validate` under a scoped subscriber and returns what it logged.
    fn validate_logged(values: &[f64]) -> (bool, String) {
        let buffer = LogBuffer::default();
        let subscriber = FmtSubscriber::builder()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();
        let ok = tracing::subscriber::with_default(subscriber, || validate(values));
        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (ok, logged)
    }

    #[test]
    fn test_sequential_is_valid() {
        assert_eq!(check(&sequential()), Ok(()));
        assert!(validate(&sequential()));
    }

    #[test]
    fn test_short_input_reports_counts() {
        let data = &sequential()[..8];
        let (ok, logged) = validate_logged(data);
        assert!(!ok);
        assert!(logged.contains("ERROR"), "{logged}");
        assert!(logged.contains("invalid length 8 instead of 9"), "{logged}");
        assert!(logged.contains("expected=9"), "{logged}");
        assert!(logged.contains("actual=8"), "{logged}");

        let msg = check(data).unwrap_err().to_string();
        assert!(msg.contains("expected 9"), "{msg}");
        assert!(msg.contains("got 8"), "{msg}");
    }

    #[test]
    fn test_invalid_values_logged() {
        let mut data = sequential();
        data[4] = f64::NAN;
        let (ok, logged) = validate_logged(&data);
        assert!(!ok);
        assert!(logged.contains("ERROR"), "{logged}");
        assert!(logged.contains("contains invalid values"), "{logged}");
        assert!(logged.contains("index 4"), "{logged}");
    }

    #[test]
    fn test_valid_input_logged_as_info() {
        let (ok, logged) = validate_logged(&sequential());
        assert!(ok);
        assert!(logged.contains("INFO"), "{logged}");
        assert!(logged.contains("the array is valid"), "{logged}");
        assert!(!logged.contains("ERROR"), "{logged}");
    }

    #[test]
    fn test_empty_and_long_inputs_rejected() {
        assert!(!validate(&[]));
        let long: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(
            check(&long),
            Err(MatrixStatsError::LengthMismatch {
                expected: 9,
                actual: 10
            })
        );
    }

    #[test]
    fn test_nan_rejected() {
        let mut data = sequential();
        data[4] = f64::NAN;
        assert!(!validate(&data));
        assert!(matches!(
            check(&data),
            Err(MatrixStatsError::InvalidValue { index: 4, .. })
        ));
    }

    #[test]
    fn test_infinities_rejected() {
        let mut data = sequential();
        data[0] = f64::INFINITY;
        assert!(!validate(&data));
        data[0] = 0.0;
        data[8] = f64::NEG_INFINITY;
        assert_eq!(
            check(&data),
            Err(MatrixStatsError::InvalidValue {
                index: 8,
                value: f64::NEG_INFINITY
            })
        );
    }

    #[test]
    fn test_length_checked_before_values() {
        let data = [f64::NAN; 4];
        assert!(matches!(
            check(&data),
            Err(MatrixStatsError::LengthMismatch { actual: 4, .. })
        ));
    }
}
