//! Text input for flat matrix sequences.

use crate::error::{MatrixStatsError, Result};

/// Parses a list of numbers separated by commas and/or whitespace.
///
/// `nan`, `inf` and `infinity` (any case, optionally signed) are accepted
/// as numbers; [`validate`](crate::validate()) rejects them afterwards.
/// Empty tokens between repeated separators are skipped.
///
/// # Errors
/// [`MatrixStatsError::Parse`] for the first token that is not a number.
///
/// # Examples
/// ```
/// use matrix_stats::input::parse_values;
/// assert_eq!(parse_values("1, 2.5 -3").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert!(parse_values("1, two, 3").is_err());
/// ```
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| MatrixStatsError::Parse {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}
