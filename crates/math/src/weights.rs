//! Sector-weight normalization and weighted factor sums.

use betalens_primitives::FACTOR_COUNT;
use ndarray::{Array1, ArrayView1, s};

use crate::MathError;

/// Normalize weights to sum to 1.
///
/// # Returns
/// `None` when the weights sum to exactly zero, in which case there is no
/// meaningful normalization.
#[must_use]
pub fn normalize_weights(weights: &Array1<f64>) -> Option<Array1<f64>> {
    let total = weights.sum();
    if total == 0.0 {
        return None;
    }
    Some(weights / total)
}

/// Weighted sum of factor vectors.
///
/// Only the first [`FACTOR_COUNT`] values of each row contribute; shorter
/// rows contribute nothing past their end.
///
/// # Arguments
/// * `rows` - Factor vectors, one per contributing row
/// * `weights` - One weight per row
///
/// # Returns
/// Array of length [`FACTOR_COUNT`] with `out[i] = Σ rows[k][i] * weights[k]`.
///
/// # Errors
/// Returns `MathError::DimensionMismatch` if `weights` and `rows` differ in length.
pub fn weighted_factor_sum(rows: &[&[f64]], weights: &Array1<f64>) -> Result<Array1<f64>, MathError> {
    if rows.len() != weights.len() {
        return Err(MathError::DimensionMismatch { expected: rows.len(), actual: weights.len() });
    }

    let mut acc = Array1::<f64>::zeros(FACTOR_COUNT);
    for (row, &weight) in rows.iter().zip(weights.iter()) {
        let n = row.len().min(FACTOR_COUNT);
        acc.slice_mut(s![..n]).scaled_add(weight, &ArrayView1::from(&row[..n]));
    }

    Ok(acc)
}
