//! Input validation for association tests
//!
//! All checks run synchronously, before any pairwise matrix is built or any
//! permutation trial is dispatched; a failing check means no partial results.

use crate::{Error, Result};
use nalgebra::DMatrix;
use tracing::warn;

/// Replication count below which the permutation p-value is considered
/// under-resolved
pub const RECOMMENDED_MIN_REPS: usize = 1000;

/// Validate a pair of sample (or pairwise) matrices for a statistic
///
/// Checks row-count agreement, the statistic's minimum sample size, and
/// finiteness of every entry.
pub fn check_paired_samples(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    min_samples: usize,
) -> Result<()> {
    let n = x.nrows();
    if y.nrows() != n {
        return Err(Error::size_mismatch(n, y.nrows(), "y"));
    }
    if n < min_samples {
        return Err(Error::InsufficientData {
            expected: min_samples,
            actual: n,
        });
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("x"));
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("y"));
    }
    Ok(())
}

/// Validate a replication count
///
/// Zero is an error; a count below [`RECOMMENDED_MIN_REPS`] warns and
/// proceeds, since a small null distribution under-resolves the p-value.
pub fn check_reps(reps: usize) -> Result<()> {
    if reps == 0 {
        return Err(Error::InvalidParameter(
            "reps must be a positive integer".to_string(),
        ));
    }
    if reps < RECOMMENDED_MIN_REPS {
        warn!(
            reps,
            recommended = RECOMMENDED_MIN_REPS,
            "permutation count is low; the p-value resolution is 1/reps"
        );
    }
    Ok(())
}

/// Symmetry tolerance for precomputed pairwise matrices
const SYMMETRY_TOL: f64 = 1e-8;

/// Validate a precomputed pairwise matrix: square and symmetric
pub fn check_pairwise(m: &DMatrix<f64>, context: &str) -> Result<()> {
    let n = m.nrows();
    if m.ncols() != n {
        return Err(Error::not_pairwise(context));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if (m[(i, j)] - m[(j, i)]).abs() > SYMMETRY_TOL {
                return Err(Error::not_pairwise(context));
            }
        }
    }
    Ok(())
}
