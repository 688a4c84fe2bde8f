//! The k-sample-to-independence transform
//!
//! Testing whether k groups share one distribution reduces to an
//! independence test: pool every observation into one sample matrix `u` and
//! encode each observation's group membership in an indicator matrix `v`.
//! Dependence between `u` and `v` is exactly a difference among the group
//! distributions.

use assoc_core::{Error, Result};
use nalgebra::DMatrix;

/// Pool k groups into `(u, v)` for an independence test
///
/// `u` stacks the groups' rows in order; `v` is the (Σnᵢ, k) one-hot
/// indicator of group membership. Row i of `v` labels row i of `u`.
pub fn k_sample_transform(groups: &[DMatrix<f64>]) -> Result<(DMatrix<f64>, DMatrix<f64>)> {
    let k = groups.len();
    if k < 2 {
        return Err(Error::InvalidInput(format!(
            "k-sample transform needs at least 2 groups, got {k}"
        )));
    }

    let p = groups[0].ncols();
    for (g, group) in groups.iter().enumerate() {
        if group.nrows() == 0 {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if group.ncols() != p {
            return Err(Error::InvalidInput(format!(
                "group {g} has {} columns, expected {p}",
                group.ncols()
            )));
        }
    }

    let n_total: usize = groups.iter().map(|g| g.nrows()).sum();
    let mut u = DMatrix::zeros(n_total, p);
    let mut v = DMatrix::zeros(n_total, k);

    let mut row = 0;
    for (g, group) in groups.iter().enumerate() {
        for i in 0..group.nrows() {
            for c in 0..p {
                u[(row, c)] = group[(i, c)];
            }
            v[(row, g)] = 1.0;
            row += 1;
        }
    }

    Ok((u, v))
}
