//! Heller-Heller-Gorfine rank cross-classification statistic
//!
//! For every ordered pair of samples (i, j) the remaining points are
//! cross-classified by whether they sit within distance `d(i, j)` of point i
//! in each space, and the resulting 2×2 contingency table contributes a
//! Pearson chi-squared term. Summing over all ordered pairs gives a
//! consistent test statistic against general alternatives.

use crate::StatisticAlgorithm;
use assoc_core::{Error, Result};
use nalgebra::DMatrix;

/// HHG test statistic over two distance matrices
#[derive(Debug, Clone, Copy, Default)]
pub struct HhgStat;

impl HhgStat {
    pub fn new() -> Self {
        Self
    }
}

impl StatisticAlgorithm for HhgStat {
    fn compute(&self, distx: &DMatrix<f64>, disty: &DMatrix<f64>) -> Result<f64> {
        if distx.nrows() != disty.nrows() {
            return Err(Error::size_mismatch(
                distx.nrows(),
                disty.nrows(),
                "disty",
            ));
        }
        Ok(hhg_statistic(distx, disty))
    }

    fn name(&self) -> &'static str {
        "hhg"
    }

    fn min_samples(&self) -> usize {
        3
    }
}

/// Sum of per-pair chi-squared terms, O(n³)
fn hhg_statistic(distx: &DMatrix<f64>, disty: &DMatrix<f64>) -> f64 {
    let n = distx.nrows();
    let mut stat = 0.0;

    // Row buffers keep the inner counting loop contiguous; nalgebra stores
    // column-major, so row traversal through the matrix itself is strided.
    let mut xi = vec![0.0; n];
    let mut yi = vec![0.0; n];

    for i in 0..n {
        for k in 0..n {
            xi[k] = distx[(i, k)];
            yi[k] = disty[(i, k)];
        }
        for j in 0..n {
            if i == j {
                continue;
            }
            let dx = xi[j];
            let dy = yi[j];

            let (mut t11, mut t12, mut t21, mut t22) = (0i64, 0i64, 0i64, 0i64);
            for k in 0..n {
                let within_x = xi[k] <= dx;
                let within_y = yi[k] <= dy;
                match (within_x, within_y) {
                    (true, true) => t11 += 1,
                    (true, false) => t12 += 1,
                    (false, true) => t21 += 1,
                    (false, false) => t22 += 1,
                }
            }
            // i and k = j always land in the (within, within) cell; drop the
            // two self-comparisons so counts cover only the other n - 2 points.
            t11 -= 2;

            let denom = (t11 + t12) * (t21 + t22) * (t11 + t21) * (t12 + t22);
            if denom > 0 {
                let cross = (t12 * t21 - t11 * t22) as f64;
                stat += (n as f64 - 2.0) * cross * cross / denom as f64;
            }
        }
    }

    stat
}
