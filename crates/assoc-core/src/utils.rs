//! Small matrix and permutation utilities shared across the workspace

use nalgebra::DMatrix;
use rand::seq::SliceRandom;
use rand::Rng;

/// Coerce a one-dimensional sequence into an (n, 1) sample matrix
pub fn column_matrix(data: &[f64]) -> DMatrix<f64> {
    DMatrix::from_column_slice(data.len(), 1, data)
}

/// Draw a uniformly random permutation of `0..n`
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Reorder the rows of a sample matrix by `perm`
///
/// Row `i` of the result is row `perm[i]` of the input.
pub fn permute_rows(m: &DMatrix<f64>, perm: &[usize]) -> DMatrix<f64> {
    assert_eq!(m.nrows(), perm.len());
    DMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(perm[i], j)])
}

/// Reorder a pairwise matrix on both axes by `perm`
///
/// This is the pairwise image of permuting the underlying sample rows:
/// entry (i, j) of the result is entry (perm[i], perm[j]) of the input, so
/// symmetry and the zero diagonal are preserved.
pub fn conjugate(m: &DMatrix<f64>, perm: &[usize]) -> DMatrix<f64> {
    assert_eq!(m.nrows(), perm.len());
    DMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(perm[i], perm[j])])
}
