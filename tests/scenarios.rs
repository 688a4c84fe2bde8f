//! End-to-end scenarios across the whole test pipeline

use approx::assert_abs_diff_eq;
use assoc_stats::{
    column_matrix, dcorr, hhg, hsic, k_sample_transform, KSampleTest, Metric, Workers,
};
use nalgebra::DMatrix;

fn line() -> DMatrix<f64> {
    column_matrix(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
}

fn ones_minus_identity(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| if i == j { 0.0 } else { 1.0 })
}

#[test]
fn hhg_identity_line() {
    let x = line();
    let result = hhg().with_seed(1234).test(&x, &x).unwrap();

    assert_abs_diff_eq!(result.stat, 160.0, epsilon = 1e-9);
    assert!(result.pvalue <= 0.01);
    assert_eq!(result.null_dist.len(), 1000);
}

#[test]
fn hhg_identity_line_more_reps() {
    // the observed statistic must be invariant to the replication count
    let x = line();
    let result = hhg().with_reps(10000).with_seed(1234).test(&x, &x).unwrap();

    assert_abs_diff_eq!(result.stat, 160.0, epsilon = 1e-9);
    assert!(result.pvalue <= 0.01);
    assert_eq!(result.null_dist.len(), 10000);
}

#[test]
fn hhg_precomputed_degenerate() {
    let x = ones_minus_identity(10);
    let y = 2.0 * x.clone();

    let result = hhg()
        .with_metric(Metric::precomputed())
        .with_seed(77)
        .test(&x, &y)
        .unwrap();

    assert_abs_diff_eq!(result.stat, 0.0);
    assert_abs_diff_eq!(result.pvalue, 1.0);
}

#[test]
fn hsic_identity_line() {
    let x = line();
    let result = hsic().with_seed(1234).test(&x, &x).unwrap();

    assert_abs_diff_eq!(result.stat, 1.0, epsilon = 1e-12);
    assert!(result.pvalue <= 0.01);
}

#[test]
fn dcorr_independent_noise_is_insignificant() {
    // fixed pseudo-noise with no relation between the two sides
    let x = column_matrix(&[0.3, -1.2, 2.1, 0.7, -0.4, 1.5, -2.2, 0.9, -0.8, 1.1]);
    let y = column_matrix(&[-1.4, 0.0, -2.4, -1.5, 0.7, 0.2, -1.4, 0.4, 1.5, -2.5]);

    let result = dcorr().with_seed(55).test(&x, &y).unwrap();
    assert!(result.pvalue > 0.05);
    assert!(result.stat.abs() < 0.1);
}

#[test]
fn pvalue_stays_in_corrected_range() {
    let x = line();
    for seed in [1, 2, 3] {
        let result = hhg().with_reps(500).with_seed(seed).test(&x, &x).unwrap();
        assert!(result.pvalue >= 1.0 / 500.0);
        assert!(result.pvalue <= 1.0);
    }
}

#[test]
fn seeded_null_distributions_reproduce() {
    let x = line();
    let a = hsic().with_reps(300).with_seed(9).test(&x, &x).unwrap();
    let b = hsic().with_reps(300).with_seed(9).test(&x, &x).unwrap();
    assert_eq!(a.null_dist, b.null_dist);
    assert_eq!(a.pvalue, b.pvalue);
}

#[test]
fn precomputed_metric_is_identity_on_matrices() {
    let d = ones_minus_identity(6);
    let built = Metric::precomputed().build(&d).unwrap();
    assert_eq!(built, d);
}

#[test]
fn workers_sequential_and_capped_agree_with_seed() {
    let x = line();
    let one = hhg()
        .with_reps(200)
        .with_workers(Workers::Fixed(1))
        .with_seed(31)
        .test(&x, &x)
        .unwrap();
    let many = hhg()
        .with_reps(200)
        .with_workers(Workers::Fixed(4))
        .with_seed(31)
        .test(&x, &x)
        .unwrap();
    let all = hhg()
        .with_reps(200)
        .with_workers(Workers::All)
        .with_seed(31)
        .test(&x, &x)
        .unwrap();

    assert_eq!(one.null_dist, many.null_dist);
    assert_eq!(one.null_dist, all.null_dist);
    assert_eq!(one.pvalue, all.pvalue);
}

#[test]
fn ksample_separated_groups() {
    let a = DMatrix::from_column_slice(5, 1, &[0.0, 0.2, 0.4, 0.6, 0.8]);
    let b = DMatrix::from_column_slice(5, 1, &[20.0, 20.2, 20.4, 20.6, 20.8]);

    let result = KSampleTest::new(dcorr().with_reps(500).with_seed(13))
        .test(&[a, b])
        .unwrap();

    assert!(result.pvalue <= 0.05);
    assert_eq!(result.null_dist.len(), 500);
}

#[test]
fn ksample_transform_row_correspondence() {
    let a = DMatrix::from_column_slice(2, 1, &[1.0, 2.0]);
    let b = DMatrix::from_column_slice(2, 1, &[3.0, 4.0]);

    let (u, v) = k_sample_transform(&[a, b]).unwrap();
    for i in 0..u.nrows() {
        let label = if i < 2 { 0 } else { 1 };
        assert_abs_diff_eq!(v[(i, label)], 1.0);
    }
}
