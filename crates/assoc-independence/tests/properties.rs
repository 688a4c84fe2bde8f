//! Property tests for the statistic algorithms

use assoc_core::metric::euclidean;
use assoc_core::utils::{column_matrix, permute_rows};
use assoc_independence::{HhgStat, StatisticAlgorithm, TraceStat};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 5..20)
}

proptest! {
    #[test]
    fn hhg_is_symmetric(xs in sample_strategy(), seed in 0u64..1000) {
        let ys: Vec<f64> = xs
            .iter()
            .enumerate()
            .map(|(i, v)| v * 0.5 + ((i as u64 * 31 + seed) % 17) as f64)
            .collect();

        let dx = euclidean(&column_matrix(&xs));
        let dy = euclidean(&column_matrix(&ys));

        let hhg = HhgStat::new();
        let xy = hhg.compute(&dx, &dy).unwrap();
        let yx = hhg.compute(&dy, &dx).unwrap();
        prop_assert!((xy - yx).abs() <= 1e-8 * (1.0 + xy.abs()));
    }

    #[test]
    fn trace_stat_is_symmetric(xs in sample_strategy()) {
        let ys: Vec<f64> = xs.iter().map(|v| v * v * 0.01 + 1.0).collect();

        let dx = euclidean(&column_matrix(&xs));
        let dy = euclidean(&column_matrix(&ys));

        let trace = TraceStat::new();
        let xy = trace.compute(&dx, &dy).unwrap();
        let yx = trace.compute(&dy, &dx).unwrap();
        prop_assert!((xy - yx).abs() <= 1e-10 * (1.0 + xy.abs()));
    }

    #[test]
    fn joint_relabeling_preserves_statistics(xs in sample_strategy(), rot in 1usize..4) {
        let n = xs.len();
        let ys: Vec<f64> = xs.iter().rev().cloned().collect();

        // a rotation is a permutation applied jointly to both samples
        let perm: Vec<usize> = (0..n).map(|i| (i + rot) % n).collect();

        let x = column_matrix(&xs);
        let y = column_matrix(&ys);
        let px = permute_rows(&x, &perm);
        let py = permute_rows(&y, &perm);

        let hhg = HhgStat::new();
        let original = hhg.compute(&euclidean(&x), &euclidean(&y)).unwrap();
        let relabeled = hhg.compute(&euclidean(&px), &euclidean(&py)).unwrap();
        prop_assert!((original - relabeled).abs() <= 1e-8 * (1.0 + original.abs()));

        let trace = TraceStat::new();
        let original = trace.compute(&euclidean(&x), &euclidean(&y)).unwrap();
        let relabeled = trace.compute(&euclidean(&px), &euclidean(&py)).unwrap();
        prop_assert!((original - relabeled).abs() <= 1e-10 * (1.0 + original.abs()));
    }
}
