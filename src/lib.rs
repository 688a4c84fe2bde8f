//! Nonparametric independence and k-sample tests with permutation p-values
//!
//! `assoc-stats` bundles the workspace crates behind one façade:
//!
//! - [`assoc_core`]: errors, execution engines, metrics, validation
//! - [`assoc_independence`]: the HHG and trace-family statistics and the
//!   permutation-test runner
//! - [`assoc_ksample`]: the k-sample-to-independence transform and test
//!
//! # Quick start
//!
//! ```rust
//! use assoc_stats::{hhg, column_matrix, Workers};
//!
//! let x = column_matrix(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let result = hhg()
//!     .with_reps(1000)
//!     .with_workers(Workers::Fixed(1))
//!     .with_seed(42)
//!     .test(&x, &x)
//!     .unwrap();
//!
//! assert_eq!(result.null_dist.len(), 1000);
//! assert!(result.pvalue < 0.05);
//! ```

pub use assoc_core::{
    metric::{euclidean, gaussian},
    utils::column_matrix,
    Error, ExecutionEngine, ExecutionStrategy, Metric, MetricFn, PoolEngine, Result,
    ParallelEngine, SequentialEngine, Workers, RECOMMENDED_MIN_REPS,
};

pub use assoc_independence::{
    dcorr, hhg, hsic, permutation_pvalue, u_center, HhgStat, IndependenceTest,
    PermutationTest, StatisticAlgorithm, TestResult, TraceStat, DEFAULT_REPS,
};

pub use assoc_ksample::{k_sample_transform, KSampleTest};
