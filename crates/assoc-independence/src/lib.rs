//! Independence test statistics and the permutation-test runner
//!
//! This crate provides nonparametric tests of dependence between paired
//! samples:
//!
//! - **HHG** ([`hhg`]): rank cross-classification over distance matrices
//! - **Dcorr** ([`dcorr`]): unbiased distance correlation via U-centered
//!   trace statistics
//! - **Hsic** ([`hsic`]): the same trace statistic over Gaussian-kernel
//!   similarity matrices
//!
//! All tests share one resampling protocol: the observed statistic is
//! computed once, then [`PermutationTest`] estimates the null distribution
//! from independently permuted relabelings and reports a p-value that is
//! never exactly zero.
//!
//! # Example
//!
//! ```rust,ignore
//! use assoc_core::{utils::column_matrix, Workers};
//! use assoc_independence::hhg;
//!
//! let x = column_matrix(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let result = hhg().with_workers(Workers::Fixed(1)).test(&x, &x)?;
//! assert!(result.pvalue < 0.05);
//! # Ok::<(), assoc_core::Error>(())
//! ```

mod api;
mod dcorr;
mod hhg;
mod permutation;
mod statistic;

pub use api::{dcorr, hhg, hsic, IndependenceTest};
pub use dcorr::{u_center, TraceStat};
pub use hhg::HhgStat;
pub use permutation::{permutation_pvalue, PermutationTest, DEFAULT_REPS};
pub use statistic::{StatisticAlgorithm, TestResult};
