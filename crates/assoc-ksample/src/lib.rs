//! k-sample distribution tests via the independence transform
//!
//! A k-sample test asks whether k groups of observations share one
//! underlying distribution. This crate reduces that question to an
//! independence test: [`k_sample_transform`] pools the groups into a single
//! sample matrix and a one-hot membership matrix, and [`KSampleTest`] runs
//! any configured independence test over the pooled pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use assoc_independence::dcorr;
//! use assoc_ksample::KSampleTest;
//! use nalgebra::DMatrix;
//!
//! let a = DMatrix::from_column_slice(4, 1, &[0.0, 0.1, 0.2, 0.3]);
//! let b = DMatrix::from_column_slice(4, 1, &[9.0, 9.1, 9.2, 9.3]);
//!
//! let result = KSampleTest::new(dcorr()).test(&[a, b])?;
//! assert!(result.pvalue < 0.05);
//! # Ok::<(), assoc_core::Error>(())
//! ```

mod api;
mod transform;

pub use api::KSampleTest;
pub use transform::k_sample_transform;
