//! Core traits and types for nonparametric association testing
//!
//! This crate provides the foundation shared by the assoc-stats workspace:
//!
//! - A unified [`Error`] type and [`Result`] alias
//! - [`ExecutionEngine`] abstraction for dispatching independent permutation
//!   trials, with sequential and Rayon-backed implementations and the
//!   [`Workers`] request type that maps the conventional `-1 / 1 / n` worker
//!   parameter onto an engine
//! - [`Metric`] for turning raw samples into pairwise distance or kernel
//!   matrices, or passing precomputed matrices through unchanged
//! - Input validation that runs before any parallel work is dispatched
//!
//! # Example
//!
//! ```rust
//! use assoc_core::{metric::euclidean, utils::column_matrix};
//!
//! let x = column_matrix(&[0.0, 1.0, 2.0]);
//! let d = euclidean(&x);
//! assert_eq!(d[(0, 2)], 2.0);
//! ```

pub mod error;
pub mod execution;
pub mod metric;
pub mod utils;
pub mod validation;

pub use error::{Error, Result};
pub use execution::{
    ExecutionEngine, ExecutionStrategy, PoolEngine, SequentialEngine, Workers,
};
#[cfg(feature = "parallel")]
pub use execution::ParallelEngine;
pub use metric::{Metric, MetricFn};
pub use validation::RECOMMENDED_MIN_REPS;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
