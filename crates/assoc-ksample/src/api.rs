//! High-level k-sample test API

use crate::k_sample_transform;
use assoc_core::Result;
use assoc_independence::{IndependenceTest, StatisticAlgorithm, TestResult};
use nalgebra::DMatrix;

/// A k-sample distribution-equality test
///
/// Wraps a configured [`IndependenceTest`]; groups are pooled through the
/// k-sample transform and the unchanged independence pipeline (statistic,
/// permutation trials, p-value correction) runs on the pooled pair.
#[derive(Clone, Debug)]
pub struct KSampleTest<S> {
    indep: IndependenceTest<S>,
}

impl<S: StatisticAlgorithm> KSampleTest<S> {
    /// Build a k-sample test around an independence test configuration
    pub fn new(indep: IndependenceTest<S>) -> Self {
        Self { indep }
    }

    /// The wrapped independence test
    pub fn independence_test(&self) -> &IndependenceTest<S> {
        &self.indep
    }

    /// Observed statistic of the pooled pair, without resampling
    pub fn statistic(&self, groups: &[DMatrix<f64>]) -> Result<f64> {
        let (u, v) = k_sample_transform(groups)?;
        self.indep.statistic(&u, &v)
    }

    /// Run the permutation test across the k groups
    pub fn test(&self, groups: &[DMatrix<f64>]) -> Result<TestResult> {
        let (u, v) = k_sample_transform(groups)?;
        self.indep.test(&u, &v)
    }
}
