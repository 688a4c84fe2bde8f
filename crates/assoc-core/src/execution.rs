//! Execution engines for permutation-trial dispatch
//!
//! Permutation trials are independent, stateless units of work: the runner
//! submits `reps` pure tasks and collects their results with no ordering
//! requirement. This module provides the engine abstraction behind that
//! dispatch, with a sequential implementation and a Rayon-backed parallel
//! implementation (feature `parallel`), plus the mapping from the public
//! `workers` parameter to a concrete engine.

use crate::{Error, Result};

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process trials sequentially in the calling thread
    Sequential,
    /// Process trials in parallel
    Parallel,
}

/// Trait for engines that run batches of independent tasks
///
/// The only contract is independence and order-insensitivity: `execute_batch`
/// evaluates `f(0), f(1), ..., f(count - 1)` in any order and returns the
/// results indexed by task, so callers must not rely on temporal ordering
/// between tasks.
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Execute `count` independent tasks and collect their results
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Get the number of threads available to this engine
    fn num_threads(&self) -> usize;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        self.strategy() == ExecutionStrategy::Parallel
    }
}

/// Sequential execution engine
///
/// Runs all tasks in the current thread, in submission order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl ExecutionEngine for SequentialEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Without an explicit pool, tasks run on Rayon's global thread pool; with
/// `with_num_threads`, the engine owns a dedicated pool capped at the
/// requested concurrency.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a parallel engine on the global thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a parallel engine with a dedicated pool of `num_threads` threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl Default for ParallelEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Worker-count request for a permutation test
///
/// Mirrors the conventional integer parameter: `-1` means all available
/// execution units, `1` means sequential, any other positive value caps
/// concurrency at that many threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Workers {
    /// Use all available execution units
    All,
    /// Cap concurrency at the given number of threads
    Fixed(usize),
}

impl Workers {
    /// Interpret a raw integer worker count
    ///
    /// `-1` maps to [`Workers::All`]; positive values map to
    /// [`Workers::Fixed`]; everything else is rejected.
    pub fn from_raw(workers: i64) -> Result<Self> {
        match workers {
            -1 => Ok(Workers::All),
            n if n >= 1 => Ok(Workers::Fixed(n as usize)),
            n => Err(Error::InvalidParameter(format!(
                "workers must be -1 or a positive integer, got {n}"
            ))),
        }
    }

    /// Number of threads this request resolves to on the current host
    pub fn effective_threads(&self) -> usize {
        match self {
            Workers::All => num_cpus::get(),
            Workers::Fixed(n) => *n,
        }
    }

    /// Resolve this request to a concrete engine
    ///
    /// Without the `parallel` feature every request degrades to sequential
    /// execution.
    pub fn engine(&self) -> Result<PoolEngine> {
        #[cfg(feature = "parallel")]
        {
            match self {
                Workers::All => Ok(PoolEngine::Parallel(ParallelEngine::new())),
                Workers::Fixed(1) => Ok(PoolEngine::Sequential(SequentialEngine)),
                Workers::Fixed(n) => Ok(PoolEngine::Parallel(ParallelEngine::with_num_threads(
                    *n,
                )?)),
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            Ok(PoolEngine::Sequential(SequentialEngine))
        }
    }
}

impl Default for Workers {
    fn default() -> Self {
        Workers::All
    }
}

/// Engine resolved from a [`Workers`] request
#[derive(Clone, Debug)]
pub enum PoolEngine {
    Sequential(SequentialEngine),
    #[cfg(feature = "parallel")]
    Parallel(ParallelEngine),
}

impl ExecutionEngine for PoolEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        match self {
            PoolEngine::Sequential(engine) => engine.execute_batch(count, f),
            #[cfg(feature = "parallel")]
            PoolEngine::Parallel(engine) => engine.execute_batch(count, f),
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        match self {
            PoolEngine::Sequential(engine) => engine.strategy(),
            #[cfg(feature = "parallel")]
            PoolEngine::Parallel(engine) => engine.strategy(),
        }
    }

    fn num_threads(&self) -> usize {
        match self {
            PoolEngine::Sequential(engine) => engine.num_threads(),
            #[cfg(feature = "parallel")]
            PoolEngine::Parallel(engine) => engine.num_threads(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_engine() {
        let engine = SequentialEngine;

        let squares = engine.execute_batch(5, |i| i * i);
        assert_eq!(squares, vec![0, 1, 4, 9, 16]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert_eq!(engine.num_threads(), 1);
        assert!(!engine.is_parallel());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine() {
        let engine = ParallelEngine::new();

        let squares = engine.execute_batch(100, |i| i * i);
        assert_eq!(squares.len(), 100);
        assert_eq!(squares[7], 49);

        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.num_threads() > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_capped() {
        let engine = ParallelEngine::with_num_threads(2).unwrap();
        assert_eq!(engine.num_threads(), 2);

        let values = engine.execute_batch(10, |i| i + 1);
        assert_eq!(values, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_workers_from_raw() {
        assert_eq!(Workers::from_raw(-1).unwrap(), Workers::All);
        assert_eq!(Workers::from_raw(1).unwrap(), Workers::Fixed(1));
        assert_eq!(Workers::from_raw(4).unwrap(), Workers::Fixed(4));
        assert!(Workers::from_raw(0).is_err());
        assert!(Workers::from_raw(-2).is_err());
    }

    #[test]
    fn test_workers_one_is_sequential() {
        let engine = Workers::Fixed(1).engine().unwrap();
        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert_eq!(engine.num_threads(), 1);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_workers_all_is_parallel() {
        let engine = Workers::All.engine().unwrap();
        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.num_threads() >= 1);
    }

    #[test]
    fn test_workers_effective_threads() {
        assert!(Workers::All.effective_threads() >= 1);
        assert_eq!(Workers::Fixed(3).effective_threads(), 3);
    }

    #[test]
    fn test_pool_engine_batch() {
        let engine = Workers::Fixed(1).engine().unwrap();
        let out = engine.execute_batch(4, |i| 2 * i);
        assert_eq!(out, vec![0, 2, 4, 6]);
    }
}
