//! Execution strategies
//!
//! Texts in a batch are independent, so the batch can run
//! sequentially or fan out across a rayon pool. Results always come
//! back in input order regardless of strategy.

mod sequential;

#[cfg(feature = "parallel")]
mod parallel;

pub use sequential::SequentialExecutor;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;

use crate::aggregator::TextReport;
use crate::config::EngineConfig;
use crate::pipeline::Pipeline;

/// Batch execution strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One text at a time, on the calling thread
    Sequential,
    /// All texts across a worker pool
    Parallel,
    /// Parallel once the batch reaches the configured threshold
    #[default]
    Adaptive,
}

/// A strategy for scoring a batch of texts
pub trait Executor: Send + Sync {
    /// Score every text, returning reports in input order
    fn run(&self, pipeline: &Pipeline, texts: &[&str]) -> Vec<TextReport>;

    /// The mode this executor implements
    fn mode(&self) -> ExecutionMode;
}

/// Score a batch with the strategy the configuration selects
///
/// Without the `parallel` feature every mode degrades to sequential
/// execution.
pub fn run_batch(config: &EngineConfig, pipeline: &Pipeline, texts: &[&str]) -> Vec<TextReport> {
    let parallel = match config.execution_mode {
        ExecutionMode::Sequential => false,
        ExecutionMode::Parallel => true,
        ExecutionMode::Adaptive => texts.len() >= config.parallel_threshold,
    };

    #[cfg(feature = "parallel")]
    if parallel {
        return ParallelExecutor::new(config.threads).run(pipeline, texts);
    }

    #[cfg(not(feature = "parallel"))]
    if parallel {
        log::debug!("parallel execution requested but feature disabled, running sequentially");
    }

    SequentialExecutor.run(pipeline, texts)
}
