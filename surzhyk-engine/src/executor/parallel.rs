//! Parallel execution strategy
//!
//! Each text is a fully independent unit of work: the pipeline holds
//! only read-only collaborators, so texts fan out across a rayon pool
//! with no shared mutable state. Collection preserves input order.

use log::warn;
use rayon::prelude::*;

use crate::aggregator::TextReport;
use crate::executor::{ExecutionMode, Executor, SequentialExecutor};
use crate::pipeline::Pipeline;

/// Scores texts across a rayon worker pool
#[derive(Debug)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a parallel executor; `threads` of `None` uses the
    /// rayon default pool size
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn score_all(pipeline: &Pipeline, texts: &[&str]) -> Vec<TextReport> {
        texts
            .par_iter()
            .enumerate()
            .map(|(index, text)| pipeline.score_text(index, text))
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn run(&self, pipeline: &Pipeline, texts: &[&str]) -> Vec<TextReport> {
        match self.threads {
            None => Self::score_all(pipeline, texts),
            Some(threads) => {
                match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                    Ok(pool) => pool.install(|| Self::score_all(pipeline, texts)),
                    Err(err) => {
                        warn!("failed to build {threads}-thread pool, running sequentially: {err}");
                        SequentialExecutor.run(pipeline, texts)
                    }
                }
            }
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
