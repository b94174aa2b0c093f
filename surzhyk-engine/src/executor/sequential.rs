//! Sequential execution strategy

use crate::aggregator::TextReport;
use crate::executor::{ExecutionMode, Executor};
use crate::pipeline::Pipeline;

/// Scores texts one at a time on the calling thread
#[derive(Debug, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run(&self, pipeline: &Pipeline, texts: &[&str]) -> Vec<TextReport> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| pipeline.score_text(index, text))
            .collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
