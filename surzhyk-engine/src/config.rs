//! Engine configuration

use crate::executor::ExecutionMode;
use surzhyk_core::Alphabet;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The native alphabet the metric is anchored on
    pub alphabet: Alphabet,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Minimum batch size before adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 32,
        }
    }
}

impl EngineConfig {
    /// Strictly sequential configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            ..Self::default()
        }
    }

    /// Always-parallel configuration
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 1,
            ..Self::default()
        }
    }
}
