//! Evaluation context configuration

/// Default nesting limit for evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configuration for evaluation.
///
/// Held by [`EvalVisitor`](crate::EvalVisitor) for the length of a
/// traversal and controls the recursion limit and tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum nesting depth (stack overflow protection)
    pub max_depth: usize,

    /// Whether to trace evaluation (for debugging)
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable per-node trace events.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
