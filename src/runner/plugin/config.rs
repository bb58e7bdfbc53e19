//! Evaluation settings.

/// Default upper bound for `factorial` input.
pub const DEFAULT_MAX_FACTORIAL_INPUT: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    /// Produce exact big integers when a result does not fit in 64 bits. When off, such
    /// results are a range error.
    pub exact_integers: bool,
    /// Largest `n` accepted by `factorial`.
    pub max_factorial_input: u64,
}

impl EvalConfig {
    pub fn new() -> Self {
        EvalConfig {
            exact_integers: true,
            max_factorial_input: DEFAULT_MAX_FACTORIAL_INPUT,
        }
    }

    pub fn with_exact_integers(mut self, exact: bool) -> Self {
        self.exact_integers = exact;
        self
    }

    pub fn with_max_factorial_input(mut self, max: u64) -> Self {
        self.max_factorial_input = max;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::new()
    }
}
