//! Error type shared by the generators and the factorizer.

use std::time::Duration;

/// Error type for Fibonacci and factorization operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The factorizer ran past its wall-clock budget.
    #[error(
        "factorization taking too long; number too large (budget {budget:?}, elapsed {elapsed:?})"
    )]
    TimeoutExceeded {
        /// Budget the caller granted.
        budget: Duration,
        /// Time spent when the deadline check fired.
        elapsed: Duration,
    },

    /// An input was outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoreError {
    /// Whether this error is a deadline expiry.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutExceeded { .. })
    }
}
