//! Fibonacci generator trait, method selection and index conversion.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::generator_iterative::IterativeGenerator;
use crate::generator_memoized::MemoizedGenerator;

/// Trait for computing the nth Fibonacci number, F(0) = 0, F(1) = 1.
pub trait FibonacciGenerator: Send + Sync {
    /// Compute F(n).
    fn generate(&self, n: u64) -> BigUint;

    /// Get the name of this generator.
    fn name(&self) -> &'static str;
}

/// Available Fibonacci methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Running pair advanced n times.
    #[default]
    Iterative,
    /// Recursion over a cache owned by the call.
    Memoized,
}

impl Method {
    /// Every method, in display order.
    pub const ALL: [Method; 2] = [Method::Iterative, Method::Memoized];

    /// The name used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Memoized => "memoized",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" | "iter" => Ok(Self::Iterative),
            "memoized" | "memo" => Ok(Self::Memoized),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown Fibonacci method: {other}"
            ))),
        }
    }
}

static ITERATIVE: IterativeGenerator = IterativeGenerator;
static MEMOIZED: MemoizedGenerator = MemoizedGenerator;

/// Get the generator implementing `method`.
#[must_use]
pub fn generator_for(method: Method) -> &'static dyn FibonacciGenerator {
    match method {
        Method::Iterative => &ITERATIVE,
        Method::Memoized => &MEMOIZED,
    }
}

/// Convert an externally supplied signed index into a sequence index.
pub fn fibonacci_index(value: &BigInt) -> Result<u64, CoreError> {
    if value.sign() == Sign::Minus {
        return Err(CoreError::InvalidArgument(format!(
            "Fibonacci index must be non-negative, got {value}"
        )));
    }
    value.to_u64().ok_or_else(|| {
        CoreError::InvalidArgument(format!("Fibonacci index {value} is too large"))
    })
}
