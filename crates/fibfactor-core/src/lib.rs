//! # fibfactor-core
//!
//! Fibonacci generators (iterative and memoized) and a trial-division
//! prime factorizer bounded by a wall-clock deadline.

pub mod constants;
pub mod deadline;
pub mod error;
pub mod factorize;
pub mod generator;
pub(crate) mod generator_iterative;
pub(crate) mod generator_memoized;

// Re-exports
pub use constants::{exit_codes, DEFAULT_MODULUS, DEFAULT_TIME_BUDGET, FIB_TABLE, MAX_FIB_U64};
pub use deadline::Deadline;
pub use error::CoreError;
pub use factorize::{is_prime, prime_factors, prime_factors_u64};
pub use generator::{fibonacci_index, generator_for, FibonacciGenerator, Method};
pub use generator_iterative::IterativeGenerator;
pub use generator_memoized::MemoizedGenerator;

use num_bigint::BigUint;

/// Compute F(n) iteratively.
///
/// # Example
/// ```
/// assert_eq!(fibfactor_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibfactor_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    IterativeGenerator.generate(n)
}

/// Compute F(n) by memoized recursion with a cache local to this call.
///
/// # Example
/// ```
/// assert_eq!(fibfactor_core::fibonacci_memoized(20).to_string(), "6765");
/// ```
#[must_use]
pub fn fibonacci_memoized(n: u64) -> BigUint {
    MemoizedGenerator.generate(n)
}
