//! Iterative Fibonacci generator.

use num_bigint::BigUint;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::generator::FibonacciGenerator;

/// Iterative generator advancing a (previous, current) pair n times.
///
/// Indices up to 93 are served from [`FIB_TABLE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeGenerator;

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FibonacciGenerator for IterativeGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn generate(&self, n: u64) -> BigUint {
        if n <= MAX_FIB_U64 {
            return BigUint::from(FIB_TABLE[n as usize]);
        }

        // Resume from F(92), F(93) instead of starting over at 0, 1.
        let mut a = BigUint::from(FIB_TABLE[(MAX_FIB_U64 - 1) as usize]);
        let mut b = BigUint::from(FIB_TABLE[MAX_FIB_U64 as usize]);
        for _ in (MAX_FIB_U64 - 1)..n {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        a
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
