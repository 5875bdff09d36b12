//! Memoized recursive Fibonacci generator.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::generator::FibonacciGenerator;

/// Largest gap between the highest cached index and a recursive request.
///
/// Bounds recursion depth so large indices cannot exhaust the stack.
const MAX_RECURSION_SPAN: u64 = 512;

/// Memoized generator. Every call owns a fresh cache seeded with
/// F(0) = 0 and F(1) = 1; nothing survives between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedGenerator;

impl MemoizedGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FibonacciGenerator for MemoizedGenerator {
    fn generate(&self, n: u64) -> BigUint {
        let mut memo = Memo::new();
        let mut checkpoint = MAX_RECURSION_SPAN;
        while checkpoint < n {
            memo.fib(checkpoint);
            checkpoint += MAX_RECURSION_SPAN;
        }
        memo.fib(n)
    }

    fn name(&self) -> &'static str {
        "Memoized"
    }
}

/// Cache scoped to one top-level `generate` call.
struct Memo {
    table: HashMap<u64, BigUint>,
}

impl Memo {
    fn new() -> Self {
        let mut table = HashMap::new();
        table.insert(0, BigUint::zero());
        table.insert(1, BigUint::one());
        Self { table }
    }

    fn fib(&mut self, n: u64) -> BigUint {
        if let Some(value) = self.table.get(&n) {
            return value.clone();
        }
        let value = self.fib(n - 1) + self.fib(n - 2);
        self.table.insert(n, value.clone());
        value
    }
}
