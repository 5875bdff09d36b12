//! Constants for the generators, the factorizer and the driver.

use std::time::Duration;

/// Default wall-clock budget for one factorization.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(2);

/// Default modulus used to reduce the combined value to a Fibonacci index.
pub const DEFAULT_MODULUS: u64 = 1000;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A computation ran past its time budget.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// The startup self-tests failed.
    pub const ERROR_SELF_TEST: i32 = 3;
    /// Malformed or out-of-domain input.
    pub const ERROR_INVALID_ARGUMENT: i32 = 4;
}
