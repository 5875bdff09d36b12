#![no_main]

use libfuzzer_sys::fuzz_target;

use fibfactor_core::{fibonacci, fibonacci_memoized};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First 2 bytes as n, capped for speed
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 5_000;

    assert_eq!(fibonacci(n), fibonacci_memoized(n), "F({n}) mismatch");
});
