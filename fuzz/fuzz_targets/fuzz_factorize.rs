#![no_main]

use libfuzzer_sys::fuzz_target;
use std::time::Duration;

use num_bigint::BigUint;
use num_traits::Zero;

use fibfactor_core::{is_prime, prime_factors};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 16 {
        return;
    }
    let n = BigUint::from_bytes_le(data);
    let Ok(factors) = prime_factors(&n, Duration::from_millis(50)) else {
        return;
    };
    if n.is_zero() {
        assert!(factors.is_empty());
        return;
    }

    assert_eq!(factors.iter().product::<BigUint>(), n);
    assert!(factors.windows(2).all(|w| w[0] <= w[1]));
    for f in &factors {
        if let Ok(small) = u64::try_from(f) {
            if small < 1 << 40 {
                assert!(is_prime(small), "{small} is not prime");
            }
        }
    }
});
