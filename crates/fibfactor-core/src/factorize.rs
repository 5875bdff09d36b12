//! Deadline-bounded prime factorization by trial division.
//!
//! Trial division is O(sqrt(n)) in the worst case (n prime), which is
//! hopeless for inputs with large prime factors. Every iteration of the
//! division loop polls a [`Deadline`], turning an unbounded run into a
//! [`CoreError::TimeoutExceeded`].
//!
//! Inputs that fit in a `u64` are factored in native arithmetic. Larger
//! inputs use `BigUint` arithmetic until the remaining cofactor fits in
//! a `u64`, then finish natively from the current candidate.

use std::time::Duration;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::deadline::Deadline;
use crate::error::CoreError;

/// Decompose `n` into its prime factors, ascending, with multiplicity.
///
/// `n == 0` and `n == 1` yield an empty list. The only error is
/// [`CoreError::TimeoutExceeded`].
///
/// # Example
/// ```
/// use std::time::Duration;
/// use num_bigint::BigUint;
/// use fibfactor_core::factorize::prime_factors;
///
/// let factors = prime_factors(&BigUint::from(60u32), Duration::from_secs(2)).unwrap();
/// assert_eq!(factors, vec![2u32, 2, 3, 5].into_iter().map(BigUint::from).collect::<Vec<_>>());
/// ```
pub fn prime_factors(n: &BigUint, budget: Duration) -> Result<Vec<BigUint>, CoreError> {
    if n.is_zero() {
        return Ok(Vec::new());
    }

    let deadline = Deadline::after(budget);
    tracing::debug!(bits = n.bits(), ?budget, "starting trial division");

    let result = match n.to_u64() {
        Some(small) => trial_division_u64(small, 2, &deadline)
            .map(|factors| factors.into_iter().map(BigUint::from).collect()),
        None => trial_division_big(n.clone(), &deadline),
    };

    match &result {
        Ok(factors) => tracing::debug!(
            count = factors.len(),
            elapsed = ?deadline.elapsed(),
            "factorization complete"
        ),
        Err(e) => tracing::info!(error = %e, "factorization aborted"),
    }
    result
}

/// [`prime_factors`] for machine-word inputs.
pub fn prime_factors_u64(n: u64, budget: Duration) -> Result<Vec<u64>, CoreError> {
    trial_division_u64(n, 2, &Deadline::after(budget))
}

/// Whether `n` is prime, by plain trial division.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3u64;
    while u128::from(divisor) * u128::from(divisor) <= u128::from(n) {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Next candidate: 2, then odd numbers only.
#[inline]
fn step(divisor: u64) -> u64 {
    if divisor == 2 {
        3
    } else {
        divisor + 2
    }
}

/// Trial division starting at `divisor`. Every candidate below
/// `divisor` must already have been divided out of `n`.
fn trial_division_u64(
    mut n: u64,
    mut divisor: u64,
    deadline: &Deadline,
) -> Result<Vec<u64>, CoreError> {
    let mut factors = Vec::new();
    while u128::from(divisor) * u128::from(divisor) <= u128::from(n) {
        deadline.check()?;
        if n % divisor == 0 {
            factors.push(divisor);
            n /= divisor;
        } else {
            divisor = step(divisor);
        }
    }
    if n > 1 {
        factors.push(n);
    }
    Ok(factors)
}

fn trial_division_big(mut n: BigUint, deadline: &Deadline) -> Result<Vec<BigUint>, CoreError> {
    let mut factors = Vec::new();
    let mut divisor = BigUint::from(2u32);
    let two = BigUint::from(2u32);

    while &divisor * &divisor <= n {
        deadline.check()?;
        if (&n % &divisor).is_zero() {
            n /= &divisor;
            factors.push(divisor.clone());

            if let Some(small) = n.to_u64() {
                // divisor <= sqrt(previous n), far below u64::MAX
                let start = divisor.to_u64().unwrap_or(u64::MAX);
                let rest = trial_division_u64(small, start, deadline)?;
                factors.extend(rest.into_iter().map(BigUint::from));
                return Ok(factors);
            }
        } else if divisor == two {
            divisor += 1u32;
        } else {
            divisor += 2u32;
        }
    }
    if n > BigUint::from(1u32) {
        factors.push(n);
    }
    Ok(factors)
}
