//! Cooperative wall-clock deadline.

use std::time::{Duration, Instant};

use crate::error::CoreError;

/// A deadline sampled from the monotonic clock.
///
/// Loops poll [`Deadline::check`] at iteration boundaries; nothing
/// interrupts them from outside.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use fibfactor_core::deadline::Deadline;
///
/// let deadline = Deadline::after(Duration::from_secs(60));
/// assert!(!deadline.is_expired());
/// assert!(deadline.check().is_ok());
///
/// let expired = Deadline::after(Duration::ZERO);
/// std::thread::sleep(Duration::from_millis(1));
/// assert!(expired.check().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Start a deadline that expires `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// The budget this deadline was created with.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time elapsed since the deadline was started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the budget has been exceeded.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed() > self.budget
    }

    /// Return `TimeoutExceeded` once the budget has been exceeded.
    #[inline]
    pub fn check(&self) -> Result<(), CoreError> {
        let elapsed = self.elapsed();
        if elapsed > self.budget {
            return Err(CoreError::TimeoutExceeded {
                budget: self.budget,
                elapsed,
            });
        }
        Ok(())
    }
}
