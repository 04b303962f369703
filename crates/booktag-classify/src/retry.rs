//! Retry schedule for transient service failures.

use std::time::Duration;

/// Delay before the next attempt after `retry` prior failed attempts.
///
/// Doubles from `base` (`base`, 2×`base`, 4×`base`, …) and is capped at
/// `max`. Pure function so the schedule is testable without any I/O.
pub fn retry_delay(retry: u32, base: Duration, max: Duration) -> Duration {
    // Past 2^16 the cap has long since taken over; bounding the shift
    // keeps the multiplier in range.
    let factor = 1u32 << retry.min(16);
    base.saturating_mul(factor).min(max)
}
