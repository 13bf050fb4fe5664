//! Elapsed-time formatting.

use std::time::Duration;

const MICROSECOND: Duration = Duration::from_micros(1);
const MILLISECOND: Duration = Duration::from_millis(1);
const SECOND: Duration = Duration::from_secs(1);

/// Formats an elapsed duration with two fractional digits in the largest unit
/// that keeps the value at or above one.
///
/// | elapsed            | unit |
/// |--------------------|------|
/// | `< 1µs`            | `ns` |
/// | `1µs ..< 1ms`      | `µs` |
/// | `1ms ..< 1s`       | `ms` |
/// | `>= 1s`            | `s`  |
///
/// A value sitting exactly on a boundary uses the coarser unit, so one
/// millisecond renders as `1.00ms`.
pub fn format_duration(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos() as f64;

    if elapsed < MICROSECOND {
        format!("{:.2}ns", nanos)
    } else if elapsed < MILLISECOND {
        format!("{:.2}µs", nanos / 1_000.0)
    } else if elapsed < SECOND {
        format!("{:.2}ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}
