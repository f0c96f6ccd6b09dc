//! Timestamp helpers.

use chrono::{DateTime, Duration, Utc};
use num_traits::ToPrimitive;

/// Timestamp at fraction `t` of the way from `start` to `end`, with millisecond precision.
///
/// `t` outside of `[0, 1]` extrapolates. If the result is not representable, the nearest of the two given
/// timestamps is returned. A NaN `t` returns `start`.
pub fn interpolate_timestamp(start: DateTime<Utc>, end: DateTime<Utc>, t: f64) -> DateTime<Utc> {
    let span = end.signed_duration_since(start).num_milliseconds() as f64;

    (span * t)
        .round()
        .to_i64()
        .and_then(Duration::try_milliseconds)
        .and_then(|offset| start.checked_add_signed(offset))
        .unwrap_or(if t >= 0.5 { end } else { start })
}

/// Fraction of the way `timestamp` is from `start` to `end`. Zero if `start` and `end` coincide.
pub fn time_fraction(start: DateTime<Utc>, end: DateTime<Utc>, timestamp: DateTime<Utc>) -> f64 {
    let span = end.signed_duration_since(start).num_milliseconds();
    if span == 0 {
        return 0.0;
    }

    timestamp.signed_duration_since(start).num_milliseconds() as f64 / span as f64
}
