//! Integer division with an explicit rounding rule.
//!
//! Used to reduce nanosecond and microsecond epoch counts to milliseconds
//! without a floating-point round trip.

use tempo_model::SubMillisRounding;

/// Divides `value` by a positive `divisor`, rounding per `mode`.
pub(crate) fn divide_rounded(value: i64, divisor: i64, mode: SubMillisRounding) -> i64 {
    debug_assert!(divisor > 0);

    let floor = value.div_euclid(divisor);
    // Always in 0..divisor, so doubling cannot overflow for the divisors used here.
    let remainder = value.rem_euclid(divisor);
    let twice = remainder * 2;

    match mode {
        SubMillisRounding::Floor => floor,
        SubMillisRounding::Truncate => value / divisor,
        SubMillisRounding::HalfAwayFromZero => {
            if twice > divisor || (twice == divisor && value > 0) {
                floor + 1
            } else {
                floor
            }
        }
        SubMillisRounding::HalfEven => {
            if twice > divisor || (twice == divisor && floor % 2 != 0) {
                floor + 1
            } else {
                floor
            }
        }
    }
}
