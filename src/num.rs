//! Small numeric and logical helpers.

/// Bitwise odd check.
///
/// Two's-complement AND with 1, so negative odd numbers return true.
pub fn is_odd(n: i64) -> bool {
    n & 1 == 1
}

/// Round half away from zero to `precision` decimal digits.
pub fn round_to(d: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (d * factor).round() / factor
}

/// [`round_to`] with the default two digits.
pub fn round2(d: f64) -> f64 {
    round_to(d, 2)
}

/// Returns `expected` when `value` equals it, otherwise `fallback`.
///
/// The match arm deliberately echoes `expected` rather than `value`;
/// the two are equal at that point.
pub fn iff<T: PartialEq>(value: T, expected: T, fallback: T) -> T {
    if value == expected {
        expected
    } else {
        fallback
    }
}
