/// Integer division rounding toward negative infinity.
///
/// Returns `None` on division by zero or overflow (`i64::MIN // -1`).
///
/// ```
/// use spy::util::num::floor_div_i64;
///
/// assert_eq!(floor_div_i64(7, 2), Some(3));
/// assert_eq!(floor_div_i64(-7, 2), Some(-4));
/// assert_eq!(floor_div_i64(7, -2), Some(-4));
/// assert_eq!(floor_div_i64(1, 0), None);
/// ```
#[must_use]
pub const fn floor_div_i64(a: i64, b: i64) -> Option<i64> {
    let Some(q) = a.checked_div(b) else {
        return None;
    };
    if a % b != 0 && ((a < 0) != (b < 0)) { Some(q - 1) } else { Some(q) }
}

/// Integer remainder whose sign follows the divisor.
///
/// ```
/// use spy::util::num::floor_mod_i64;
///
/// assert_eq!(floor_mod_i64(7, 3), Some(1));
/// assert_eq!(floor_mod_i64(-7, 3), Some(2));
/// assert_eq!(floor_mod_i64(7, -3), Some(-2));
/// ```
#[must_use]
pub const fn floor_mod_i64(a: i64, b: i64) -> Option<i64> {
    let Some(r) = a.checked_rem(b) else {
        return None;
    };
    if r != 0 && ((r < 0) != (b < 0)) { Some(r + b) } else { Some(r) }
}

/// Floating-point remainder whose sign follows the divisor.
///
/// The caller is responsible for rejecting a zero divisor.
#[must_use]
pub fn floor_mod_f64(a: f64, b: f64) -> f64 {
    let m = a % b;
    if m == 0.0 {
        0.0_f64.copysign(b)
    } else if (b < 0.0) != (m < 0.0) {
        m + b
    } else {
        m
    }
}

/// Floating-point division rounding toward negative infinity.
///
/// Computed from the remainder so that `a == b * floor_div_f64(a, b) +
/// floor_mod_f64(a, b)` holds as closely as floating point allows. The caller
/// is responsible for rejecting a zero divisor.
///
/// ```
/// use spy::util::num::floor_div_f64;
///
/// assert_eq!(floor_div_f64(5.0, 15.0), 0.0);
/// assert_eq!(floor_div_f64(-7.0, 2.0), -4.0);
/// ```
#[must_use]
pub fn floor_div_f64(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && ((b < 0.0) != (m < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
