//! Angle wrapping and unit conversion.
//!
//! The per-frame pipeline only ever needs cyclic quantities in their positive
//! range:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Sidereal time, azimuth | [0, 2pi) | [`wrap_0_2pi`] |
//! | Sidereal time in hours | [0, 24) | [`wrap_0_24h`] |
//!
//! # Algorithm Notes
//!
//! Wrapping uses `libm::fmod` (via [`crate::math::fmod`]), which keeps the sign
//! of the dividend, and then adds the modulus once if the result is negative.
//! A tiny negative remainder plus the modulus rounds to the modulus itself, so
//! that case folds back to zero to keep the upper bound exclusive.
//!
//! ```
//! use skyview_core::angle::wrap_0_2pi;
//! use std::f64::consts::PI;
//!
//! let az = wrap_0_2pi(-0.5);
//! assert!(az > 0.0 && az < 2.0 * PI);
//! ```

use crate::constants::{DEG_TO_RAD, HOURS_PER_DAY, RAD_TO_DEG, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [0, 2pi) radians.
///
/// ```
/// use skyview_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(2.0 * PI + 1.0);
/// assert!((x - 1.0).abs() < 1e-12);
///
/// let y = wrap_0_2pi(-PI / 2.0);
/// assert!((y - 1.5 * PI).abs() < 1e-12);
/// ```
pub fn wrap_0_2pi(x: f64) -> f64 {
    wrap_positive(fmod(x, TWOPI), TWOPI)
}

/// Wraps a time-of-day in hours to [0, 24).
pub fn wrap_0_24h(hours: f64) -> f64 {
    wrap_positive(fmod(hours, HOURS_PER_DAY), HOURS_PER_DAY)
}

#[inline]
fn wrap_positive(remainder: f64, modulus: f64) -> f64 {
    if remainder >= 0.0 {
        return remainder;
    }
    let w = remainder + modulus;
    if w >= modulus {
        0.0
    } else {
        w
    }
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_wrap_0_2pi_ranges() {
        for x in [-7.0, -TWOPI, -1e-9, 0.0, 1.0, TWOPI, 13.0, 1e6] {
            let w = wrap_0_2pi(x);
            assert!((0.0..TWOPI).contains(&w), "wrap_0_2pi({}) = {}", x, w);
        }
    }

    #[test]
    fn test_wrap_0_2pi_negative_adds_one_turn() {
        let w = wrap_0_2pi(-PI / 2.0);
        assert!((w - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_negative_wraps_below_modulus() {
        for x in [-1e-300, -f64::MIN_POSITIVE, -1e-17] {
            let w = wrap_0_2pi(x);
            assert!((0.0..TWOPI).contains(&w), "wrap_0_2pi({:e}) = {}", x, w);

            let h = wrap_0_24h(x);
            assert!((0.0..HOURS_PER_DAY).contains(&h), "wrap_0_24h({:e}) = {}", x, h);
        }
        assert_eq!(wrap_0_2pi(-1e-300), 0.0);
    }

    #[test]
    fn test_wrap_0_24h() {
        assert_eq!(wrap_0_24h(25.0), 1.0);
        assert_eq!(wrap_0_24h(-1.0), 23.0);
        assert_eq!(wrap_0_24h(0.0), 0.0);
        assert!((0.0..24.0).contains(&wrap_0_24h(-48.5)));
    }

    #[test]
    fn test_degree_radian_conversion() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-15);
        assert!((rad_to_deg(PI) - 180.0).abs() < 1e-12);
    }
}
