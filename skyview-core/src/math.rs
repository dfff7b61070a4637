#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Clamps `x` into `[-1, 1]` before `asin` so rounding past the poles of the
/// domain cannot produce NaN.
#[inline]
pub fn asin_clamped(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_fmod_keeps_sign_of_dividend() {
        assert_eq!(fmod(370.0, 360.0), 10.0);
        assert_eq!(fmod(-1.0, 360.0), -1.0);
    }

    #[test]
    fn test_asin_clamped_overshoot() {
        assert_eq!(asin_clamped(1.0 + 1e-12), HALF_PI);
        assert_eq!(asin_clamped(-1.0 - 1e-12), -HALF_PI);
        assert!(!asin_clamped(1.5).is_nan());
    }
}
