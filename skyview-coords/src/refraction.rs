//! Atmospheric refraction near the horizon.
//!
//! Light from a star is bent downward through the atmosphere, so the star
//! appears higher than its geometric altitude. The correction used here is
//! Bennett's (1982) empirical formula for apparent-from-true altitude,
//!
//! ```text
//! R = 1 / tan(h + 7.31 / (h + 4.4))    (arcminutes, h in degrees)
//! ```
//!
//! which is about 34′ at the horizon and falls to well under 1′ above 45°.
//! The formula is not meaningful below the horizon region, so altitudes below
//! −1° pass through unchanged.

use skyview_core::angle::{deg_to_rad, rad_to_deg};

/// Altitudes below this (degrees) are not refracted.
pub const REFRACTION_CUTOFF_DEG: f64 = -1.0;

/// Refraction correction in degrees for a geometric altitude in degrees.
pub fn refraction_deg(alt_deg: f64) -> f64 {
    let arg = deg_to_rad(alt_deg + 7.31 / (alt_deg + 4.4));
    (1.0 / libm::tan(arg)) / 60.0
}

/// Returns the apparent altitude (radians) for a geometric altitude (radians).
///
/// ```
/// use skyview_coords::apply_refraction;
///
/// let alt = 5.0_f64.to_radians();
/// assert!(apply_refraction(alt) > alt);
///
/// let below = (-2.0_f64).to_radians();
/// assert_eq!(apply_refraction(below), below);
/// ```
pub fn apply_refraction(alt_rad: f64) -> f64 {
    let alt_deg = rad_to_deg(alt_rad);
    if alt_deg < REFRACTION_CUTOFF_DEG {
        return alt_rad;
    }
    alt_rad + deg_to_rad(refraction_deg(alt_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raises_low_altitudes() {
        let mut alt_deg = 0.0;
        while alt_deg <= 10.0 {
            let alt = deg_to_rad(alt_deg);
            assert!(
                apply_refraction(alt) > alt,
                "refraction should raise alt {}°",
                alt_deg
            );
            alt_deg += 0.5;
        }
    }

    #[test]
    fn test_below_cutoff_unchanged() {
        for alt_deg in [-1.0001, -5.0, -45.0, -90.0] {
            let alt = deg_to_rad(alt_deg);
            assert_eq!(apply_refraction(alt), alt);
        }
    }

    #[test]
    fn test_cutoff_boundary_is_refracted() {
        let alt = deg_to_rad(-0.5);
        assert!(apply_refraction(alt) > alt);
    }

    #[test]
    fn test_horizon_refraction_about_half_degree() {
        let r = refraction_deg(0.0);
        assert!(r > 0.5 && r < 0.65, "horizon refraction {}°", r);
    }

    #[test]
    fn test_decreases_with_altitude() {
        let mut previous = refraction_deg(0.0);
        for alt_deg in [5.0, 10.0, 20.0, 45.0, 70.0] {
            let r = refraction_deg(alt_deg);
            assert!(r < previous, "refraction should shrink: {}° at {}°", r, alt_deg);
            previous = r;
        }
    }

    #[test]
    fn test_vanishes_near_zenith() {
        assert!(refraction_deg(45.0) < 0.02);
        assert!(refraction_deg(90.0).abs() < 1e-4);
        let zenith = deg_to_rad(89.9);
        assert!((apply_refraction(zenith) - zenith).abs() < deg_to_rad(1e-4));
    }
}
