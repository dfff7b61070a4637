//! Equatorial (RA/Dec) to horizontal (altitude/azimuth) conversion.
//!
//! Given the local sidereal time, a star's hour angle is `H = LST − α`. The
//! standard spherical-triangle relations then give
//!
//! ```text
//! sin(alt) = sin δ sin φ + cos δ cos φ cos H
//! tan(az)  = −sin H cos δ / (sin δ cos φ − cos δ sin φ cos H)
//! ```
//!
//! Azimuth is measured from north through east and reported in `[0, 2π)`.

use skyview_core::angle::{deg_to_rad, rad_to_deg, wrap_0_2pi};
use skyview_core::math::asin_clamped;
use std::fmt;

/// Altitude and azimuth in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Horizontal {
    pub alt_rad: f64,
    pub az_rad: f64,
}

impl Horizontal {
    pub fn new(alt_rad: f64, az_rad: f64) -> Self {
        Self { alt_rad, az_rad }
    }

    pub fn altitude_deg(&self) -> f64 {
        rad_to_deg(self.alt_rad)
    }

    pub fn azimuth_deg(&self) -> f64 {
        rad_to_deg(self.az_rad)
    }

    pub fn is_above_horizon(&self) -> bool {
        self.alt_rad > 0.0
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alt {:.4}° Az {:.4}°",
            self.altitude_deg(),
            self.azimuth_deg()
        )
    }
}

/// Converts a star's equatorial position to horizontal coordinates.
///
/// `lst_rad` is the observer's local sidereal time; `lat_deg` their geodetic
/// latitude. The `asin` argument is clamped to `[−1, 1]`.
///
/// ```
/// use skyview_coords::equatorial_to_horizontal;
///
/// // A star on the meridian with dec == lat sits at the zenith.
/// let lst = 40.0_f64.to_radians();
/// let h = equatorial_to_horizontal(40.0, 50.0, lst, 50.0);
/// assert!((h.altitude_deg() - 90.0).abs() < 1e-3);
/// ```
pub fn equatorial_to_horizontal(ra_deg: f64, dec_deg: f64, lst_rad: f64, lat_deg: f64) -> Horizontal {
    let dec = deg_to_rad(dec_deg);
    let lat = deg_to_rad(lat_deg);
    let hour_angle = lst_rad - deg_to_rad(ra_deg);

    let (sin_dec, cos_dec) = libm::sincos(dec);
    let (sin_lat, cos_lat) = libm::sincos(lat);
    let (sin_h, cos_h) = libm::sincos(hour_angle);

    let alt = asin_clamped(sin_dec * sin_lat + cos_dec * cos_lat * cos_h);

    let y = -sin_h * cos_dec;
    let x = sin_dec * cos_lat - cos_dec * sin_lat * cos_h;
    let az = wrap_0_2pi(libm::atan2(y, x));

    Horizontal::new(alt, az)
}
