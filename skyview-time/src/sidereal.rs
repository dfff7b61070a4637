//! Greenwich and local mean sidereal time.
//!
//! Uses the linear GMST approximation
//! `GMST(h) = 18.697374558 + 24.06570982441908 · (JD − 2451545.0)`,
//! good to a fraction of a second over several centuries around J2000 and
//! far cheaper than the full IAU 2006 expression. Results are reduced to a
//! single positive turn.

use crate::julian::JulianDate;
use skyview_core::angle::{deg_to_rad, wrap_0_24h, wrap_0_2pi};
use skyview_core::constants::{HOURS_TO_RAD, J2000_JD, PI};
use std::fmt;

const GMST_AT_J2000_HOURS: f64 = 18.697374558;
const GMST_HOURS_PER_DAY: f64 = 24.06570982441908;

/// A sidereal angle held in radians, always in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiderealAngle {
    radians: f64,
}

impl SiderealAngle {
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians: wrap_0_2pi(radians),
        }
    }

    /// Greenwich mean sidereal time at `jd`.
    pub fn greenwich(jd: JulianDate) -> Self {
        Self {
            radians: julian_date_to_gmst_rad(jd.to_f64()),
        }
    }

    /// Local mean sidereal time at `jd` for an observer at `lon_deg` east.
    pub fn local(jd: JulianDate, lon_deg: f64) -> Self {
        Self {
            radians: local_sidereal_time_rad(jd.to_f64(), lon_deg),
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn hours(&self) -> f64 {
        self.radians * 12.0 / PI
    }

    pub fn degrees(&self) -> f64 {
        self.hours() * 15.0
    }
}

impl fmt::Display for SiderealAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}h", self.hours())
    }
}

/// Greenwich mean sidereal time in radians, in `[0, 2π)`.
pub fn julian_date_to_gmst_rad(jd: f64) -> f64 {
    let days_since_j2000 = jd - J2000_JD;
    let hours = wrap_0_24h(GMST_AT_J2000_HOURS + GMST_HOURS_PER_DAY * days_since_j2000);
    hours * HOURS_TO_RAD
}

/// Local mean sidereal time in radians, in `[0, 2π)`.
///
/// `lon_deg` is east-positive and may be any value, including negative or
/// beyond a full turn.
pub fn local_sidereal_time_rad(jd: f64, lon_deg: f64) -> f64 {
    wrap_0_2pi(julian_date_to_gmst_rad(jd) + deg_to_rad(lon_deg))
}
