use skyview_core::constants::{J2000_JD, MILLISECONDS_PER_DAY_F64, UNIX_EPOCH_JD};
use std::fmt;

/// A Julian Date as a single continuous day count.
///
/// Frame timestamps are milliseconds since the Unix epoch; the conversion is a
/// plain linear map with no leap-second handling, which is accurate enough for
/// placing stars on a phone screen.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd: f64,
}

impl JulianDate {
    pub fn new(jd: f64) -> Self {
        Self { jd }
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD)
    }

    pub fn from_unix_millis(unix_ms: i64) -> Self {
        Self::new(unix_millis_to_julian_date(unix_ms))
    }

    pub fn to_f64(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since J2000.0 (negative before it).
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JD
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd + days)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.jd)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::new(jd)
    }
}

/// Converts milliseconds since 1970-01-01T00:00:00Z to a Julian Date.
///
/// ```
/// use skyview_time::unix_millis_to_julian_date;
///
/// assert_eq!(unix_millis_to_julian_date(0), 2440587.5);
/// assert_eq!(unix_millis_to_julian_date(86_400_000), 2440588.5);
/// ```
pub fn unix_millis_to_julian_date(unix_ms: i64) -> f64 {
    unix_ms as f64 / MILLISECONDS_PER_DAY_F64 + UNIX_EPOCH_JD
}
