//! Time conversions for the SkyView frame pipeline.
//!
//! Frame timestamps come in as Unix milliseconds. [`julian`] turns them into a
//! Julian Date and [`sidereal`] turns that into the Greenwich or local sidereal
//! angle needed to place the celestial sphere over an observer.
//!
//! ```
//! use skyview_time::{local_sidereal_time_rad, unix_millis_to_julian_date};
//!
//! let jd = unix_millis_to_julian_date(1_700_000_000_000);
//! let lst = local_sidereal_time_rad(jd, -122.4194);
//! assert!((0.0..std::f64::consts::TAU).contains(&lst));
//! ```

pub mod julian;
pub mod sidereal;

pub use julian::{unix_millis_to_julian_date, JulianDate};
pub use sidereal::{julian_date_to_gmst_rad, local_sidereal_time_rad, SiderealAngle};
