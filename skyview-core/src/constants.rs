pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MILLISECONDS_PER_DAY_F64: f64 = 86_400_000.0;

pub const HOURS_PER_DAY: f64 = 24.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Radians per sidereal hour (`2π / 24`).
pub const HOURS_TO_RAD: f64 = TWOPI / HOURS_PER_DAY;
