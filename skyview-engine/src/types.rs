//! Plain data carried across the engine boundary.
//!
//! With the `serde` feature these use the camelCase field names and defaults a
//! host binding expects (`fovDeg`, `applyRefraction`, `elevationM`, ...).

use skyview_core::Quaternion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field of view substituted for a missing or non-positive value.
pub const DEFAULT_FOV_DEG: f64 = 60.0;

/// Camera and screen parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EngineConfig {
    /// Horizontal field of view in degrees.
    pub fov_deg: f64,
    /// Screen width in pixels.
    pub width: i32,
    /// Screen height in pixels.
    pub height: i32,
    pub apply_refraction: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov_deg: DEFAULT_FOV_DEG,
            width: 0,
            height: 0,
            apply_refraction: true,
        }
    }
}

impl EngineConfig {
    pub fn new(fov_deg: f64, width: i32, height: i32, apply_refraction: bool) -> Self {
        Self {
            fov_deg,
            width,
            height,
            apply_refraction,
        }
    }

    /// Both screen dimensions are positive.
    pub fn has_screen(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Observer position on the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive.
    pub lat_deg: f64,
    /// Longitude in degrees, east positive.
    pub lon_deg: f64,
    /// Height above sea level in meters. Stored but not used by any transform.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation_m: f64,
}

impl Observer {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            elevation_m: 0.0,
        }
    }

    pub fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = elevation_m;
        self
    }
}

/// Raw device orientation quaternion, any magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The unit rotation this pose describes (identity for a zero pose).
    pub fn orientation(&self) -> Quaternion {
        Quaternion::from_raw(self.w, self.x, self.y, self.z)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StarIn {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub mag: f64,
    /// Catalog identifier (Hipparcos number), 0 when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hip: i32,
}

impl StarIn {
    pub fn new(ra_deg: f64, dec_deg: f64, mag: f64, hip: i32) -> Self {
        Self {
            ra_deg,
            dec_deg,
            mag,
            hip,
        }
    }
}

/// Per-star result of the last computed frame, parallel to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StarOut {
    pub x: f32,
    pub y: f32,
    pub mag: f32,
    pub hip: i32,
    pub visible: bool,
}

/// A projected position in pixels, origin at the top-left of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}
