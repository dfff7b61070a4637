//! Horizontal coordinates to screen pixels.
//!
//! 1. [`horizontal_to_enu`]: alt/az → unit vector in the local East-North-Up frame.
//! 2. [`rotate_to_device`]: ENU → device frame via the pose quaternion.
//! 3. [`project_to_screen`]: pinhole projection along the device's +Z axis.
//!
//! The device frame has +X to the right of the screen, +Y up the screen and +Z
//! out of the camera. Screen coordinates have their origin at the top-left, so
//! the projected Y is flipped.

use crate::types::{EngineConfig, ScreenPoint};
use skyview_coords::Horizontal;
use skyview_core::angle::deg_to_rad;
use skyview_core::{Quaternion, Vector3};

/// East = cos(alt)·sin(az), North = cos(alt)·cos(az), Up = sin(alt).
pub fn horizontal_to_enu(horizontal: &Horizontal) -> Vector3 {
    let (sin_alt, cos_alt) = libm::sincos(horizontal.alt_rad);
    let (sin_az, cos_az) = libm::sincos(horizontal.az_rad);
    Vector3::new(cos_alt * sin_az, cos_alt * cos_az, sin_alt)
}

pub fn rotate_to_device(enu: &Vector3, orientation: &Quaternion) -> Vector3 {
    orientation.rotate(enu)
}

/// Focal length in pixels for the configured horizontal field of view.
pub fn focal_length_px(config: &EngineConfig) -> f64 {
    let half_width = config.width as f64 * 0.5;
    half_width / libm::tan(deg_to_rad(config.fov_deg) * 0.5)
}

/// Projects a device-frame direction onto the screen.
///
/// Returns `None` when the direction points behind the camera (`z <= 0`) or
/// lands outside `[0, width] × [0, height]`.
pub fn project_to_screen(device: &Vector3, config: &EngineConfig) -> Option<ScreenPoint> {
    if device.z <= 0.0 {
        return None;
    }

    let focal = focal_length_px(config);
    let ndc_x = (device.x / device.z) * focal;
    let ndc_y = (device.y / device.z) * focal;

    let x = (config.width as f64 * 0.5 + ndc_x) as f32;
    let y = (config.height as f64 * 0.5 - ndc_y) as f32;

    let on_screen =
        x >= 0.0 && x <= config.width as f32 && y >= 0.0 && y <= config.height as f32;
    on_screen.then_some(ScreenPoint { x, y })
}
