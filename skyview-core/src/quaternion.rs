//! Unit quaternions for device orientation.
//!
//! The device pose arrives as four raw numbers `(w, x, y, z)` straight from a
//! sensor API, and is not guaranteed to be unit length. [`Quaternion::from_raw`]
//! normalizes it once per frame; a zero-magnitude pose becomes the identity
//! rotation rather than a NaN-filled one.
//!
//! # Rotating a Vector
//!
//! [`rotate`](Quaternion::rotate) uses the sandwich product `q · (0, v) · q⁻¹`
//! and keeps the vector part of the result. This is an active rotation: a
//! positive rotation of 90° about Z takes `[1, 0, 0]` to `[0, 1, 0]`.
//!
//! ```
//! use skyview_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_4;
//!
//! // 90° about Z
//! let q = Quaternion::from_raw(FRAC_PI_4.cos(), 0.0, 0.0, FRAC_PI_4.sin());
//! let v = q.rotate(&Vector3::x_axis());
//! assert!((v.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Composition
//!
//! [`Mul`](std::ops::Mul) is the Hamilton product, which does not commute:
//! `(a * b).rotate(v)` applies `b` first, then `a`.

use crate::Vector3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Creates a quaternion from components without normalizing.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation `(1, 0, 0, 0)`.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a unit quaternion from raw, possibly non-unit components.
    ///
    /// Zero magnitude yields [`identity`](Self::identity).
    pub fn from_raw(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self::new(w, x, y, z).normalized()
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns this quaternion scaled to unit length, or the identity if it has
    /// zero magnitude.
    pub fn normalized(&self) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return Self::identity();
        }
        Self::new(self.w / len, self.x / len, self.y / len, self.z / len)
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Conjugate, re-normalized so accumulated drift in `self` does not leak
    /// into the rotation.
    pub fn inverse(&self) -> Self {
        self.conjugate().normalized()
    }

    /// Rotates `v` by this quaternion via `q · (0, v) · q⁻¹`.
    pub fn rotate(&self, v: &Vector3) -> Vector3 {
        let p = Self::new(0.0, v.x, v.y, v.z);
        let r = *self * p * self.inverse();
        Vector3::new(r.x, r.y, r.z)
    }
}

/// Hamilton product.
impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, o: Self) -> Self {
        Self::new(
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y - self.x * o.z + self.y * o.w + self.z * o.x,
            self.w * o.z + self.x * o.y - self.y * o.x + self.z * o.w,
        )
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:.9}, {:.9}, {:.9}, {:.9})",
            self.w, self.x, self.y, self.z
        )
    }
}
