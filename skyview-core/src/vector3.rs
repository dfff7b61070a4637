//! 3D Cartesian vectors for the projection pipeline.
//!
//! A star's horizontal position (altitude/azimuth) becomes a unit vector in the
//! observer's local East-North-Up frame, gets rotated into the device frame,
//! and is finally divided through by its forward component to land on the
//! screen. All of that happens on [`Vector3`].
//!
//! ```
//! use skyview_core::Vector3;
//!
//! let east = Vector3::x_axis();
//! let north = Vector3::y_axis();
//!
//! // Perpendicular: dot product is zero
//! assert_eq!(east.dot(&north), 0.0);
//!
//! // East × North = Up (right-hand rule)
//! assert_eq!(east.cross(&north), Vector3::z_axis());
//! ```
//!
//! # Degenerate Input
//!
//! [`normalize`](Vector3::normalize) returns the zero vector for a zero-length
//! input instead of dividing by zero, so NaN never enters the pipeline from a
//! degenerate direction.

use std::fmt;

/// A 3D Cartesian vector.
///
/// In the East-North-Up frame the components are:
/// - `x`: toward local east
/// - `y`: toward local north
/// - `z`: toward the zenith
///
/// In the device frame `z` is the camera's forward axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the Euclidean length of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// The zero vector normalizes to itself (avoids NaN).
    ///
    /// ```
    /// use skyview_core::Vector3;
    ///
    /// assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// ```
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::zeros()
        } else {
            *self * (1.0 / mag)
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product, direction given by the right-hand rule.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
