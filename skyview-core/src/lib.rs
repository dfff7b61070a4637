//! Numeric primitives shared by the SkyView crates.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector3`] | [`Vector3`] algebra for ENU and device-frame directions |
//! | [`quaternion`] | [`Quaternion`] normalization, Hamilton product, vector rotation |
//! | [`angle`] | Wrapping into `[0, 2π)` / `[0, 24h)`, degree/radian conversion |
//! | [`math`] | `libm` wrappers (`fmod`, clamped `asin`) |
//! | [`constants`] | Epochs and angular constants |
//!
//! # Features
//!
//! - **`serde`**: derives `Serialize`/`Deserialize` for [`Vector3`] and [`Quaternion`].

pub mod angle;
pub mod constants;
pub mod math;
pub mod quaternion;
pub mod vector3;

pub use quaternion::Quaternion;
pub use vector3::Vector3;
