//! Horizontal coordinates for an observer on the ground.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`horizontal`] | [`equatorial_to_horizontal`] and the [`Horizontal`] alt/az pair |
//! | [`refraction`] | [`apply_refraction`], Bennett's low-altitude correction |
//!
//! Both operate on plain numbers; the caller supplies the local sidereal time
//! (see `skyview-time`).

pub mod horizontal;
pub mod refraction;

pub use horizontal::{equatorial_to_horizontal, Horizontal};
pub use refraction::{apply_refraction, refraction_deg, REFRACTION_CUTOFF_DEG};
