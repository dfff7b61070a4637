//! Real-time star projection for a device camera view.
//!
//! Given a star catalog, an observer on the Earth, a device orientation and a
//! timestamp, the engine computes where each star falls on the screen and
//! packs the visible ones into a double-buffered `f32` array a renderer can
//! read without copying.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`engine`] | [`Engine`]: the per-frame pipeline |
//! | [`host`] | [`SkyHost`] boundary used by host runtimes, [`SkyHostEngine`] |
//! | [`frame_buffer`] | [`FrameBuffer`]: fixed-capacity double buffer |
//! | [`projection`] | alt/az → ENU → device → screen |
//! | [`catalog`] | Record and packed-`f32` catalog payloads |
//! | [`types`] | Config, observer, pose and star records |
//! | [`error`] | [`EngineError`] |
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` on the boundary types, camelCase.
//! - **`cli`**: the `skyview` binary.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod frame_buffer;
pub mod host;
pub mod projection;
pub mod types;

pub use catalog::{StarPayload, CATALOG_STRIDE};
pub use engine::{Engine, DEFAULT_MAX_STARS, FRAME_STRIDE};
pub use error::{EngineError, EngineResult};
pub use frame_buffer::FrameBuffer;
pub use host::{SkyHost, SkyHostEngine};
pub use types::{EngineConfig, Observer, Pose, ScreenPoint, StarIn, StarOut, DEFAULT_FOV_DEG};
