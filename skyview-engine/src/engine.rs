//! The per-frame orchestrator.
//!
//! [`Engine`] owns the current configuration, observer, catalog and pose, plus
//! the per-star output array and the [`FrameBuffer`]. Each call to
//! [`Engine::compute_frame`] runs the whole pipeline:
//!
//! ```text
//! JD ─► LST ─┐
//!            ├─► alt/az ─► (refraction) ─► ENU ─► device ─► screen ─► pack
//! star ──────┘
//! ```
//!
//! The output array and frame buffer are sized before the frame starts, so the
//! loop itself never allocates.
//!
//! ```
//! use skyview_engine::{Engine, EngineConfig, Observer, Pose, StarIn};
//!
//! let mut engine = Engine::new();
//! engine.set_config(EngineConfig::new(60.0, 1080, 1920, true));
//! engine.set_observer(Observer::new(37.7749, -122.4194));
//! engine.set_stars(&[StarIn::new(0.0, 37.7749, 1.0, 1)]);
//! engine.update_pose(Pose::identity());
//!
//! let visible = engine.compute_frame(skyview_time::unix_millis_to_julian_date(1_700_000_000_000));
//! assert_eq!(engine.frame_buffer().count(), visible);
//! ```

use crate::frame_buffer::FrameBuffer;
use crate::projection::{horizontal_to_enu, project_to_screen, rotate_to_device};
use crate::types::{EngineConfig, Observer, Pose, StarIn, StarOut, DEFAULT_FOV_DEG};
use skyview_coords::{apply_refraction, equatorial_to_horizontal};
use skyview_time::local_sidereal_time_rad;

/// Floats per packed frame record: `x, y, mag, hip`.
pub const FRAME_STRIDE: usize = 4;

/// Frame buffer capacity used by [`Engine::new`].
pub const DEFAULT_MAX_STARS: usize = 10_000;

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    observer: Observer,
    pose: Pose,
    catalog: Vec<StarIn>,
    outputs: Vec<StarOut>,
    frame_buffer: FrameBuffer,
    ready: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_STARS)
    }

    /// Creates an engine whose frame buffer holds at most `max_stars` records.
    ///
    /// The capacity is fixed for the engine's lifetime.
    pub fn with_capacity(max_stars: usize) -> Self {
        let mut frame_buffer = FrameBuffer::new();
        frame_buffer.configure(FRAME_STRIDE, max_stars);
        Self {
            config: EngineConfig::default(),
            observer: Observer::default(),
            pose: Pose::identity(),
            catalog: Vec::new(),
            outputs: Vec::new(),
            frame_buffer,
            ready: false,
        }
    }

    /// Stores the configuration. A non-positive field of view is replaced by
    /// [`DEFAULT_FOV_DEG`]; the engine is ready only with a positive screen size.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
        if self.config.fov_deg <= 0.0 {
            log::warn!(
                "field of view {}° is not positive, using {}°",
                config.fov_deg,
                DEFAULT_FOV_DEG
            );
            self.config.fov_deg = DEFAULT_FOV_DEG;
        }
        self.ready = self.config.has_screen();
        log::debug!(
            "config: fov {}°, screen {}x{}, refraction {}, ready {}",
            self.config.fov_deg,
            self.config.width,
            self.config.height,
            self.config.apply_refraction,
            self.ready
        );
    }

    pub fn set_observer(&mut self, observer: Observer) {
        log::debug!(
            "observer: lat {}°, lon {}°, elevation {} m",
            observer.lat_deg,
            observer.lon_deg,
            observer.elevation_m
        );
        self.observer = observer;
    }

    /// Replaces the catalog and resets the per-star outputs to match it.
    pub fn set_stars(&mut self, stars: &[StarIn]) {
        self.catalog.clear();
        self.catalog.extend_from_slice(stars);
        self.outputs.clear();
        self.outputs.resize(self.catalog.len(), StarOut::default());

        log::debug!("catalog replaced: {} stars", self.catalog.len());
        if self.catalog.len() > self.frame_buffer.capacity() {
            log::warn!(
                "catalog of {} stars exceeds frame capacity {}; visible stars past capacity will not be packed",
                self.catalog.len(),
                self.frame_buffer.capacity()
            );
        }
    }

    /// Stores the raw pose; it is normalized when a frame is computed.
    pub fn update_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Computes one frame at Julian Date `jd` and returns the number of packed
    /// records.
    ///
    /// Returns 0 (after committing an empty frame) when the engine is not
    /// ready or the catalog is empty.
    pub fn compute_frame(&mut self, jd: f64) -> usize {
        if !self.ready || self.catalog.is_empty() {
            self.frame_buffer.commit(0);
            return 0;
        }

        let lst = local_sidereal_time_rad(jd, self.observer.lon_deg);
        let orientation = self.pose.orientation();
        let lat_deg = self.observer.lat_deg;
        let config = self.config;

        let capacity = self.frame_buffer.capacity();
        let records = self.frame_buffer.write_slice();
        let mut packed = 0;

        for (star, out) in self.catalog.iter().zip(self.outputs.iter_mut()) {
            let mut horizontal = equatorial_to_horizontal(star.ra_deg, star.dec_deg, lst, lat_deg);
            if config.apply_refraction {
                horizontal.alt_rad = apply_refraction(horizontal.alt_rad);
            }

            *out = StarOut {
                x: 0.0,
                y: 0.0,
                mag: star.mag as f32,
                hip: star.hip,
                visible: horizontal.is_above_horizon(),
            };
            if !out.visible {
                continue;
            }

            let device = rotate_to_device(&horizontal_to_enu(&horizontal), &orientation);
            let Some(point) = project_to_screen(&device, &config) else {
                out.visible = false;
                continue;
            };
            out.x = point.x;
            out.y = point.y;

            if packed < capacity {
                let base = packed * FRAME_STRIDE;
                records[base..base + FRAME_STRIDE]
                    .copy_from_slice(&[out.x, out.y, out.mag, out.hip as f32]);
                packed += 1;
            }
        }

        let count = self.frame_buffer.commit(packed);
        log::trace!(
            "frame at JD {:.6}: {} of {} stars visible",
            jd,
            count,
            self.catalog.len()
        );
        count
    }

    /// Publishes an empty frame without touching configuration or catalog.
    pub fn stop(&mut self) {
        self.frame_buffer.commit(0);
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn stars(&self) -> &[StarIn] {
        &self.catalog
    }

    /// Per-star results of the last frame, parallel to [`stars`](Self::stars).
    pub fn outputs(&self) -> &[StarOut] {
        &self.outputs
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }
}
