//! The operation surface a host runtime binds to.
//!
//! A mobile or scripting binding drives the engine through [`SkyHost`]:
//! catalog and configuration calls arrive rarely, while
//! [`compute_frame`](SkyHost::compute_frame) and
//! [`get_frame_buffer`](SkyHost::get_frame_buffer) run once per rendered
//! frame. Timestamps cross this boundary as Unix milliseconds.
//!
//! ```
//! use skyview_engine::{EngineConfig, Observer, SkyHost, SkyHostEngine, StarPayload};
//!
//! let mut host = SkyHostEngine::new();
//! assert!(host.start_engine(EngineConfig::new(60.0, 1080, 1920, true)));
//! host.set_observer(Observer::new(37.7749, -122.4194));
//!
//! let packed = [0.0_f32, 37.7749, 1.0, 1.0];
//! host.set_stars(StarPayload::Packed(&packed)).unwrap();
//!
//! let count = host.tick(None, 1_700_000_000_000);
//! assert_eq!(host.get_frame_buffer().len(), count * 4);
//! ```

use crate::catalog::StarPayload;
use crate::engine::Engine;
use crate::error::EngineResult;
use crate::types::{EngineConfig, Observer, Pose};
use skyview_time::unix_millis_to_julian_date;

pub trait SkyHost {
    /// Applies `config` and reports that the engine accepted it.
    fn start_engine(&mut self, config: EngineConfig) -> bool;

    /// Publishes an empty frame. Configuration and catalog are kept.
    fn stop_engine(&mut self);

    /// Replaces the catalog.
    ///
    /// # Errors
    /// Returns [`EngineError::InputError`](crate::EngineError::InputError) for
    /// a packed buffer whose length is not a multiple of 4. The previous
    /// catalog is left in place.
    fn set_stars(&mut self, payload: StarPayload<'_>) -> EngineResult<bool>;

    fn set_observer(&mut self, observer: Observer);

    fn set_config(&mut self, config: EngineConfig);

    fn update_pose(&mut self, pose: Pose);

    /// Computes the frame for a Unix timestamp in milliseconds and returns
    /// the visible count.
    fn compute_frame(&mut self, timestamp_ms: i64) -> usize;

    /// The committed frame: `count * 4` floats of `x, y, mag, hip`.
    fn get_frame_buffer(&self) -> &[f32];

    /// One iteration of a render loop: take the latest pose if the sensor
    /// produced one, then compute the frame.
    fn tick(&mut self, pose: Option<Pose>, timestamp_ms: i64) -> usize {
        if let Some(pose) = pose {
            self.update_pose(pose);
        }
        self.compute_frame(timestamp_ms)
    }
}

/// [`SkyHost`] over an owned [`Engine`].
#[derive(Debug, Default)]
pub struct SkyHostEngine {
    engine: Engine,
}

impl SkyHostEngine {
    pub fn new() -> Self {
        Self::from_engine(Engine::new())
    }

    pub fn from_engine(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }
}

impl SkyHost for SkyHostEngine {
    fn start_engine(&mut self, config: EngineConfig) -> bool {
        self.engine.set_config(config);
        log::info!("engine started");
        true
    }

    fn stop_engine(&mut self) {
        self.engine.stop();
        log::info!("engine stopped");
    }

    fn set_stars(&mut self, payload: StarPayload<'_>) -> EngineResult<bool> {
        let stars = payload.to_stars()?;
        self.engine.set_stars(&stars);
        Ok(true)
    }

    fn set_observer(&mut self, observer: Observer) {
        self.engine.set_observer(observer);
    }

    fn set_config(&mut self, config: EngineConfig) {
        self.engine.set_config(config);
    }

    fn update_pose(&mut self, pose: Pose) {
        self.engine.update_pose(pose);
    }

    fn compute_frame(&mut self, timestamp_ms: i64) -> usize {
        self.engine
            .compute_frame(unix_millis_to_julian_date(timestamp_ms))
    }

    fn get_frame_buffer(&self) -> &[f32] {
        self.engine.frame_buffer().read_span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::types::StarIn;

    const NOW_MS: i64 = 1_700_000_000_000;
    const SF_LAT: f64 = 37.7749;
    const SF_LON: f64 = -122.4194;

    fn sample_stars() -> Vec<StarIn> {
        vec![
            StarIn::new(0.0, SF_LAT, 1.0, 1),
            StarIn::new(40.0, SF_LAT - 10.0, 2.0, 2),
            StarIn::new(120.0, SF_LAT - 20.0, 4.0, 3),
        ]
    }

    fn started_host() -> SkyHostEngine {
        let mut host = SkyHostEngine::new();
        host.start_engine(EngineConfig::new(60.0, 1080, 1920, true));
        host.set_observer(Observer::new(SF_LAT, SF_LON));
        host
    }

    #[test]
    fn test_start_engine_readies() {
        let mut host = SkyHostEngine::new();
        assert!(!host.engine().is_ready());
        assert!(host.start_engine(EngineConfig::new(60.0, 1080, 1920, true)));
        assert!(host.engine().is_ready());
    }

    #[test]
    fn test_compute_frame_converts_timestamp() {
        let stars = sample_stars();
        let mut host = started_host();
        host.set_stars(StarPayload::Records(&stars)).unwrap();

        let mut engine = Engine::new();
        engine.set_config(EngineConfig::new(60.0, 1080, 1920, true));
        engine.set_observer(Observer::new(SF_LAT, SF_LON));
        engine.set_stars(&stars);

        let expected = engine.compute_frame(unix_millis_to_julian_date(NOW_MS));
        assert_eq!(host.compute_frame(NOW_MS), expected);
        assert_eq!(host.get_frame_buffer(), engine.frame_buffer().read_span());
    }

    #[test]
    fn test_packed_and_records_agree() {
        let stars = sample_stars();
        let packed = crate::catalog::pack(&stars);

        let mut a = started_host();
        let mut b = started_host();
        assert!(a.set_stars(StarPayload::Records(&stars)).unwrap());
        assert!(b.set_stars(StarPayload::Packed(&packed)).unwrap());

        assert_eq!(a.compute_frame(NOW_MS), b.compute_frame(NOW_MS));
        assert_eq!(a.get_frame_buffer(), b.get_frame_buffer());
    }

    #[test]
    fn test_bad_stride_keeps_previous_catalog() {
        let stars = sample_stars();
        let mut host = started_host();
        host.set_stars(StarPayload::Records(&stars)).unwrap();

        let err = host
            .set_stars(StarPayload::Packed(&[1.0, 2.0, 3.0, 4.0, 5.0]))
            .unwrap_err();
        assert!(matches!(err, EngineError::InputError { .. }));
        assert_eq!(host.engine().stars().len(), 3);
    }

    #[test]
    fn test_buffer_length_matches_count() {
        let stars = sample_stars();
        let mut host = started_host();
        host.set_stars(StarPayload::Records(&stars)).unwrap();

        let count = host.compute_frame(NOW_MS);
        assert!(count <= stars.len());
        assert_eq!(host.get_frame_buffer().len(), count * 4);
    }

    #[test]
    fn test_stop_engine_empties_buffer() {
        let mut host = started_host();
        // Overhead star: always visible under the identity pose.
        let jd = unix_millis_to_julian_date(NOW_MS);
        let lst = skyview_time::local_sidereal_time_rad(jd, SF_LON);
        let overhead = [StarIn::new(lst.to_degrees(), SF_LAT, 1.0, 5)];
        host.set_stars(StarPayload::Records(&overhead)).unwrap();

        assert_eq!(host.compute_frame(NOW_MS), 1);
        host.stop_engine();
        assert!(host.get_frame_buffer().is_empty());
    }

    #[test]
    fn test_tick_applies_pose() {
        let mut host = started_host();
        let pose = Pose::new(0.0, 1.0, 0.0, 0.0);
        host.tick(Some(pose), NOW_MS);
        assert_eq!(*host.engine().pose(), pose);

        host.tick(None, NOW_MS);
        assert_eq!(*host.engine().pose(), pose);
    }
}
