use skyview_engine::{
    catalog, Engine, EngineConfig, Observer, Pose, SkyHost, SkyHostEngine, StarIn, StarPayload,
    FRAME_STRIDE,
};
use skyview_time::{local_sidereal_time_rad, unix_millis_to_julian_date};

const SF_LAT: f64 = 37.7749;
const SF_LON: f64 = -122.4194;
const TIMESTAMP_MS: i64 = 1_700_000_000_000;

fn portrait() -> EngineConfig {
    EngineConfig::new(60.0, 1080, 1920, true)
}

fn sf_stars() -> Vec<StarIn> {
    vec![
        StarIn::new(0.0, SF_LAT, 1.0, 1),
        StarIn::new(40.0, SF_LAT - 10.0, 2.0, 2),
        StarIn::new(120.0, SF_LAT - 20.0, 4.0, 3),
    ]
}

#[test]
fn test_san_francisco_frame() {
    let stars = sf_stars();
    let mut engine = Engine::new();
    engine.set_config(portrait());
    engine.set_observer(Observer::new(SF_LAT, SF_LON));
    engine.set_stars(&stars);
    engine.update_pose(Pose::identity());

    let count = engine.compute_frame(unix_millis_to_julian_date(TIMESTAMP_MS));
    assert!(count <= stars.len());

    let buffer = engine.frame_buffer();
    assert_eq!(buffer.count(), count);
    assert_eq!(buffer.stride(), FRAME_STRIDE);
    assert_eq!(buffer.read_span().len(), count * FRAME_STRIDE);

    let visible: Vec<_> = engine.outputs().iter().filter(|o| o.visible).collect();
    assert_eq!(visible.len(), count);
    for (record, out) in buffer.read_span().chunks_exact(FRAME_STRIDE).zip(&visible) {
        assert!((0.0..=1080.0).contains(&out.x), "x = {}", out.x);
        assert!((0.0..=1920.0).contains(&out.y), "y = {}", out.y);
        assert_eq!(record, &[out.x, out.y, out.mag, out.hip as f32]);
    }
}

#[test]
fn test_unconfigured_or_empty_yields_nothing() {
    let mut engine = Engine::new();
    engine.set_observer(Observer::new(SF_LAT, SF_LON));
    engine.set_stars(&sf_stars());
    assert_eq!(engine.compute_frame(unix_millis_to_julian_date(TIMESTAMP_MS)), 0);

    let mut engine = Engine::new();
    engine.set_config(portrait());
    engine.set_observer(Observer::new(SF_LAT, SF_LON));
    assert_eq!(engine.compute_frame(unix_millis_to_julian_date(TIMESTAMP_MS)), 0);
    assert!(engine.frame_buffer().read_span().is_empty());
}

#[test]
fn test_overhead_star_centered_through_host() {
    let jd = unix_millis_to_julian_date(TIMESTAMP_MS);
    let ra_deg = local_sidereal_time_rad(jd, SF_LON).to_degrees();
    let packed = catalog::pack(&[StarIn::new(ra_deg, SF_LAT, 0.5, 32349)]);

    let mut host = SkyHostEngine::new();
    assert!(host.start_engine(portrait()));
    host.set_observer(Observer::new(SF_LAT, SF_LON));
    assert!(host.set_stars(StarPayload::Packed(&packed)).unwrap());

    assert_eq!(host.tick(Some(Pose::identity()), TIMESTAMP_MS), 1);
    let record = host.get_frame_buffer();
    // f32 packing of RA/Dec moves the star by well under a pixel.
    assert!((record[0] - 540.0).abs() < 1.0, "x = {}", record[0]);
    assert!((record[1] - 960.0).abs() < 1.0, "y = {}", record[1]);
    assert_eq!(record[2], 0.5);
    assert_eq!(record[3], 32349.0);
}

#[test]
fn test_frames_track_time() {
    // A star overhead now has moved off-center an hour later.
    let jd = unix_millis_to_julian_date(TIMESTAMP_MS);
    let ra_deg = local_sidereal_time_rad(jd, SF_LON).to_degrees();

    let mut host = SkyHostEngine::new();
    host.start_engine(portrait());
    host.set_observer(Observer::new(SF_LAT, SF_LON));
    let stars = [StarIn::new(ra_deg, SF_LAT, 1.0, 1)];
    host.set_stars(StarPayload::Records(&stars)).unwrap();

    assert_eq!(host.compute_frame(TIMESTAMP_MS), 1);
    let x_now = host.get_frame_buffer()[0];

    assert_eq!(host.compute_frame(TIMESTAMP_MS + 3_600_000), 1);
    let x_later = host.get_frame_buffer()[0];
    assert!((x_later - x_now).abs() > 50.0);
}

#[test]
fn test_stop_then_restart() {
    let stars = sf_stars();
    let mut host = SkyHostEngine::new();
    host.start_engine(portrait());
    host.set_observer(Observer::new(SF_LAT, SF_LON));
    host.set_stars(StarPayload::Records(&stars)).unwrap();

    let first = host.compute_frame(TIMESTAMP_MS);
    host.stop_engine();
    assert!(host.get_frame_buffer().is_empty());

    host.start_engine(portrait());
    assert_eq!(host.compute_frame(TIMESTAMP_MS), first);
}
