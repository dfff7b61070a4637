use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use serde::Deserialize;
use skyview_engine::{
    EngineConfig, Observer, Pose, SkyHost, SkyHostEngine, StarIn, StarOut, StarPayload,
    DEFAULT_FOV_DEG,
};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "skyview")]
#[command(about = "Project a star catalog onto a device screen for one frame")]
struct Cli {
    /// JSON catalog: an array of star records or a flat array of ra, dec, mag, hip numbers
    #[arg(long)]
    catalog: PathBuf,

    /// JSON engine config (fovDeg, width, height, applyRefraction); overrides the screen flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Observer latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = DEFAULT_FOV_DEG)]
    fov: f64,

    #[arg(long, default_value_t = 1080)]
    width: i32,

    #[arg(long, default_value_t = 1920)]
    height: i32,

    /// Disable atmospheric refraction
    #[arg(long)]
    no_refraction: bool,

    /// Device orientation as w,x,y,z
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pose: Option<Vec<f64>>,

    /// Unix timestamp in milliseconds (default: now)
    #[arg(long)]
    timestamp_ms: Option<i64>,

    /// Print hidden stars too
    #[arg(long)]
    all: bool,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Log filter, e.g. "info" or "skyview_engine=debug"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Records(Vec<StarIn>),
    Packed(Vec<f32>),
}

impl CatalogFile {
    fn payload(&self) -> StarPayload<'_> {
        match self {
            CatalogFile::Records(stars) => StarPayload::Records(stars),
            CatalogFile::Packed(values) => StarPayload::Packed(values),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_str(&cli.log_level)
        .with_context(|| format!("invalid log level '{}'", cli.log_level))?
        .log_to_stderr()
        .start()
        .context("logger initialization failed")?;

    let config = match &cli.config {
        Some(path) => read_json::<EngineConfig>(path)?,
        None => EngineConfig::new(cli.fov, cli.width, cli.height, !cli.no_refraction),
    };
    if !config.has_screen() {
        bail!(
            "screen size must be positive, got {}x{}",
            config.width,
            config.height
        );
    }

    let pose = parse_pose(cli.pose.as_deref())?;

    let timestamp_ms = match cli.timestamp_ms {
        Some(ms) => ms,
        None => now_millis()?,
    };

    let mut host = SkyHostEngine::new();
    host.start_engine(config);
    host.set_observer(Observer::new(cli.lat, cli.lon));

    let catalog = read_json::<CatalogFile>(&cli.catalog)?;
    host.set_stars(catalog.payload())
        .with_context(|| format!("rejected catalog {}", cli.catalog.display()))?;

    let count = host.tick(Some(pose), timestamp_ms);
    log::info!(
        "{} of {} stars visible at {} ms",
        count,
        host.engine().stars().len(),
        timestamp_ms
    );

    let outputs: Vec<&StarOut> = host
        .engine()
        .outputs()
        .iter()
        .filter(|out| cli.all || out.visible)
        .collect();

    match cli.format {
        OutputFormat::Table => print_table(&outputs),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
    }

    Ok(())
}

fn parse_pose(values: Option<&[f64]>) -> anyhow::Result<Pose> {
    match values {
        Some(&[w, x, y, z]) => Ok(Pose::new(w, x, y, z)),
        Some(values) => bail!("pose needs 4 components, got {}", values.len()),
        None => Ok(Pose::identity()),
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn now_millis() -> anyhow::Result<i64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?;
    i64::try_from(elapsed.as_millis()).context("current time does not fit in i64 milliseconds")
}

fn print_table(outputs: &[&StarOut]) {
    println!("{:>8} {:>10} {:>10} {:>6} {:>8}", "HIP", "X", "Y", "Mag", "Visible");
    for out in outputs {
        println!(
            "{:>8} {:>10.2} {:>10.2} {:>6.2} {:>8}",
            out.hip, out.x, out.y, out.mag, out.visible
        );
    }
}
