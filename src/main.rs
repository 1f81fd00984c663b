mod config;
mod context;
mod data;
mod diagram;
mod geometry;
mod layers;
mod layout;
mod pvgis;
mod report;
mod session;
mod silhouette;
mod solar;
mod types;

use std::path::PathBuf;

use crate::config::DiagramConfig;
use crate::data::load_obstacles;
use crate::diagram::Diagram;
use crate::pvgis::{EstimateError, EstimateForm, HttpEstimator};
use crate::session::Session;
use crate::types::{CompassConvention, Obstacle};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sunpath")]
#[command(about = "Sun-path diagrams and photovoltaic production estimates", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the sun-path diagram with obstacle silhouettes
    Diagram {
        /// Site latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Obstacle points CSV (header: obstacle,azimuth,height)
        #[arg(long)]
        obstacles: Option<String>,

        /// Where the west label sits: standard (270) or legacy (285)
        #[arg(long, default_value = "standard")]
        compass: String,

        /// Output image width in pixels
        #[arg(long, default_value_t = 1000)]
        width: u32,

        /// Output image height in pixels
        #[arg(long, default_value_t = 620)]
        height: u32,

        /// Optional CSS override file path; if omitted embedded CSS is used
        #[arg(long)]
        css: Option<String>,

        /// Output SVG path
        #[arg(short = 'o', long = "out")]
        out: String,
    },

    /// Request an estimate and write the report files
    Estimate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Estimation service URL
        #[arg(long)]
        endpoint: String,

        /// Installed peak power in kWp
        #[arg(long, default_value = "")]
        peakpower: String,

        /// System loss in percent
        #[arg(long, default_value = "14")]
        loss: String,

        /// Panel tilt in degrees
        #[arg(long, default_value = "35")]
        angle: String,

        /// Panel azimuth in degrees, 0 = south, clamped to [-180, 180]
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        aspect: String,

        /// Obstacle points CSV; when given, replaces the automatic horizon
        #[arg(long)]
        obstacles: Option<String>,

        #[arg(long, default_value = "standard")]
        compass: String,

        #[arg(long)]
        css: Option<String>,

        /// Directory receiving monthly.csv, the bar charts and diagram.svg
        #[arg(long)]
        out_dir: PathBuf,
    },
}

fn parse_compass(s: &str) -> Result<CompassConvention> {
    CompassConvention::from_str(&s.to_lowercase())
        .ok_or_else(|| anyhow!("invalid compass '{s}'. Use: standard | legacy"))
}

fn read_obstacles(path: Option<&str>) -> Result<Vec<Obstacle>> {
    match path {
        Some(p) => {
            let obstacles = load_obstacles(p).with_context(|| format!("reading obstacles from {p}"))?;
            info!(count = obstacles.len(), path = p, "obstacles loaded");
            Ok(obstacles)
        }
        None => Ok(Vec::new()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Diagram {
            lat,
            obstacles,
            compass,
            width,
            height,
            css,
            out,
        } => {
            let cfg = DiagramConfig {
                latitude_deg: lat,
                width,
                height,
                compass: parse_compass(&compass)?,
                ..DiagramConfig::default()
            };
            let obstacles = read_obstacles(obstacles.as_deref())?;
            Diagram::new(&obstacles, cfg, css)
                .to_file(&out)
                .with_context(|| format!("writing {out}"))?;
            info!(path = %out, "diagram written");
        }
        Command::Estimate {
            lat,
            lon,
            endpoint,
            peakpower,
            loss,
            angle,
            aspect,
            obstacles,
            compass,
            css,
            out_dir,
        } => {
            let mut form = EstimateForm {
                peak_power: peakpower,
                system_loss: loss,
                tilt: angle,
                automatic_horizon: obstacles.is_none(),
                ..EstimateForm::default()
            };
            if let Some(msg) = form.set_azimuth(&aspect) {
                warn!(aspect = %aspect, clamped = %form.azimuth, "{msg}");
            }

            let cfg = DiagramConfig {
                compass: parse_compass(&compass)?,
                ..DiagramConfig::default()
            };
            let mut session = Session::new(form, read_obstacles(obstacles.as_deref())?, cfg);
            session.set_position(lat, lon);

            let estimator = HttpEstimator::new(endpoint);
            let result = session.submit(&estimator).await.inspect_err(|e| {
                if let EstimateError::Invalid(errors) = e {
                    warn!(fields = ?errors.fields(), "estimate form incomplete");
                }
            })?;
            let report = session.report(&result);

            report.export(&out_dir)?;
            let diagram_path = out_dir.join("diagram.svg");
            session
                .diagram(css)
                .to_file(&diagram_path)
                .with_context(|| format!("writing {}", diagram_path.display()))?;
            info!(dir = %out_dir.display(), "report written");

            print!("{report}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    run(args.command).await
}

#[cfg(test)]
mod test_utils;
