//! Blink monitor: replays recorded facial landmarks and reports blink rate.

use anyhow::{Context, Result};
use blink_monitor::{
    app::{AppConfig, BlinkApp},
    config::{Config, EXAMPLE_CONFIG},
};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark trace to replay (YAML or JSON)
    #[arg(short, long, required_unless_present = "print_example_config")]
    trace: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Combined eye ratio above which the eyes count as closed
    #[arg(long)]
    threshold: Option<f64>,

    /// Minimum seconds between two counted blinks
    #[arg(long)]
    cooldown: Option<f64>,

    /// Window length in seconds
    #[arg(short, long)]
    window: Option<u32>,

    /// Blinks per window below which a warning is raised
    #[arg(long)]
    min_blinks: Option<u32>,

    /// Ratio smoothing filter (none, moving_average:N, median:N, exponential:A)
    #[arg(short, long)]
    filter: Option<String>,

    /// Write closed windows to this YAML file
    #[arg(long)]
    history_out: Option<PathBuf>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_example_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Command-line values take precedence over the config file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(threshold) = self.threshold {
            config.detection.blink_ratio_threshold = threshold;
        }
        if let Some(cooldown) = self.cooldown {
            config.detection.cooldown_seconds = cooldown;
        }
        if let Some(filter) = &self.filter {
            config.detection.ratio_filter.clone_from(filter);
        }
        if let Some(window) = self.window {
            config.window.window_duration_seconds = window;
        }
        if let Some(min_blinks) = self.min_blinks {
            config.window.min_blink_count = min_blinks;
        }
        if let Some(path) = &self.history_out {
            config.history.output = Some(path.clone());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_example_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_level));

    info!("Blink Monitor");

    let mut settings = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::from_file(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::default(),
    };
    args.apply_overrides(&mut settings);

    let trace_path = args.trace.clone().context("--trace is required")?;
    let mut app = BlinkApp::new(AppConfig { trace_path, settings })?;
    let summary = app.run()?;

    println!(
        "{} blinks in total; {} blinks over {:.0}s of closed windows ({:.1}/min), {} of {} windows below the healthy rate",
        app.monitor().state().total_blinks,
        summary.total_blinks,
        summary.total_duration_seconds,
        summary.average_rate_per_second * 60.0,
        summary.low_rate_windows,
        summary.windows
    );

    Ok(())
}
