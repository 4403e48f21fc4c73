//! Swatch - color derivation and gradient engine for terminal dashboards

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use serde_json::{Value, json};
use swatch::color::{blend_perceptual, hash_to_color, luma, pick_foreground};
use swatch::gradient::{Gradient, interpolate_hex};
use swatch::semantic::{color_for_hours_worked, color_for_http_status, color_for_latency_seconds};
use swatch::{Color, Config};

/// Color derivation and gradient engine for terminal dashboards
#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a #RRGGBB color
    Hex {
        /// Color to normalize
        color: Color,
    },
    /// Blend two colors perceptually
    Blend {
        /// Start color
        a: Color,
        /// End color
        b: Color,
        /// Position between the two, 0.0 to 1.0
        t: f64,
    },
    /// Linearly interpolate two colors in RGB
    Interpolate {
        /// Start color
        a: String,
        /// End color
        b: String,
        /// Position between the two, 0.0 to 1.0
        t: f64,
    },
    /// Perceptual ramp between two colors (defaults to the progress bar ramp)
    Ramp {
        /// Start color
        a: Option<Color>,
        /// End color
        b: Option<Color>,
        /// Number of colors
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Three-anchor linear gradient (defaults to the configured anchors)
    Gradient {
        /// First anchor
        start: Option<Color>,
        /// Middle anchor
        mid: Option<Color>,
        /// Last anchor
        end: Option<Color>,
        /// Number of colors
        #[arg(long, default_value_t = 10)]
        steps: usize,
        /// Lighten factor applied to every color
        #[arg(long)]
        lighten: Option<f64>,
    },
    /// Stable background and text colors for labels
    Hash {
        /// Labels to color
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Legible text color for a background
    Contrast {
        /// Background color
        color: Color,
    },
    /// Background color for hours worked
    Hours {
        /// Hours worked in a day
        #[arg(allow_negative_numbers = true)]
        hours: f64,
    },
    /// Color for a latency in seconds
    Latency {
        /// Latency in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Badge colors for an HTTP status code
    Status {
        /// Status code
        code: u16,
    },
    /// Print the effective configuration
    Config,
}

fn init_logging() {
    // Log to $TMPDIR/swatch.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "swatch.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let (text, value) = run(cli.command, &config)?;
    if cli.json {
        let rendered = serde_json::to_string_pretty(&value).context("Failed to encode output")?;
        println!("{rendered}");
    } else {
        println!("{text}");
    }
    Ok(())
}

/// Run one subcommand, returning its plain-text and JSON renderings
fn run(command: Commands, config: &Config) -> Result<(String, Value)> {
    let output = match command {
        Commands::Hex { color } => (color.to_hex(), json!(color)),
        Commands::Blend { a, b, t } => {
            let color = blend_perceptual(a, b, t);
            (color.to_hex(), json!(color))
        }
        Commands::Interpolate { a, b, t } => {
            let hex = interpolate_hex(&a, &b, t)?;
            (hex.clone(), json!(hex))
        }
        Commands::Ramp { a, b, steps } => {
            let gradient = Gradient::ramp(
                a.unwrap_or(config.progress.start),
                b.unwrap_or(config.progress.end),
                steps.unwrap_or(config.progress.width),
            );
            (gradient.to_hex().join("\n"), json!(gradient))
        }
        Commands::Gradient {
            start,
            mid,
            end,
            steps,
            lighten,
        } => {
            let anchors = config.tri_stop;
            let gradient = Gradient::tri_stop(
                start.unwrap_or(anchors.start),
                mid.unwrap_or(anchors.mid),
                end.unwrap_or(anchors.end),
                steps,
                lighten.unwrap_or(anchors.lighten),
            );
            (gradient.to_hex().join("\n"), json!(gradient))
        }
        Commands::Hash { labels } => {
            let rows: Vec<(String, Color, Color)> = labels
                .into_iter()
                .map(|label| {
                    let background = hash_to_color(&label);
                    (label, background, pick_foreground(background))
                })
                .collect();
            let text = rows
                .iter()
                .map(|(label, bg, fg)| format!("{label}\t{bg}\t{fg}"))
                .collect::<Vec<_>>()
                .join("\n");
            let value = rows
                .iter()
                .map(|(label, bg, fg)| json!({ "label": label, "background": bg, "foreground": fg }))
                .collect();
            (text, Value::Array(value))
        }
        Commands::Contrast { color } => {
            let foreground = pick_foreground(color);
            (
                foreground.to_hex(),
                json!({ "background": color, "foreground": foreground, "luma": luma(color) }),
            )
        }
        Commands::Hours { hours } => lookup_output(color_for_hours_worked(hours)),
        Commands::Latency { seconds } => lookup_output(color_for_latency_seconds(seconds)),
        Commands::Status { code } => {
            let colors = color_for_http_status(code);
            (
                format!("{}\t{}", colors.background, colors.foreground),
                json!(colors),
            )
        }
        Commands::Config => {
            let rendered =
                serde_json::to_string_pretty(config).context("Failed to encode configuration")?;
            (rendered, json!(config))
        }
    };
    Ok(output)
}

fn lookup_output(hex: Option<&str>) -> (String, Value) {
    hex.map_or_else(
        || ("none".to_string(), Value::Null),
        |hex| (hex.to_string(), json!(hex)),
    )
}
