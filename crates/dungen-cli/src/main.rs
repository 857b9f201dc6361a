//! dungen: generate a dungeon layout and print it
//!
//! Settings come from an optional JSON config file, then command-line flags
//! on top.

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use dungen_core::{Dungeon, GeneratorConfig, LayoutEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Symbols with inferred walls
    Ascii,
    /// Full layout as JSON
    Json,
    /// Tag values, one grid row per line
    Raw,
}

/// Procedural dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a room-and-corridor dungeon layout", long_about = None)]
struct Args {
    /// JSON file with generator settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long = "width")]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long = "height")]
    height: Option<usize>,

    /// Number of rooms to try to place
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Random seed (omit for a random layout)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// World units per cell
    #[arg(long = "cell-size")]
    cell_size: Option<f32>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "ascii")]
    format: OutputFormat,

    /// Print the tag legend after an ASCII map
    #[arg(long = "legend")]
    legend: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// File settings (or defaults) with command-line overrides applied
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Text for stdout in the requested format
///
/// Diagnostics are not included; the core logs each one as it is recorded.
fn render_output(args: &Args, dungeon: &Dungeon) -> Result<String> {
    let mut out = String::new();
    match args.format {
        OutputFormat::Ascii => {
            out.push_str(&render::render_ascii(dungeon));
            if args.legend {
                out.push_str(&render::legend());
                out.push('\n');
            }
            out.push_str(&format!("seed {}\n", dungeon.seed));
        }
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(dungeon)?);
            out.push('\n');
        }
        OutputFormat::Raw => out.push_str(&render::render_raw(dungeon)),
    }
    Ok(out)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.generator_config()?;
    debug!("generator config: {:?}", config);

    let dungeon = LayoutEngine::generate(config).context("invalid generator config")?;

    print!("{}", render_output(&args, &dungeon)?);

    Ok(())
}
