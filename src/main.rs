// main.rs
//
// Builds the rigid wheel profile for the configured reducer, writes it to DXF
// and, unless disabled, an SVG plot of the same geometry.

use anyhow::{Context, Result};
use ballwave::config::Config;
use ballwave::float_types::Real;
use ballwave::io::DxfSink;
use ballwave::sketch::{Sketch, emit};
use ballwave::{Gearbox, GeometryError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the trough radius is too small for the balls.
const EXIT_INFEASIBLE: u8 = 1;
/// Exit status for every other failure.
const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "ballwave")]
#[command(about = "Rigid wheel profile of a wave reducer with intermediate rolling balls")]
struct Args {
    /// TOML file with [design], [drawing] and [output] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gear ratio
    #[arg(long)]
    ratio: Option<u32>,
    /// Ball diameter [mm]
    #[arg(long)]
    ball_diameter: Option<Real>,
    /// Outer radius of the rigid wheel troughs [mm]
    #[arg(long)]
    ring_radius: Option<Real>,
    /// Outer diameter of the gearbox [mm]
    #[arg(long)]
    outer_diameter: Option<Real>,
    /// Number of waves (only 1 is verified)
    #[arg(long)]
    waves: Option<u32>,
    /// Number of points along the rigid wheel profile
    #[arg(long)]
    resolution: Option<usize>,

    /// DXF output file
    #[arg(long)]
    out: Option<PathBuf>,
    /// SVG plot file
    #[arg(long, conflicts_with = "no_plot")]
    plot: Option<PathBuf>,
    /// Skip the SVG plot
    #[arg(long)]
    no_plot: bool,
    /// Also draw the balls
    #[arg(long)]
    balls: bool,
    /// Print the derived parameters as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> Result<(Config, bool)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => Config::default(),
        };
        let design = &mut config.design;
        if let Some(v) = self.ratio {
            design.gear_ratio = v;
        }
        if let Some(v) = self.ball_diameter {
            design.ball_diameter = v;
        }
        if let Some(v) = self.ring_radius {
            design.ring_outer_radius = v;
        }
        if let Some(v) = self.outer_diameter {
            design.outer_diameter = v;
        }
        if let Some(v) = self.waves {
            design.wave_count = v;
        }
        if let Some(v) = self.resolution {
            design.resolution = v;
        }
        if let Some(out) = self.out {
            config.output.dxf = out;
        }
        if let Some(plot) = self.plot {
            config.output.svg = Some(plot);
        }
        if self.no_plot {
            config.output.svg = None;
        }
        if self.balls {
            config.drawing.balls = true;
        }
        Ok((config, self.json))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let infeasible = err
                .downcast_ref::<GeometryError>()
                .is_some_and(GeometryError::is_infeasible);
            eprintln!("error: {err:#}");
            ExitCode::from(if infeasible { EXIT_INFEASIBLE } else { EXIT_FAILURE })
        },
    }
}

fn run(args: Args) -> Result<()> {
    let (config, json) = args.into_config()?;

    let gearbox = Gearbox::build(&config.design)?;
    gearbox.params.log_summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&gearbox.params)?);
    }

    let mut dxf = DxfSink::new();
    emit(&gearbox, &config.drawing, &mut dxf);
    dxf.save(&config.output.dxf)
        .with_context(|| format!("writing {}", config.output.dxf.display()))?;
    log::info!("Profile built and written to {}", config.output.dxf.display());

    if let Some(svg) = &config.output.svg {
        let mut plot = Sketch::new();
        emit(&gearbox, &config.drawing, &mut plot);
        plot.save_svg(svg)
            .with_context(|| format!("writing {}", svg.display()))?;
        log::info!("Plot written to {}", svg.display());
    }

    Ok(())
}
