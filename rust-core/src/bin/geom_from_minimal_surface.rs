use std::path::PathBuf;

use clap::Parser;
use log::info;

use damask_processing::cli::{fixed, init_logging, invocation_args};
use damask_processing::config::{
    DEFAULT_GEOM_GRID, DEFAULT_GEOM_SIZE, DEFAULT_HOMOGENIZATION, DEFAULT_MICROSTRUCTURE,
    DEFAULT_PERIODS,
};
use damask_processing::geometries::{geom_grid, GeomLayout, MinimalSurface, MinimalSurfaceGeometry};
use damask_processing::interfaces::Sink;
use damask_processing::table::{execution_stamp, write_output};
use damask_processing::Result;

const SCRIPT: &str = "geom_from_minimal_surface";

#[derive(Parser)]
#[command(name = SCRIPT)]
#[command(about = "Generate a geometry file of a bicontinuous structure of given type")]
#[command(version)]
struct Cli {
    /// Output geom file (standard output if omitted)
    output: Option<PathBuf>,

    /// Type of minimal surface
    #[arg(short = 't', long = "type", value_enum, default_value_t = MinimalSurface::Primitive)]
    surface: MinimalSurface,

    /// Threshold value defining minimal surface
    #[arg(short = 'f', long, default_value_t = 0.0, allow_negative_numbers = true)]
    threshold: f64,

    /// a,b,c grid of hexahedral box
    #[arg(short = 'g', long, num_args = 3, value_names = ["A", "B", "C"],
          default_values_t = DEFAULT_GEOM_GRID)]
    grid: Vec<usize>,

    /// x,y,z size of hexahedral box
    #[arg(short = 's', long, num_args = 3, value_names = ["X", "Y", "Z"],
          default_values_t = DEFAULT_GEOM_SIZE, allow_negative_numbers = true)]
    size: Vec<f64>,

    /// Number of repetitions of unit cell
    #[arg(short = 'p', long, default_value_t = DEFAULT_PERIODS, allow_negative_numbers = true)]
    periods: i64,

    /// Homogenization index to be used
    #[arg(long, default_value_t = DEFAULT_HOMOGENIZATION)]
    homogenization: i64,

    /// Two microstructure indices to be used
    #[arg(long = "m", visible_alias = "microstructure", num_args = 2,
          value_names = ["M1", "M2"], default_values_t = DEFAULT_MICROSTRUCTURE)]
    microstructure: Vec<i64>,

    /// Output geom file with two-dimensional data arrangement
    #[arg(short = '2', long = "twodimensional")]
    two_dimensional: bool,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let resolution: [usize; 3] = fixed(&cli.grid, "grid")?;
    let size: [f64; 3] = fixed(&cli.size, "size")?;
    let microstructure: [i64; 2] = fixed(&cli.microstructure, "microstructure")?;

    // Report
    info!("{}", SCRIPT);
    info!("grid     a b c:  {} x {} x {}", resolution[0], resolution[1], resolution[2]);
    info!("size     x y z:  {} x {} x {}", size[0], size[1], size[2]);
    info!("origin   x y z:  0 : 0 : 0");
    info!("homogenization:  {}", cli.homogenization);
    info!("microstructures: {}", microstructure[0].max(microstructure[1]));

    let geometry = MinimalSurfaceGeometry {
        surface: cli.surface,
        threshold: cli.threshold,
        grid: geom_grid(resolution, size)?,
        periods: cli.periods,
        homogenization: cli.homogenization,
        microstructure,
    };
    let layout = if cli.two_dimensional {
        GeomLayout::TwoDimensional
    } else {
        GeomLayout::Column
    };

    let stamp = execution_stamp(SCRIPT, &invocation_args());
    write_output(&Sink::from(cli.output), &geometry.render(&stamp, layout))
}
