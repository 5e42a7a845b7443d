use std::path::PathBuf;

use clap::Parser;
use log::info;

use damask_processing::cli::{configure_threads, fixed, init_logging, invocation_args, target_name, targets};
use damask_processing::config::DEFAULT_DEFORMATION_LABEL;
use damask_processing::grid::RegularGrid;
use damask_processing::interfaces::Sink;
use damask_processing::mismatch::{add_compatibility_mismatch, MismatchOptions};
use damask_processing::table::{execution_stamp, read_input, write_output, AsciiTable};
use damask_processing::Result;

const SCRIPT: &str = "add_compatibility_mismatch";

#[derive(Parser)]
#[command(name = SCRIPT)]
#[command(about = "Add columns containing shape and volume mismatch of deformation gradient fields")]
#[command(long_about = "Add columns containing shape and volume mismatch of deformation gradient fields.\n\
    Operates on periodic ordered three-dimensional data sets (x fastest, z slowest).")]
#[command(version)]
struct Cli {
    /// ASCII tables, rewritten in place (standard input to standard output if none)
    files: Vec<PathBuf>,

    /// Do not calculate shape mismatch
    #[arg(short = 's', long = "no-shape")]
    no_shape: bool,

    /// Do not calculate volume mismatch
    #[arg(short = 'v', long = "no-volume")]
    no_volume: bool,

    /// Physical dimension of data set in x (fast) y z (slow)
    #[arg(short = 'd', long = "dimension", visible_alias = "size", required = true,
          num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    dimension: Vec<f64>,

    /// Resolution of data set in x (fast) y z (slow)
    #[arg(short = 'r', long = "resolution", visible_alias = "grid", required = true,
          num_args = 3, value_names = ["NX", "NY", "NZ"])]
    resolution: Vec<usize>,

    /// Heading(s) of columns containing deformation tensor values
    #[arg(short = 'f', long = "deformation", value_delimiter = ',',
          default_value = DEFAULT_DEFORMATION_LABEL)]
    deformation: Vec<String>,

    /// Number of threads to use (requires the parallel feature)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    configure_threads(cli.threads)?;

    let grid = RegularGrid::new(
        fixed(&cli.resolution, "resolution")?,
        fixed(&cli.dimension, "dimension")?,
    )?;
    let options = MismatchOptions {
        shape: !cli.no_shape,
        volume: !cli.no_volume,
        labels: cli.deformation,
    };
    let stamp = execution_stamp(SCRIPT, &invocation_args());

    for target in targets(cli.files) {
        info!("{}: {}", SCRIPT, target_name(target.as_ref()));

        let mut table = AsciiTable::parse(&read_input(target.as_deref())?)?;
        add_compatibility_mismatch(&mut table, &grid, &options, stamp.clone())?;
        write_output(&Sink::from(target), &table.render())?;
    }
    Ok(())
}
