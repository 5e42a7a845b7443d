use std::path::PathBuf;

use clap::Parser;
use log::info;

use damask_processing::cli::{init_logging, invocation_args, target_name, targets};
use damask_processing::coordinates::add_strain_coordinates;
use damask_processing::interfaces::Sink;
use damask_processing::table::{execution_stamp, read_input, write_output, AsciiTable};
use damask_processing::Result;

const SCRIPT: &str = "add_aps34ide_strain_coords";

#[derive(Parser)]
#[command(name = SCRIPT)]
#[command(about = "Transform X,Y,Z,F APS BeamLine 34 coordinates to x,y,z APS strain coordinates")]
#[command(version)]
struct Cli {
    /// ASCII tables, rewritten in place (standard input to standard output if none)
    files: Vec<PathBuf>,

    /// Label of APS X,Y,Z coords
    #[arg(short = 'f', long)]
    frame: String,

    /// Label of the depth column
    #[arg(long)]
    depth: String,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stamp = execution_stamp(SCRIPT, &invocation_args());

    for target in targets(cli.files) {
        info!("{}: {}", SCRIPT, target_name(target.as_ref()));

        let mut table = AsciiTable::parse(&read_input(target.as_deref())?)?;
        add_strain_coordinates(&mut table, &cli.frame, &cli.depth, &stamp)?;
        write_output(&Sink::from(target), &table.render())?;
    }
    Ok(())
}
