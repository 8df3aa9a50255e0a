use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pdcgen",
    version,
    about = "Generate the async FIFO timing constraint file (.pdc) from DUT parameters",
    long_about = "Generate the async FIFO timing constraint file (.pdc) from DUT parameters.\n\nRuns `generate` when no subcommand is given."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "DUT parameter file [default: eval/dut_params.v]"
    )]
    pub params: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Constraint file to write [default: eval/constraint.pdc]"
    )]
    pub output: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ./pdcgen.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the constraint file
    Generate {
        #[arg(long, default_value_t = false, help = "Print the constraints instead of writing the file (not with --output)")]
        stdout: bool,
    },
    /// Show the resolved DUT parameters and clock period
    Params,
}
