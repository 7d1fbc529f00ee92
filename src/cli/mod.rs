//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `run`: The extract, load, merge pipeline wired to config and output
//! - `report`: Verbose diagnostics printed to stderr
//! - `exit_status`: Process exit codes

use std::{
    io::{self, BufWriter},
    path::Path,
};

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunSummary, run};

/// Run the tool from the current working directory, writing the listing to stdout.
pub fn run_cli(args: Arguments) -> Result<()> {
    let verbose = args.verbose;

    let summary = {
        let mut out = BufWriter::new(io::stdout().lock());
        run(&args, Path::new("."), &mut out)?
    };

    if verbose {
        report::print(&summary);
    }

    Ok(())
}
