//! CLI argument definitions using clap.
//!
//! The tool takes a single optional positional argument, the reference
//! language, and prints the merged catalog listing for it to stdout.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Reference language whose catalog holds the known translations (overrides config file) [default: en]
    #[arg(value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Print a summary of the run to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
