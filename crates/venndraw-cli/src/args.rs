//! Command-line argument definitions for the venndraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments carry the input sets, their names, label
//! contents, output path, configuration file selection, and logging
//! verbosity.

use clap::Parser;

use venndraw::FillMode;

/// Command-line arguments for the venndraw tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Elements of one set, separated by whitespace. Repeat for 2 to 4 sets.
    #[arg(short, long, value_name = "ELEMENTS", required = true)]
    pub data: Vec<String>,

    /// Display name of a set, in the same order as --data [default: A, B, C, D]
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Region label contents: number, logic, percent, elements
    #[arg(long, value_name = "MODE", value_delimiter = ',')]
    pub fill: Option<Vec<FillMode>>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "venn.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
