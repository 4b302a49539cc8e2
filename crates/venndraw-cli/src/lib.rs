//! venndraw CLI library
//!
//! This module contains the core CLI logic for the venndraw tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use log::{debug, info};

use venndraw::{Fill, VennBuilder, VennError};

/// Names used for sets when none are given on the command line.
const DEFAULT_NAMES: [&str; 4] = ["A", "B", "C", "D"];

/// Run the venndraw CLI application
///
/// This function computes region labels for the sets given on the command
/// line, renders them, and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `VennError` for:
/// - Configuration loading errors
/// - A set count outside 2 to 4, or a name count that differs from it
/// - Invalid configured colors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), VennError> {
    info!(
        sets = args.data.len(),
        output_path = args.output;
        "Processing sets"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(modes) = &args.fill {
        app_config.set_fill(Fill::new(modes.iter().copied()));
    }

    let data: Vec<Vec<&str>> = args
        .data
        .iter()
        .map(|set| set.split_whitespace().collect())
        .collect();

    let builder = VennBuilder::new(app_config);
    let labels = builder.labels(data)?;

    let names: Vec<&str> = if args.names.is_empty() {
        DEFAULT_NAMES[..labels.set_count().get()].to_vec()
    } else {
        args.names.iter().map(String::as_str).collect()
    };
    debug!(names:?; "Set names");

    let figure = builder.render(&labels, &names)?;
    figure.save(&args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
