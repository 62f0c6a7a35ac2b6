//! CLI logic for the Shajara family tree layout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use shajara::{FamilyBuilder, ShajaraError};

/// Run the Shajara CLI application
///
/// Reads the member file, lays it out for the requested view and writes the
/// layout JSON to the output file.
///
/// # Errors
///
/// Returns `ShajaraError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Member data parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), ShajaraError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing family"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = FamilyBuilder::new(app_config);
    let members = builder.parse_members(&source)?;
    let (view, result) = match &args.view {
        Some(tag) => builder.layout_tag(tag, &members),
        None => {
            let view = builder.config().layout().default_view();
            (view, builder.layout(view, &members))
        }
    };
    let json = builder.render_json(view, &result)?;

    fs::write(&args.output, json)?;

    info!(output_file = args.output, view:%; "Layout exported successfully");

    Ok(())
}
