//! Command-line argument definitions for the Shajara CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the requested view,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Shajara layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the member JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// View to lay out (radial, vertical-tree, horizontal-tree, org-chart,
    /// network, timeline, grid, gallery). Unknown views fall back to the
    /// configured default.
    #[arg(short, long)]
    pub view: Option<String>,

    /// Path to the output layout JSON file
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
