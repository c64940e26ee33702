use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for appviz
/// CLI application to render application activity timelines as SVG
#[derive(Parser)]
#[command(
    name = "appviz",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple activity visualization CLI: render application lifecycle events from a CSV log as an SVG timeline",
    long_about = None
)]
pub struct Cli {
    /// Override activity log path (useful for tests or custom data)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Print a summary of the derived dataset (lanes, time range, counts)
    Info,

    /// Render the activity log as an SVG chart
    Render {
        /// Output SVG file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Chart width in drawing units (default from config)
        #[arg(long)]
        width: Option<u32>,

        /// Chart height in drawing units (default from config)
        #[arg(long)]
        height: Option<u32>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the derived event rows
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
