use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "csspropc",
    about = "Compiles CSS property definitions into an ordered identifier table",
    version,
    author,
    long_about = None
)]
pub struct CssPropCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile property records into a table
    Compile {
        /// Path to the records file (.json, .yaml or .yml)
        #[arg(short, long)]
        input: PathBuf,

        /// Write the compiled table as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate property records without writing anything
    Check {
        /// Path to the records file (.json, .yaml or .yml)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show the compiled entry for one property or alias
    Show {
        /// Path to the records file (.json, .yaml or .yml)
        #[arg(short, long)]
        input: PathBuf,

        /// Authored property name, e.g. -webkit-opacity
        name: String,
    },

    /// List the reserved enum slots and the identifier layout
    Reserved,
}
