//! CLI definition using clap

use clap::{Parser, Subcommand};
use haisou_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haisou-balancer")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Inbound delivery slot balancing against trailer capacity")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Balance a delivery plan against trailer capacity
    Balance {
        /// Path to the plan file (.csv, .xlsx, .xlsm)
        input: PathBuf,

        /// Trailer capacity in containers per slot. Uses config value if not specified.
        #[arg(long, short = 'c')]
        capacity: Option<u32>,

        /// Restrict to a drive unit, e.g. "Proteus" (repeatable)
        #[arg(long, short = 'u')]
        unit: Vec<String>,

        /// Write the balanced plan to an Excel file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Generate evenly spaced delivery times for one shift
    Slots {
        /// Shift start time (HH:MM)
        start: String,

        /// Shift end time (HH:MM)
        end: String,

        /// Number of deliveries in the shift
        deliveries: u32,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default capacity per slot
        #[arg(long)]
        set_capacity: Option<u32>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,
    },
}
