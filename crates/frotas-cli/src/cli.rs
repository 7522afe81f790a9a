//! CLI definition using clap

use clap::{Parser, Subcommand};
use frotas_types::{OutputFormat, Priority, VehicleStatus};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frotas")]
#[command(version)]
#[command(about = "Fleet yard and loading ramp dashboard")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a vehicle to the yard
    Add {
        /// License plate (ABC-1234 or ABC1D23)
        plate: String,

        /// Loading priority
        #[arg(long, short = 'p', value_enum, default_value_t = Priority::Normal)]
        priority: Priority,
    },

    /// Assign a yard vehicle to a ramp
    Assign {
        plate: String,

        /// Target ramp number
        ramp: u32,
    },

    /// Return a ramp vehicle to the yard
    Return { plate: String },

    /// Toggle the loaded flag of a ramp vehicle
    Load { plate: String },

    /// Dispatch a loaded vehicle, freeing its ramp
    Dispatch { plate: String },

    /// Block a ramp
    Block { ramp: u32 },

    /// Unblock a ramp
    Unblock { ramp: u32 },

    /// Show the bay/ramp board
    Board,

    /// List vehicles
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<VehicleStatus>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<Priority>,

        /// Filter by bay number
        #[arg(long)]
        bay: Option<u32>,

        /// Plate substring search
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show recent movement history
    History {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Show yard statistics
    Stats,

    /// Export the fleet report as CSV
    Export {
        /// Output file path (defaults to relatorio-frotas-<date>.csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set total bay count
        #[arg(long)]
        set_bays: Option<u32>,

        /// Set ramps per bay
        #[arg(long)]
        set_ramps_per_bay: Option<u32>,

        /// Set alert threshold in minutes
        #[arg(long)]
        set_alert: Option<i64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
