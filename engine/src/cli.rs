use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trip-engine", version, about = "Trip expense calculator")]
pub struct Cli {
    /// Settings file path
    #[arg(short, long, default_value = "trip-engine.json", global = true)]
    pub config: PathBuf,

    /// Currency code for displayed amounts (overrides settings)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Calculate the cost breakdown of a trip
    Calc {
        /// Trip parameters as JSON
        trip: PathBuf,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two trips side by side
    Compare {
        trip1: PathBuf,
        trip2: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Print a plain-text summary suitable for sharing
    Share { trip: PathBuf },

    /// Write the breakdown of a trip as CSV
    Export {
        trip: PathBuf,

        /// Output file (defaults to trip-<destination>.csv)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write the comparison table of two trips as CSV
    ExportCompare {
        trip1: PathBuf,
        trip2: PathBuf,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Save a trip under a name
    Save {
        trip: PathBuf,

        /// Defaults to the destination
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List saved trips, newest first
    List,

    /// Print a saved trip's parameters as JSON
    Show { id: String },

    /// Replace a saved trip's parameters
    Update {
        id: String,
        trip: PathBuf,

        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a saved trip
    Delete { id: String },
}
