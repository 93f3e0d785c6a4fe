// Trip engine command line entry point
use anyhow::{Context, Result};
use clap::Parser;
use engine::config::settings::EngineSettings;
use engine::data::csv_export::{write_breakdown, write_comparison};
use engine::data::trip_store::{SavedTrips, TripStore};
use engine::error::{EngineError, Operation};
use engine::services::report::{render_breakdown, render_comparison};
use engine::services::share::{export_file_stem, share_summary};
use engine::services::{calculate_trip, compare_trips, validate_trip};
use shared::models::TripParameters;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

mod cli;

use cli::Commands;

fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries command output.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = cli::Cli::parse();
    let mut settings = EngineSettings::load(&args.config)?;
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }

    match args.command {
        Commands::Calc { trip, json } => {
            let trip = read_trip(&trip)?;
            let result = calculate_trip(&trip);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_breakdown(&trip, &result, &settings.currency));
            }
        }
        Commands::Compare { trip1, trip2, json } => {
            let (trip1, trip2) = (read_trip(&trip1)?, read_trip(&trip2)?);
            let comparison = compare_trips(&trip1, &trip2);
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print!("{}", render_comparison(&trip1, &trip2, &comparison, &settings.currency));
            }
        }
        Commands::Share { trip } => {
            let trip = read_trip(&trip)?;
            println!("{}", share_summary(&trip, &calculate_trip(&trip), &settings.currency));
        }
        Commands::Export { trip, out } => {
            let trip = read_trip(&trip)?;
            let out = out.unwrap_or_else(|| PathBuf::from(format!("{}.csv", export_file_stem(&trip))));
            let result = calculate_trip(&trip);
            report(
                Operation::Export,
                create(&out).and_then(|file| write_breakdown(file, &result)),
                |_| info!(path = %out.display(), "Exported breakdown"),
            );
        }
        Commands::ExportCompare { trip1, trip2, out } => {
            let (trip1, trip2) = (read_trip(&trip1)?, read_trip(&trip2)?);
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!("{}-vs-{}.csv", export_file_stem(&trip1), export_file_stem(&trip2)))
            });
            let comparison = compare_trips(&trip1, &trip2);
            let label1 = label_or(&trip1, "Trip 1");
            let label2 = label_or(&trip2, "Trip 2");
            report(
                Operation::Export,
                create(&out).and_then(|file| write_comparison(file, &label1, &label2, &comparison)),
                |_| info!(path = %out.display(), "Exported comparison"),
            );
        }
        Commands::Save { trip, name } => {
            let trip = read_trip(&trip)?;
            let name = name.unwrap_or_else(|| label_or(&trip, "My Trip"));
            let mut store = SavedTrips::open(&settings.store_dir);
            report(Operation::Save, store.save(&name, &trip), |id| {
                println!("Saved '{}' as {}", name, id)
            });
        }
        Commands::List => {
            let store = SavedTrips::open(&settings.store_dir);
            report(Operation::Load, store.list(), |records| {
                for record in records {
                    println!(
                        "{}  {}  ({}, saved on {})",
                        record.id,
                        record.name,
                        record.data.destination,
                        record.created_at.format("%Y-%m-%d")
                    );
                }
            });
        }
        Commands::Show { id } => {
            let store = SavedTrips::open(&settings.store_dir);
            report(Operation::Load, store.get(&id), |record| match record {
                Some(record) => match serde_json::to_string_pretty(&record.data) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("{}", EngineError::from(e).notice(Operation::Load)),
                },
                None => eprintln!("No saved trip with id {}", id),
            });
        }
        Commands::Update { id, trip, name } => {
            let trip = read_trip(&trip)?;
            let mut store = SavedTrips::open(&settings.store_dir);
            let outcome = store.get(&id).and_then(|existing| match existing {
                Some(existing) => {
                    let name = name.unwrap_or(existing.name);
                    store.update(&id, &name, &trip).map(|_| true)
                }
                None => Ok(false),
            });
            report(Operation::Update, outcome, |found| {
                if found {
                    println!("Updated {}", id)
                } else {
                    eprintln!("No saved trip with id {}", id)
                }
            });
        }
        Commands::Delete { id } => {
            let mut store = SavedTrips::open(&settings.store_dir);
            report(Operation::Delete, store.delete(&id), |_| println!("Deleted {}", id));
        }
    }

    Ok(())
}

fn read_trip(path: &Path) -> Result<TripParameters> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trip file '{}'", path.display()))?;
    let trip: TripParameters = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse trip file '{}'", path.display()))?;
    validate_trip(&trip)?;
    Ok(trip)
}

fn create(path: &Path) -> Result<BufWriter<File>, EngineError> {
    Ok(BufWriter::new(File::create(path)?))
}

fn label_or(trip: &TripParameters, fallback: &str) -> String {
    let destination = trip.destination.trim();
    if destination.is_empty() {
        fallback.to_string()
    } else {
        destination.to_string()
    }
}

/// Persistence and export failures are shown as a notice; they never abort
/// the command.
fn report<T>(operation: Operation, outcome: Result<T, EngineError>, on_success: impl FnOnce(T)) {
    match outcome {
        Ok(value) => on_success(value),
        Err(e) => eprintln!("{}", e.notice(operation)),
    }
}
