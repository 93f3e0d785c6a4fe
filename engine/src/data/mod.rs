// Saved-trip persistence and structured export.
pub mod csv_export;
pub mod trip_store;
