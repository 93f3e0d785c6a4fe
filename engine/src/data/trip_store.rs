// Saved trips, kept as one ordered JSON collection in a key-value backend.
use crate::error::EngineError;
use chrono::Utc;
use shared::models::{SavedTripRecord, TripParameters};
use std::collections::HashMap;
use std::path::PathBuf;

/// Key under which the whole saved-trip collection is stored.
pub const SAVED_TRIPS_KEY: &str = "savedTrips";

/// A durable string key-value store.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), EngineError>;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EngineError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBackend { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EngineError::StoreError(format!("cannot read '{}': {}", path.display(), e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EngineError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write to a sibling file first so a failed write never truncates the store.
        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, value)?;
        std::fs::rename(&staging, &path)?;
        Ok(())
    }
}

/// Saved-trip operations. Every call may fail; callers report the failure
/// and carry on.
pub trait TripStore {
    /// All records, newest first.
    fn list(&self) -> Result<Vec<SavedTripRecord>, EngineError>;
    fn get(&self, id: &str) -> Result<Option<SavedTripRecord>, EngineError>;
    /// Stores a new record and returns its generated id.
    fn save(&mut self, name: &str, trip: &TripParameters) -> Result<String, EngineError>;
    /// Replaces name and data of `id`. Unknown ids are ignored.
    fn update(&mut self, id: &str, name: &str, trip: &TripParameters) -> Result<(), EngineError>;
    /// Removes `id`. Unknown ids are ignored.
    fn delete(&mut self, id: &str) -> Result<(), EngineError>;
}

pub struct SavedTrips<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> SavedTrips<B> {
    pub fn new(backend: B) -> Self {
        SavedTrips { backend }
    }

    fn write_all(&mut self, records: &[SavedTripRecord]) -> Result<(), EngineError> {
        let raw = serde_json::to_string(records)?;
        self.backend.set(SAVED_TRIPS_KEY, &raw)
    }
}

impl SavedTrips<FileBackend> {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        SavedTrips::new(FileBackend::new(dir))
    }
}

impl<B: KeyValueBackend> TripStore for SavedTrips<B> {
    fn list(&self) -> Result<Vec<SavedTripRecord>, EngineError> {
        match self.backend.get(SAVED_TRIPS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn get(&self, id: &str) -> Result<Option<SavedTripRecord>, EngineError> {
        Ok(self.list()?.into_iter().find(|record| record.id == id))
    }

    fn save(&mut self, name: &str, trip: &TripParameters) -> Result<String, EngineError> {
        let mut records = self.list()?;
        let now = Utc::now();
        let record = SavedTripRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            data: trip.clone(),
            created_at: now,
            updated_at: now,
        };
        let id = record.id.clone();
        records.insert(0, record);
        self.write_all(&records)?;
        tracing::info!(id = %id, name = %name, destination = %trip.destination, "Saved trip");
        Ok(id)
    }

    fn update(&mut self, id: &str, name: &str, trip: &TripParameters) -> Result<(), EngineError> {
        let mut records = self.list()?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            tracing::warn!(id = %id, "Update skipped, no saved trip with this id");
            return Ok(());
        };
        record.name = name.to_string();
        record.data = trip.clone();
        record.updated_at = Utc::now();
        self.write_all(&records)?;
        tracing::info!(id = %id, name = %name, "Updated trip");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), EngineError> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            tracing::warn!(id = %id, "Delete skipped, no saved trip with this id");
            return Ok(());
        }
        self.write_all(&records)?;
        tracing::info!(id = %id, "Deleted trip");
        Ok(())
    }
}
