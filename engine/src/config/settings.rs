// Engine settings, loaded from a JSON file next to the binary or given via --config
use crate::error::EngineError;
use serde::Deserialize;
use shared::utils::DEFAULT_CURRENCY;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    /// ISO 4217 code used when formatting amounts.
    pub currency: String,
    /// Directory holding the saved-trips store.
    pub store_dir: PathBuf,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            currency: DEFAULT_CURRENCY.to_string(),
            store_dir: PathBuf::from(".trip-expense"),
        }
    }
}

impl EngineSettings {
    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let settings: EngineSettings = serde_json::from_str(&raw).map_err(|e| {
            EngineError::ConfigError(format!("malformed '{}': {}", path.display(), e))
        })?;
        if settings.currency.trim().is_empty() {
            return Err(EngineError::ConfigError("currency must not be empty".to_string()));
        }
        tracing::info!(path = %path.display(), currency = %settings.currency, "Loaded settings");
        Ok(settings)
    }
}
