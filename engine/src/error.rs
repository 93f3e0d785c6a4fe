use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid trip: {0}")]
    InvalidTrip(String),

    #[error("Trip store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV export error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// What the user was trying to do when an error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Load,
    Update,
    Delete,
    Export,
}

impl EngineError {
    /// Short, non-fatal message for the user. The full error goes to the log.
    pub fn notice(&self, operation: Operation) -> String {
        tracing::error!(?operation, error = %self, "Operation failed");
        match (operation, self) {
            (_, EngineError::InvalidTrip(msg)) => format!("Invalid trip: {}", msg),
            (Operation::Save, _) => "Failed to save trip".to_string(),
            (Operation::Load, _) => "Failed to load saved trips".to_string(),
            (Operation::Update, _) => "Failed to update trip".to_string(),
            (Operation::Delete, _) => "Failed to delete trip".to_string(),
            (Operation::Export, _) => "Failed to export trip".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_per_operation() {
        let err = EngineError::StoreError("quota exceeded".to_string());
        assert_eq!(err.notice(Operation::Save), "Failed to save trip");
        assert_eq!(err.notice(Operation::Delete), "Failed to delete trip");
    }

    #[test]
    fn test_notice_keeps_validation_detail() {
        let err = EngineError::InvalidTrip("travellers must be at least 1".to_string());
        assert_eq!(err.notice(Operation::Save), "Invalid trip: travellers must be at least 1");
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Serialization { .. }));
    }
}
