use std::path::PathBuf;

/// Why an encoded state string was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("expected 3 ':'-separated fields, found {0}")]
    FieldCount(usize),

    #[error("expected 6 ','-separated rows, found {0}")]
    RowCount(usize),

    #[error("player id {0:?} is not a decimal integer")]
    PlayerId(String),

    #[error("row {index} value {value:?} is not a decimal integer")]
    RowValue { index: usize, value: String },

    #[error("row {index} value {value} does not fit in seven base-3 digits")]
    RowRange { index: usize, value: u32 },
}

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Column out of range or already full. Both look the same to the caller.
    #[error("invalid move: column {column} is out of range or full")]
    InvalidMove { column: usize },

    #[error("malformed state {payload:?}: {reason}")]
    MalformedState {
        payload: String,
        reason: MalformedReason,
    },
}

/// Errors that can occur when loading or saving the display-name cache.
#[derive(Debug, thiserror::Error)]
pub enum NameStoreError {
    #[error("failed to read name cache {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse name cache {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = GameError::InvalidMove { column: 7 };
        assert_eq!(
            err.to_string(),
            "invalid move: column 7 is out of range or full"
        );
    }

    #[test]
    fn test_malformed_state_display() {
        let err = GameError::MalformedState {
            payload: "111:222:0,0,0".to_string(),
            reason: MalformedReason::RowCount(3),
        };
        assert_eq!(
            err.to_string(),
            "malformed state \"111:222:0,0,0\": expected 6 ','-separated rows, found 3"
        );
    }

    #[test]
    fn test_name_store_error_display() {
        let err = NameStoreError::Read {
            path: PathBuf::from("names.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read name cache names.json: denied");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("render.empty must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: render.empty must not be empty"
        );
    }
}
