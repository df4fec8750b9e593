use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::COLS;

/// Glyphs used to draw the board and the message header.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    pub empty: String,
    pub blue: String,
    pub red: String,
    pub trophy: String,
    pub handshake: String,
    /// One label per column, shown under the board and on the buttons' row
    pub column_labels: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            title: "Connect 4".to_string(),
            empty: "\u{26aa}".to_string(),
            blue: "\u{1f535}".to_string(),
            red: "\u{1f534}".to_string(),
            trophy: "\u{1f3c6}".to_string(),
            handshake: "\u{1f91d}".to_string(),
            column_labels: (1..=COLS).map(|n| format!("{n}\u{fe0f}\u{20e3}")).collect(),
        }
    }
}

/// Where the display-name cache lives.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    pub path: PathBuf,
}

impl Default for NamesConfig {
    fn default() -> Self {
        NamesConfig {
            path: PathBuf::from("name_store.json"),
        }
    }
}

/// Limits imposed by the chat platform.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Maximum callback payload size in bytes
    pub max_callback_bytes: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            max_callback_bytes: 64,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub names: NamesConfig,
    pub transport: TransportConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let render = &self.render;
        for (name, glyph) in [
            ("render.empty", &render.empty),
            ("render.blue", &render.blue),
            ("render.red", &render.red),
            ("render.trophy", &render.trophy),
            ("render.handshake", &render.handshake),
        ] {
            if glyph.is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        if render.empty == render.blue || render.empty == render.red || render.blue == render.red
        {
            return Err(ConfigError::Validation(
                "render.empty, render.blue and render.red must be distinct".into(),
            ));
        }
        if render.column_labels.len() != COLS {
            return Err(ConfigError::Validation(format!(
                "render.column_labels must have exactly {COLS} entries"
            )));
        }

        if self.names.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "names.path must not be empty".into(),
            ));
        }

        if self.transport.max_callback_bytes == 0 {
            return Err(ConfigError::Validation(
                "transport.max_callback_bytes must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
