//! Model-config file storage
//!
//! Directory structure:
//! ~/.stakeval/
//!   config.yaml          # Active model, preferences
//!   stakeval.log
//!   models/
//!     sky.yaml
//!     stake-revenue.yaml

use std::fs;
use std::path::{Path, PathBuf};

use stakeval_core::ModelConfig;

/// Configuration stored in config.yaml
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct DataConfig {
    /// The model to start with when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_model: Option<String>,
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding saved model configs
pub struct ModelStore {
    root: PathBuf,
}

impl ModelStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.stakeval/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stakeval")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn models_dir(&self) -> PathBuf {
        self.root.join("models")
    }

    fn model_path(&self, name: &str) -> PathBuf {
        self.models_dir()
            .join(format!("{}.yaml", sanitize_filename(name)))
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.models_dir())
            .map_err(|e| StorageError::Io(format!("Failed to create models directory: {}", e)))
    }

    /// Load the config file; a missing file is the default config
    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(DataConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Save the config file
    pub fn save_config(&self, config: &DataConfig) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;

        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Load a saved model config by name
    pub fn load(&self, name: &str) -> Result<ModelConfig, StorageError> {
        Self::load_path(&self.model_path(name))
    }

    /// Load a model config from an explicit YAML file
    pub fn load_path(path: &Path) -> Result<ModelConfig, StorageError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse model config: {}", e)))
    }

    /// Save a model config under its own name, returning the file path
    pub fn save(&self, config: &ModelConfig) -> Result<PathBuf, StorageError> {
        self.init()?;

        let yaml = serde_saphyr::to_string(config).map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize model config: {}", e))
        })?;

        let path = self.model_path(&config.name);
        fs::write(&path, yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(path)
    }

    /// List the names of saved model configs
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        let dir = self.models_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir)
            .map_err(|e| StorageError::Io(format!("Failed to read models directory: {}", e)))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| StorageError::Io(format!("Failed to read entry: {}", e)))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Make a model name safe to use as a file name
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
