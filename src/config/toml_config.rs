use crate::core::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration file, an alternative to command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub roster: RosterSection,
    pub storage: StorageSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_dir: String,
    pub data_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
}

impl FileConfig {
    /// Loads a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("roster.name", &self.roster.name)?;
        validate_path("storage.data_dir", &self.storage.data_dir)?;
        validate_non_empty_string("storage.data_file", &self.storage.data_file)?;
        validate_path("storage.data_file", &self.storage.data_file)?;
        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for FileConfig {
    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn data_file(&self) -> &str {
        &self.storage.data_file
    }

    fn verbose(&self) -> bool {
        self.verbose()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
