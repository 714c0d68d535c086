#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "srms")]
#[command(about = "A small student roster manager")]
pub struct CliConfig {
    /// Base directory for the roster data file
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    /// Roster data file name, relative to data-dir
    #[arg(long, default_value = "students.dat")]
    pub data_file: String,

    /// Optional TOML configuration file; its settings drive the session
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_non_empty_string("data_file", &self.data_file)?;
        validate_path("data_file", &self.data_file)?;
        Ok(())
    }
}
