pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::toml_config::FileConfig;
pub use crate::core::{menu::MenuShell, roster::RosterStore};
pub use crate::domain::model::Student;
pub use crate::utils::error::{Result, RosterError};
