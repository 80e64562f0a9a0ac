//! Demo settings, read from an optional TOML file.
//!
//! ```toml
//! log_filter = "creational_idioms=debug"
//! numbers = [4, -7, 19]
//! letter = "Q"
//!
//! [notebook]
//! motherboard = "Asus"
//! power_supply = "Corsair"
//! cpu = "Ryzen 7"
//! video_card = "Radeon"
//! ```

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConstructionError;
use crate::p2_builder::NotebookSpec;
use crate::telemetry::DEFAULT_FILTER;

pub const SETTINGS_FILE: &str = "creational.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSettings {
    pub log_filter: String,
    pub numbers: Vec<i32>,
    pub letter: char,
    pub notebook: Option<NotebookSpec>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
            numbers: vec![1, 2, 3],
            letter: 'A',
            notebook: None,
        }
    }
}

impl DemoSettings {
    pub fn from_toml(content: &str) -> Result<Self, ConstructionError> {
        toml::from_str(content).map_err(|err| ConstructionError::settings("<inline>", err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConstructionError> {
        let content = fs::read_to_string(path)
            .map_err(|err| ConstructionError::settings(path, err.to_string()))?;
        toml::from_str(&content).map_err(|err| ConstructionError::settings(path, err.to_string()))
    }

    /// Like [`DemoSettings::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConstructionError> {
        match fs::metadata(path) {
            Ok(_) => Self::load(path),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConstructionError::settings(path, err.to_string())),
        }
    }
}
