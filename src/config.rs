//! Configuration loading and management

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAMES;
use crate::context::Lang;
use crate::error::{Error, Result};

/// Optional per-repository defaults, loaded from `dayforge.json`,
/// `dayforge.yaml` or `dayforge.yml` in the puzzle repository root.
/// Command line arguments take precedence over these values.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Settings {
    /// Competition year to scaffold for.
    #[serde(default)]
    pub year: Option<u32>,

    /// Languages to scaffold when none are given on the command line.
    #[serde(default)]
    pub langs: Option<Vec<Lang>>,

    /// Directory holding downloaded puzzle inputs, relative to the root.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Custom template pack root (one subdirectory per language).
    #[serde(default)]
    pub templates: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from the first config file found in `root`.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = root.join(config_file_name);
            if !config_file_path.exists() {
                continue;
            }

            let content = std::fs::read_to_string(&config_file_path)?;
            let settings = match *config_file_name {
                "dayforge.json" => serde_json::from_str(&content).map_err(|e| {
                    Error::ConfigParseError {
                        config_file: config_file_path.display().to_string(),
                        e: e.to_string(),
                    }
                })?,
                "dayforge.yaml" | "dayforge.yml" => serde_yaml::from_str(&content)
                    .map_err(|e| Error::ConfigParseError {
                        config_file: config_file_path.display().to_string(),
                        e: e.to_string(),
                    })?,
                _ => unreachable!(),
            };

            return Ok(settings);
        }

        Ok(Self::default())
    }
}
