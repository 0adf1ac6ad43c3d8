//! Configuration loading functionality.
//!
//! This module provides the [`CalendarLoader`] type for loading region
//! calendar configurations from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::calendar::RegionCalendar;
use crate::error::{EngineError, EngineResult};

use super::types::RegionConfig;

/// Loads and provides access to region calendar configuration.
///
/// The `CalendarLoader` reads every `*.yaml` file in a directory, one file
/// per region, and provides keyed access to the parsed configurations.
///
/// # Directory Structure
///
/// ```text
/// config/holidays/
/// ├── germany.yaml
/// └── <further regions>.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::CalendarLoader;
///
/// let loader = CalendarLoader::load("./config/holidays").unwrap();
/// let calendar = loader.calendar("germany").unwrap();
/// println!("Loaded calendar for {}", calendar.region_code());
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    regions: HashMap<String, RegionConfig>,
}

impl CalendarLoader {
    /// Loads all region configurations from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/holidays")
    ///
    /// # Returns
    ///
    /// Returns a `CalendarLoader` instance on success, or an error if:
    /// - The directory is missing or contains no region files
    /// - Any file contains invalid YAML
    /// - Any holiday rule is malformed
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound { path: path_str });
        }

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut regions = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

            let file_path = entry.path();
            if file_path.extension().is_some_and(|ext| ext == "yaml") {
                let region = Self::load_yaml(&file_path)?;
                Self::validate(&region, &file_path)?;
                regions.insert(region.code.clone(), region);
            }
        }

        if regions.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no region files found)", path_str),
            });
        }

        Ok(Self { regions })
    }

    /// Loads and parses a single region YAML file.
    fn load_yaml(path: &Path) -> EngineResult<RegionConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks every holiday rule of a parsed region.
    fn validate(region: &RegionConfig, path: &Path) -> EngineResult<()> {
        for rule in &region.holidays {
            rule.validate().map_err(|message| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message,
            })?;
        }
        Ok(())
    }

    /// Gets a region configuration by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The region code (e.g., "germany")
    ///
    /// # Returns
    ///
    /// Returns the region configuration if found, or `RegionNotFound`.
    pub fn get_region(&self, code: &str) -> EngineResult<&RegionConfig> {
        self.regions
            .get(code)
            .ok_or_else(|| EngineError::RegionNotFound {
                code: code.to_string(),
            })
    }

    /// Builds a [`RegionCalendar`] for the given region code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::CalendarLoader;
    ///
    /// let loader = CalendarLoader::load("./config/holidays")?;
    /// let calendar = loader.calendar("germany")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn calendar(&self, code: &str) -> EngineResult<RegionCalendar> {
        Ok(RegionCalendar::new(self.get_region(code)?.clone()))
    }

    /// The codes of all loaded regions.
    pub fn region_codes(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }
}
