use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_WORKERS};
use crate::error::{CourseLoadError, Result};
use crate::table::ColumnLayout;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub columns: ColumnLayout,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub allowed_extensions: Vec<String>,
    pub workers: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl ExtractionConfig {
    /// True when `filename` has an extension (after the last dot) in the
    /// allowed list, compared case-insensitively.
    pub fn is_allowed_file(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => self
                .allowed_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CourseLoadError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.workers == 0 {
            return Err(CourseLoadError::Config("extraction.workers must be at least 1".into()));
        }
        Ok(())
    }
}
