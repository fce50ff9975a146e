//! Configuration for symlib
//!
//! Centralized configuration with sensible defaults.

use std::path::{Path, PathBuf};

use crate::container::LIB_EXTENSION;
use crate::error::{Result, SymlibError};

/// Main configuration for a symbol library
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Location
    // -------------------------------------------------------------------------
    /// Directory holding the library file
    /// Internal structure:
    ///   {lib_root}/
    ///     └── {lib_name}.kicad_sym
    pub lib_root: PathBuf,

    /// Library name, used as the file stem
    pub lib_name: String,

    // -------------------------------------------------------------------------
    // Write Checks
    // -------------------------------------------------------------------------
    /// Reject payloads that would introduce a second record boundary
    pub check_payloads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lib_root: PathBuf::from("./library"),
            lib_name: "lcsc".to_string(),
            check_payloads: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the library file
    pub fn library_path(&self) -> PathBuf {
        self.lib_root
            .join(format!("{}.{}", self.lib_name, LIB_EXTENSION))
    }

    /// Directory that must exist before the library file can be written
    pub fn lib_root(&self) -> &Path {
        &self.lib_root
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the library root directory
    pub fn lib_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lib_root = path.into();
        self
    }

    /// Set the library name (file stem)
    pub fn lib_name(mut self, name: impl Into<String>) -> Self {
        self.config.lib_name = name.into();
        self
    }

    /// Enable or disable payload boundary checks
    pub fn check_payloads(mut self, enabled: bool) -> Self {
        self.config.check_payloads = enabled;
        self
    }

    /// Validate and return the config
    pub fn build(self) -> Result<Config> {
        let name = &self.config.lib_name;
        if name.is_empty() {
            return Err(SymlibError::Config("library name is empty".to_string()));
        }
        if name.contains(['/', '\\']) {
            return Err(SymlibError::Config(format!(
                "library name must not contain a path separator: {}",
                name
            )));
        }
        Ok(self.config)
    }
}
