//! Base config file source: <root>/config.toml

use crate::error::ConfigError;
use crate::loader::read_mapping;
use crate::value::Mapping;
use std::path::{Path, PathBuf};

/// Path to the base config file under `root`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join("config.toml")
}

/// Load the base config file. The base document is required; a missing file
/// is a [`ConfigError::FileNotFound`].
pub fn load(root: &Path) -> Result<Mapping, ConfigError> {
    read_mapping(&config_path(root))
}
