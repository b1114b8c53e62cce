//! User override file source: <root>/config.user.toml

use crate::error::ConfigError;
use crate::loader::read_mapping;
use crate::value::Mapping;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Path to the user override file under `root`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join("config.user.toml")
}

/// Load the user override file if it exists.
///
/// The override layer is optional; absence means the base document is used
/// unmodified.
pub fn load(root: &Path) -> Result<Option<Mapping>, ConfigError> {
    let path = config_path(root);
    if path.exists() {
        Ok(Some(read_mapping(&path)?))
    } else {
        warn!(
            config_path = %path.display(),
            "User configuration file not found. Base configuration values apply unmodified."
        );
        Ok(None)
    }
}
