//! Configuration loading.
//!
//! Reads the base document and, when present, the user override document,
//! merges them (user values win), and wraps the result in a [`ConfigView`].
//! Loading happens once, in the composition root; the returned view is an
//! explicit value handed to consumers, not an ambient global.

use crate::error::ConfigError;
use crate::merge::merge;
use crate::value::{mapping_from_toml, Mapping};
use crate::view::ConfigView;
use std::path::Path;
use tracing::debug;

pub mod sources;

/// Read and parse one TOML document into a [`Mapping`].
pub fn read_mapping(path: &Path) -> Result<Mapping, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::IoError(err)
        }
    })?;

    let table: toml::Table = raw.parse().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Loaded configuration document");
    Ok(mapping_from_toml(table))
}

/// Facade over the layered configuration sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the layered configuration rooted at `root`.
    ///
    /// `root/config.toml` is required; `root/config.user.toml` is overlaid
    /// on top of it when present.
    pub fn load(root: &Path) -> Result<ConfigView, ConfigError> {
        let base = sources::base_file::load(root)?;
        let user = sources::user_file::load(root)?;
        Ok(Self::assemble(base, user))
    }

    /// Load from explicit document paths instead of the conventional layout.
    pub fn load_paths(base: &Path, user: Option<&Path>) -> Result<ConfigView, ConfigError> {
        let base_mapping = read_mapping(base)?;
        let user_mapping = match user {
            Some(path) if path.exists() => Some(read_mapping(path)?),
            _ => None,
        };
        Ok(Self::assemble(base_mapping, user_mapping))
    }

    fn assemble(base: Mapping, user: Option<Mapping>) -> ConfigView {
        let merged = match user {
            Some(overlay) => merge(&base, &overlay),
            None => base,
        };
        ConfigView::new(merged)
    }
}
