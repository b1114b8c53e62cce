//! Read-only configuration view.
//!
//! Wraps one merged mapping tree and answers multi-level key-path lookups.
//! The view owns its tree outright and never mutates it, so a constructed
//! view is safe to share across threads without locking.

use crate::error::ConfigError;
use crate::value::{Mapping, Value};

/// Immutable path-based view over a merged configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigView {
    root: Mapping,
}

impl ConfigView {
    /// Wrap a mapping tree. The view takes ownership; nothing else can
    /// mutate the tree afterwards.
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Look up the value at `path`, walking one key per segment.
    ///
    /// Any non-final segment that resolves to a missing key or to a
    /// non-mapping value short-circuits to `Ok(None)`, even when a shorter
    /// valid path exists as a sibling. An empty path is rejected.
    pub fn get(&self, path: &[&str]) -> Result<Option<&Value>, ConfigError> {
        let (last, intermediate) = path.split_last().ok_or(ConfigError::EmptyKeyPath)?;

        let mut current = &self.root;
        for segment in intermediate {
            match current.get(*segment) {
                Some(Value::Mapping(inner)) => current = inner,
                _ => return Ok(None),
            }
        }

        Ok(current.get(*last))
    }

    /// [`get`](Self::get) with a caller-supplied fallback. Fails only on an
    /// empty path; an unresolvable path yields `default`.
    pub fn get_or<'a>(
        &'a self,
        path: &[&str],
        default: &'a Value,
    ) -> Result<&'a Value, ConfigError> {
        Ok(self.get(path)?.unwrap_or(default))
    }

    /// Extract the mapping at `path` as a new view.
    ///
    /// An absent path, or one that resolves to a non-mapping value, yields a
    /// view over an empty mapping rather than an error. Only an empty path
    /// fails.
    pub fn subview(&self, path: &[&str]) -> Result<ConfigView, ConfigError> {
        let sub = match self.get(path)? {
            Some(Value::Mapping(inner)) => inner.clone(),
            _ => Mapping::new(),
        };
        Ok(ConfigView::new(sub))
    }

    /// Direct access to a top-level key that must exist.
    pub fn require(&self, key: &str) -> Result<&Value, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::EmptyKeyPath);
        }
        self.root
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl PartialEq<Mapping> for ConfigView {
    fn eq(&self, other: &Mapping) -> bool {
        self.root == *other
    }
}

impl PartialEq<Value> for ConfigView {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Mapping(map) => self.root == *map,
            _ => false,
        }
    }
}
