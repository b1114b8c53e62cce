//! Strata: Layered Configuration
//!
//! Loads a base configuration document, overlays an optional user-supplied
//! document, and exposes the merged result through an immutable, path-based
//! read view. Merging is a pure recursive deep merge where the overlay wins
//! on any colliding key, down to the deepest differing leaf.

pub mod error;
pub mod loader;
pub mod merge;
pub mod value;
pub mod view;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use merge::merge;
pub use value::{Mapping, Value};
pub use view::ConfigView;
