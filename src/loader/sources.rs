//! Layered configuration sources, lowest precedence first.

pub mod base_file;
pub mod user_file;
