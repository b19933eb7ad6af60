//! Configuration management for repo-setup
//!
//! - `types`: the immutable settings record and its up-front checks
//! - `loader`: YAML file loading and per-key extraction

pub mod loader;
pub mod types;

pub use types::SetupConfig;
