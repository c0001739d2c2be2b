//! Configuration and file management for gh-review
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Review configuration (ReviewConfig)

pub mod config_file;
pub mod paths;
pub mod review_config;

pub use config_file::load_config_file;
pub use review_config::ReviewConfig;
