//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-review/`, `~/.cache/gh-review/`
//! - macOS: `~/Library/Application Support/gh-review/`, `~/Library/Caches/gh-review/`
//! - Windows: `%APPDATA%\gh-review\`, `%LOCALAPPDATA%\gh-review\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-review";

/// Name of the config file looked up in the working and home directories.
pub const CONFIG_FILE: &str = ".gh-review.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the config file inside the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// `~/.gh-review.toml`, if the home directory is known
pub fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_app_config_path() {
        let path = app_config_path().unwrap();
        assert!(path.ends_with("gh-review/config.toml"));
    }

    #[test]
    fn test_home_config_path_name() {
        if let Some(path) = home_config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
