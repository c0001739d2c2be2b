use crate::paths::{app_config_path, home_config_path, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Load config file content
///
/// Searches, in order:
/// 1. `.gh-review.toml` in the current working directory
/// 2. `~/.gh-review.toml`
/// 3. `config.toml` in the application config directory
///
/// Returns the content of the first readable file, None otherwise.
pub fn load_config_file() -> Option<String> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(home_config_path());
    candidates.extend(app_config_path().ok());

    read_first(&candidates)
}

fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}
