//! Configuration loading for the fsrig CLI.
//!
//! Handles loading harness options from a JSON config file.

use std::path::Path;

use fsrig::RigOptions;
use tracing::warn;

const CONFIG_FILE_JSON: &str = "config.json";

/// Load RigOptions from the configuration file in the given home
/// directory.
///
/// Returns options with defaults if no config file is found. A present
/// but unreadable or invalid file warns and falls back to defaults.
pub fn load_config(home_dir: &Path) -> RigOptions {
    let mut options = RigOptions {
        home_dir: home_dir.to_path_buf(),
        ..RigOptions::default()
    };

    if let Some(config) = try_load_json(home_dir) {
        // Merge loaded config into defaults
        // Only the matrix is taken from the file; the home directory is
        // whatever the caller resolved.
        if !config.matrix.is_empty() {
            options.matrix = config.matrix;
        }
    }

    options
}

/// Load from an explicitly named config file. Unlike the default-path
/// lookup, a broken explicit file is an error, not a fallback.
pub fn load_config_file(home_dir: &Path, path: &Path) -> anyhow::Result<RigOptions> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let config: RigOptions = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {}", path.display(), e))?;

    Ok(RigOptions {
        home_dir: home_dir.to_path_buf(),
        matrix: config.matrix,
    })
}

fn try_load_json(home_dir: &Path) -> Option<RigOptions> {
    let config_path = home_dir.join(CONFIG_FILE_JSON);
    if !config_path.exists() {
        return None;
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            );
            return None;
        }
    };

    match serde_json::from_str::<RigOptions>(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            );
            None
        }
    }
}
