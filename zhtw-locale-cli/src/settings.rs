use std::path::Path;

use zhtw_locale::Config;

/// Loads `--config` if given, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, String> {
    match path {
        Some(path) => Config::load(path)
            .map_err(|e| format!("Failed to load config '{}': {}", path.display(), e)),
        None => Ok(Config::default()),
    }
}
