use std::env;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, Settings};

pub const CONFIG_ENV: &str = "PKGVIZ_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "pkgviz.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Named on the command line or through the environment; must exist.
    Explicit(PathBuf),
    /// Picked up from the working directory when present.
    Implicit(PathBuf),
}

pub fn resolve_config_path(explicit: Option<PathBuf>, cwd: &Path) -> ConfigLocation {
    resolve_config_path_with_env(explicit, env::var_os(CONFIG_ENV).map(PathBuf::from), cwd)
}

pub fn resolve_config_path_with_env(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    cwd: &Path,
) -> ConfigLocation {
    if let Some(path) = explicit {
        return ConfigLocation::Explicit(path);
    }

    if let Some(path) = from_env.filter(|path| !path.as_os_str().is_empty()) {
        return ConfigLocation::Explicit(path);
    }

    ConfigLocation::Implicit(cwd.join(DEFAULT_CONFIG_FILE))
}

pub fn load_settings(location: &ConfigLocation) -> Result<Settings, ConfigError> {
    match location {
        ConfigLocation::Explicit(path) => {
            if !path.is_file() {
                return Err(ConfigError::ConfigNotFound(path.clone()));
            }
            read_settings(path)
        }
        ConfigLocation::Implicit(path) => {
            if !path.is_file() {
                return Ok(Settings::default());
            }
            read_settings(path)
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}
