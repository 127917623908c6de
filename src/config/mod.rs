pub mod resolve;
pub mod settings;

pub use resolve::{
    load_settings, resolve_config_path, ConfigLocation, CONFIG_ENV, DEFAULT_CONFIG_FILE,
};
pub use settings::{FetchConfig, OutputConfig, Settings};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config at {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
