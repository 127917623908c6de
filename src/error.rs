use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum PkgvizError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to fetch {url}: server responded with {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("failed to decompress package index: {0}")]
    Decompress(#[source] std::io::Error),
    #[error("failed to {action} {path}: {source}")]
    Output {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PkgvizError>;
