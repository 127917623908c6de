use std::path::PathBuf;

use reqwest::blocking::Client;

use crate::config::FetchConfig;
use crate::error::{PkgvizError, Result};

pub trait IndexSource {
    /// Returns the raw, still compressed, bytes stored at `location`.
    fn fetch(&self, location: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct HttpIndexSource {
    client: Client,
}

impl HttpIndexSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|err| PkgvizError::Other(anyhow::Error::new(err)))?;
        Ok(Self { client })
    }
}

impl IndexSource for HttpIndexSource {
    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let fetch_err = |err: reqwest::Error| PkgvizError::Fetch {
            url: location.to_string(),
            source: anyhow::Error::new(err),
        };
        let response = self.client.get(location).send().map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PkgvizError::HttpStatus {
                url: location.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(fetch_err)?;
        Ok(body.to_vec())
    }
}

/// Reads an index from disk, for mirrors on a local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileIndexSource;

impl IndexSource for FileIndexSource {
    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        std::fs::read(local_path(location)).map_err(|err| PkgvizError::Fetch {
            url: location.to_string(),
            source: anyhow::Error::new(err),
        })
    }
}

const FILE_SCHEME: &str = "file://";

fn local_path(location: &str) -> PathBuf {
    let has_scheme = location
        .get(..FILE_SCHEME.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(FILE_SCHEME));
    if has_scheme {
        PathBuf::from(&location[FILE_SCHEME.len()..])
    } else {
        PathBuf::from(location)
    }
}

fn is_remote_lower(lower: &str) -> bool {
    lower.starts_with("http://") || lower.starts_with("https://")
}

pub fn is_remote(location: &str) -> bool {
    is_remote_lower(&location.to_ascii_lowercase())
}

pub fn source_for(location: &str, config: &FetchConfig) -> Result<Box<dyn IndexSource>> {
    let lower = location.to_ascii_lowercase();
    if is_remote_lower(&lower) {
        return Ok(Box::new(HttpIndexSource::new(config)?));
    }
    if lower.contains("://") && !lower.starts_with(FILE_SCHEME) {
        return Err(PkgvizError::Other(anyhow::anyhow!(
            "unsupported index url scheme in '{location}'"
        )));
    }
    Ok(Box::new(FileIndexSource))
}
