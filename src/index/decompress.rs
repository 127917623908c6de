use std::io::Read;

use flate2::read::MultiGzDecoder;

use crate::error::{PkgvizError, Result};

/// Inflates a gzip stream (concatenated members included) into UTF-8 text.
pub fn gunzip(bytes: &[u8]) -> Result<String> {
    let mut decoder = MultiGzDecoder::new(bytes);
    let mut text = String::new();
    decoder
        .read_to_string(&mut text)
        .map_err(PkgvizError::Decompress)?;
    Ok(text)
}
