pub mod control;
pub mod decompress;
pub mod fetch;

pub use control::parse_control_file;
pub use decompress::gunzip;
pub use fetch::{source_for, FileIndexSource, HttpIndexSource, IndexSource};

use crate::core::package::PackageIndex;
use crate::error::Result;
use crate::observer::ProgressObserver;

/// Fetches, inflates and parses the `Packages.gz` index at `location`.
pub fn load_index(
    source: &dyn IndexSource,
    location: &str,
    observer: &dyn ProgressObserver,
) -> Result<PackageIndex> {
    observer.fetch_started(location);
    let compressed = match source.fetch(location) {
        Ok(bytes) => bytes,
        Err(err) => {
            observer.fetch_failed(location);
            return Err(err);
        }
    };
    observer.fetch_finished(compressed.len());
    let text = gunzip(&compressed)?;
    let index = parse_control_file(&text);
    observer.index_parsed(index.len());
    Ok(index)
}
