//! Dumps saved to disk (e.g. `curl .../goroutine?debug=2 > dump1.txt`).

use crate::utils::error::CollectionError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open a dump file for line-by-line parsing
pub fn open_dump_file(path: impl AsRef<Path>) -> Result<BufReader<File>, CollectionError> {
    let path = path.as_ref();

    debug!("Opening dump file: {}", path.display());

    let file = File::open(path).map_err(|source| CollectionError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(BufReader::new(file))
}
