//! Resource reader
//!
//! Reads a whole resource into memory after checking its size.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{IniError, Result};

/// Read the full content of `path`
///
/// The size reported by the filesystem is checked against `max_size` before
/// the file is opened; an oversized resource is never read.
pub fn read_resource(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IniError::NotFound {
            path: path.to_path_buf(),
        },
        _ => IniError::Stat {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let size = metadata.len();
    if size > max_size {
        return Err(IniError::TooLarge {
            size,
            max: max_size,
        });
    }

    let capacity = usize::try_from(size).map_err(|_| IniError::TooLarge {
        size,
        max: max_size,
    })?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity)?;

    let read_error = |source: io::Error| IniError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let actual = file
        .take(size)
        .read_to_end(&mut buffer)
        .map_err(read_error)? as u64;

    if actual != size {
        return Err(IniError::ShortRead {
            path: path.to_path_buf(),
            expected: size,
            actual,
        });
    }

    debug!(path = %path.display(), bytes = size, "read resource");
    Ok(buffer)
}
