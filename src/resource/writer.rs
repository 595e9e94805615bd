//! Resource writer
//!
//! Writes a rendered buffer to a file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::config::WriteMode;
use crate::error::{IniError, Result};

/// Write `bytes` to `path`, creating the file when it does not exist
pub fn write_resource(path: &Path, bytes: &[u8], mode: WriteMode, sync: bool) -> Result<()> {
    let write_error = |source: io::Error| IniError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    let mut file = options.open(path).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    if sync {
        file.sync_all().map_err(write_error)?;
    }

    debug!(path = %path.display(), bytes = bytes.len(), ?mode, "wrote resource");
    Ok(())
}
