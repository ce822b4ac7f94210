//! Whole-file reads and writes through memory mappings.

use crate::error::FileIoError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs::File;
use std::io;
use std::path::Path;

/// Maps `path` and copies its contents into an owned buffer.
pub fn read_file(path: &Path) -> Result<Vec<u8>, FileIoError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| io::Error::from(io::ErrorKind::OutOfMemory))?;

    // Zero length files cannot be mapped.
    if size != 0 {
        let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
        buffer.extend_from_slice(mapping.as_slice());
    }
    Ok(buffer)
}

/// Creates `path`, replacing any existing file, and fills it with `data`.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), FileIoError> {
    if data.is_empty() {
        File::create(path)?;
        return Ok(());
    }

    let handle = ReadWriteFileHandle::create_preallocated(path, data.len() as i64)?;
    let mut mapping = ReadWriteMmap::new(&handle, 0, data.len())?;
    mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}
