use std::path::PathBuf;
use thiserror::Error;
use tile_repack::ConvertError;

/// The command line could not be turned into a conversion.
#[derive(Debug, Error)]
pub enum UsageError {
    /// `-s` named no source layout in the catalog.
    #[error("Unknown source format '{0}'")]
    UnknownSource(String),
    /// `-t` named no target layout in the catalog.
    #[error("Unknown target format '{0}'")]
    UnknownTarget(String),
    /// No input path was given outside of `--formats`.
    #[error("No input file given, see --help")]
    MissingInput,
}

/// Errors from the lightweight-mmap backend.
#[derive(Debug, Error)]
pub enum LightweightMmapError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

/// Errors reading the input or writing an output.
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Opening or mapping the file failed.
    #[error("lightweight-mmap error: {0}")]
    LightweightMmap(#[from] LightweightMmapError),

    /// A standard library I/O failure, such as running out of memory for the buffer.
    #[error("I/O error: {0}")]
    Std(#[from] std::io::Error),
}

impl From<lightweight_mmap::handles::HandleOpenError> for FileIoError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::LightweightMmap(LightweightMmapError::FileHandle(e))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for FileIoError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::LightweightMmap(LightweightMmapError::MemoryMapping(e))
    }
}

/// Every way a run of the command line tool can fail.
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments did not describe a conversion.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A bitmap source was given a path without a `.bmp` extension.
    #[error("'{}' must have a .bmp extension to be read as a bitmap", .0.display())]
    NotABitmap(PathBuf),

    /// The input could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying failure.
        source: FileIoError,
    },

    /// An output could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying failure.
        source: FileIoError,
    },

    /// Validation or conversion of the input failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}
