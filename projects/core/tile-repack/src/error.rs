//! Error types for conversion runs.

use thiserror::Error;
use tile_repack_bmp::BmpError;
use tile_repack_formats::{CompatibilityError, TargetFormat};

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// The input buffer cannot be decoded with the requested options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputValidationError {
    /// The bitmap header is malformed or describes an unsupported image.
    #[error(transparent)]
    Bmp(#[from] BmpError),

    /// A bitmap side is not a whole number of tiles.
    #[error("Bitmap dimensions {width}x{height} are not multiples of the {tile_size}px tile size")]
    NotTileAligned {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Tile edge of the target.
        tile_size: u32,
    },

    /// The bitmap's bit depth differs from the target's.
    #[error("{target} needs a {expected} bit bitmap, got {found} bits")]
    BitDepthMismatch {
        /// Requested target layout.
        target: TargetFormat,
        /// Depth of the target.
        expected: u32,
        /// Depth declared by the bitmap.
        found: u32,
    },

    /// A raw dump shorter than a single tile.
    #[error("Input holds {len} bytes, less than one {tile_bytes} byte tile")]
    NoCompleteTile {
        /// Bytes one tile occupies in the source layout.
        tile_bytes: usize,
        /// Length of the input.
        len: usize,
    },
}

/// A buffer reservation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to reserve {requested} bytes for the {purpose}")]
pub struct ResourceError {
    /// Bytes that were requested.
    pub requested: usize,
    /// What the buffer was for.
    pub purpose: &'static str,
}

/// Errors that end a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The requested flags or source/target pair are not allowed.
    #[error(transparent)]
    Compatibility(#[from] CompatibilityError),

    /// The input does not match what the source layout expects.
    #[error(transparent)]
    InputValidation(#[from] InputValidationError),

    /// Out of memory while sizing buffers.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl From<BmpError> for ConvertError {
    fn from(e: BmpError) -> Self {
        Self::InputValidation(InputValidationError::Bmp(e))
    }
}
