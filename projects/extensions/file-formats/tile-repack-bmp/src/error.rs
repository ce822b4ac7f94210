//! Bitmap header errors.

use thiserror::Error;

/// A bitmap header that cannot be used as a tile source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BmpError {
    /// The buffer cannot hold the 54 byte header.
    #[error("File is too short to be a bitmap ({0} bytes)")]
    TooShort(usize),

    /// The first two bytes are not `"BM"`.
    #[error("Not a bitmap file")]
    BadSignature,

    /// The size stored in the header disagrees with the buffer.
    #[error("The bitmap header declares {declared} bytes but the file holds {actual}")]
    SizeMismatch {
        /// Size stored at offset 2.
        declared: u32,
        /// Length of the buffer.
        actual: usize,
    },

    /// The pixel array is compressed.
    #[error("Compressed bitmaps are not supported (compression type {0})")]
    Compressed(u32),

    /// Width or height is zero or negative.
    #[error("Invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions {
        /// Width stored at offset 18.
        width: i32,
        /// Height stored at offset 22.
        height: i32,
    },

    /// The image is not palette indexed.
    #[error("Only palette indexed bitmaps up to 8 bits per pixel are supported, got {0} bits")]
    UnsupportedBitDepth(u16),

    /// The colour table runs past the end of the buffer.
    #[error("The palette needs {required} bytes but only {available} follow the header")]
    TruncatedPalette {
        /// Bytes the colour table occupies.
        required: usize,
        /// Bytes after the header.
        available: usize,
    },

    /// The pixel array does not fit between the palette and the end of the buffer.
    #[error("The pixel data needs {required} bytes but only {available} follow the palette")]
    TruncatedPixelData {
        /// Bytes the pixel array occupies.
        required: u128,
        /// Bytes after the colour table.
        available: usize,
    },
}
