use super::{constants::*, likely_bmp};
use crate::error::BmpError;
use core::ops::Range;
use endian_writer::{EndianReader, LittleEndianReader};

/// The fields of a palette indexed, uncompressed bitmap header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfo {
    /// Declared (and verified) length of the whole file.
    pub file_size: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels. Rows are stored bottom-up.
    pub height: u32,
    /// Bits per pixel, between 1 and 8.
    pub bit_depth: u8,
}

impl BmpInfo {
    /// Number of colour table entries, `2^bit_depth`.
    #[inline]
    pub const fn palette_entries(&self) -> usize {
        1 << self.bit_depth
    }

    /// Byte range of the colour table inside the file.
    #[inline]
    pub const fn palette_range(&self) -> Range<usize> {
        BMP_PALETTE_OFFSET..BMP_PALETTE_OFFSET + self.palette_entries() * BMP_PALETTE_ENTRY_SIZE
    }

    /// Pixels packed into each byte of the pixel array.
    #[inline]
    pub const fn pixels_per_byte(&self) -> u32 {
        8 / self.bit_depth as u32
    }

    /// Length of the pixel array, which ends at the end of the file.
    #[inline]
    pub const fn pixel_data_len(&self) -> u128 {
        self.width as u128 * self.height as u128 * self.bit_depth as u128 / 8
    }
}

/// Parses the header of a bitmap and checks that its palette and pixel array fit.
///
/// # Errors
///
/// - [`BmpError::TooShort`] / [`BmpError::BadSignature`] when this is not a bitmap.
/// - [`BmpError::SizeMismatch`] when the declared size is not the buffer length.
/// - [`BmpError::Compressed`] for any compression other than `BI_RGB`.
/// - [`BmpError::InvalidDimensions`] for a zero or negative width or height.
///   Top-down bitmaps (negative height) are therefore refused.
/// - [`BmpError::UnsupportedBitDepth`] for true colour images.
/// - [`BmpError::TruncatedPalette`] / [`BmpError::TruncatedPixelData`] when the
///   colour table or pixel array would run past the end of the buffer.
pub fn parse_bmp(data: &[u8]) -> Result<BmpInfo, BmpError> {
    if data.len() < BMP_HEADER_SIZE {
        return Err(BmpError::TooShort(data.len()));
    }
    if !likely_bmp(data) {
        return Err(BmpError::BadSignature);
    }

    // SAFETY: data.len() >= BMP_HEADER_SIZE (54); the furthest field read is the
    // compression u32 at offset 30.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (file_size, width, height, bit_depth, compression) = unsafe {
        (
            reader.read_u32_at(FILE_SIZE_OFFSET as isize),
            reader.read_u32_at(WIDTH_OFFSET as isize) as i32,
            reader.read_u32_at(HEIGHT_OFFSET as isize) as i32,
            reader.read_u16_at(BIT_COUNT_OFFSET as isize),
            reader.read_u32_at(COMPRESSION_OFFSET as isize),
        )
    };

    if file_size as usize != data.len() {
        return Err(BmpError::SizeMismatch {
            declared: file_size,
            actual: data.len(),
        });
    }

    if compression != COMPRESSION_NONE {
        return Err(BmpError::Compressed(compression));
    }

    if width <= 0 || height <= 0 {
        return Err(BmpError::InvalidDimensions { width, height });
    }

    if bit_depth == 0 || bit_depth > MAX_INDEXED_BIT_DEPTH {
        return Err(BmpError::UnsupportedBitDepth(bit_depth));
    }

    let info = BmpInfo {
        file_size,
        width: width as u32,
        height: height as u32,
        bit_depth: bit_depth as u8,
    };

    let palette = info.palette_range();
    if palette.end > data.len() {
        return Err(BmpError::TruncatedPalette {
            required: palette.len(),
            available: data.len() - BMP_PALETTE_OFFSET,
        });
    }

    let available = data.len() - palette.end;
    let required = info.pixel_data_len();
    if required > available as u128 {
        return Err(BmpError::TruncatedPixelData {
            required,
            available,
        });
    }

    Ok(info)
}
