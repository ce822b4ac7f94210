//! Bitmap header layout (`BITMAPFILEHEADER` followed by `BITMAPINFOHEADER`).

/// `"BM"` read as a little endian u16.
pub(crate) const BMP_MAGIC: u16 = u16::from_le_bytes(*b"BM");

/// Size of the file header plus the info header.
pub const BMP_HEADER_SIZE: usize = 54;

pub(crate) const FILE_SIZE_OFFSET: usize = 2;
pub(crate) const WIDTH_OFFSET: usize = 18;
pub(crate) const HEIGHT_OFFSET: usize = 22;
pub(crate) const BIT_COUNT_OFFSET: usize = 28;
pub(crate) const COMPRESSION_OFFSET: usize = 30;

/// `BI_RGB`, the only compression value accepted.
pub(crate) const COMPRESSION_NONE: u32 = 0;

/// The colour table always starts right after the header.
pub const BMP_PALETTE_OFFSET: usize = BMP_HEADER_SIZE;

/// Bytes per colour table entry: blue, green, red, reserved.
pub const BMP_PALETTE_ENTRY_SIZE: usize = 4;

/// Deepest palette indexed bitmap.
pub(crate) const MAX_INDEXED_BIT_DEPTH: u16 = 8;
