use super::constants::*;

/// Determines if the given data likely represents a bitmap.
/// Only the `"BM"` signature and the header length are checked; use [`parse_bmp`]
/// to validate the remaining fields.
///
/// [`parse_bmp`]: crate::bmp::parse_bmp::parse_bmp
#[inline(always)]
pub fn likely_bmp(data: &[u8]) -> bool {
    data.len() >= BMP_HEADER_SIZE && u16::from_le_bytes([data[0], data[1]]) == BMP_MAGIC
}
