/// Header field offsets and sizes.
pub mod constants;

/// Determine if a buffer starts like a bitmap file.
pub mod likely_bmp;

/// Read and check the fields of a bitmap header.
pub mod parse_bmp;

pub use constants::{BMP_HEADER_SIZE, BMP_PALETTE_ENTRY_SIZE, BMP_PALETTE_OFFSET};
pub use likely_bmp::*;
pub use parse_bmp::*;
