//! Addressing of pixel samples inside the source buffer.
//!
//! Every layout maps `(tile, x, y)` to one byte offset. The arithmetic is signed
//! and truncating; offsets that land outside the buffer decode as `0`.
//!
//! What `x` means depends on the layout: a packed byte column for bitmaps, a
//! plane byte for the planar dumps, a pixel for half depth tiles.

use crate::geometry::{TileCoordinate, TileGrid};
use tile_repack_formats::{ConversionOptions, SourceFormat};

/// Reads pixel samples of one input buffer.
#[derive(Debug, Clone, Copy)]
pub struct SourceDecoder<'a> {
    buffer: &'a [u8],
    options: ConversionOptions,
    grid: TileGrid,
    /// Bitmap width in pixels; unused for raw dumps.
    image_width: i64,
}

impl<'a> SourceDecoder<'a> {
    /// Creates a decoder over `buffer`.
    ///
    /// `image_width` is only read for bitmap sources.
    pub fn new(buffer: &'a [u8], options: ConversionOptions, grid: TileGrid, image_width: u32) -> Self {
        Self {
            buffer,
            options,
            grid,
            image_width: image_width as i64,
        }
    }

    /// The grid this decoder addresses.
    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The options this decoder was created with.
    #[inline]
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Returns the sample at `(x, y)` of `tile`, or `0` when it lies outside the buffer.
    #[inline]
    pub fn sample(&self, tile: TileCoordinate, x: i64, y: i64) -> u8 {
        self.byte_offset(tile, x, y)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|offset| self.buffer.get(offset))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the pixel at `(x, y)` of `tile` as encoders see it.
    ///
    /// Half depth tiles keep one nibble of each sample: the high nibble in the
    /// left half of the grid, the low nibble in the right half. Every other
    /// layout returns the sample unchanged.
    #[inline]
    pub fn pixel(&self, tile: TileCoordinate, x: i64, y: i64) -> u8 {
        let sample = self.sample(tile, x, y);
        if self.options.source != SourceFormat::HalfDepth {
            sample
        } else if tile.tile_x < self.grid.tiles_x / 2 {
            sample >> 4
        } else {
            sample & 0xF
        }
    }

    /// Columns of [`Self::pixel`] per tile row that encoders read, and so the
    /// width deduplication compares.
    pub fn compare_width(&self) -> u32 {
        let grid = &self.grid;
        if grid.bitmap {
            grid.tile_size / grid.pixels_per_byte
        } else if self.options.source == SourceFormat::HalfDepth {
            grid.tile_size
        } else {
            grid.tile_depth
        }
    }

    /// Computes the byte offset of `(x, y)` inside `tile`.
    ///
    /// Returns `None` only when the layout's arithmetic is undefined (a zero divisor).
    /// The result may be negative or past the end of the buffer.
    pub fn byte_offset(&self, tile: TileCoordinate, x: i64, y: i64) -> Option<i64> {
        let tx = tile.tile_x as i64;
        let ty = tile.tile_y as i64;
        let t = self.grid.tile_size as i64;
        let file_size = self.buffer.len() as i64;
        let full = self.options.full_size;
        let split = self.options.target.is_split_plane();
        let plane = if split { x } else { tx };

        let offset = match self.options.source {
            SourceFormat::Bmp => {
                let coef = self.grid.pixels_per_byte as i64;
                let width = self.image_width;
                file_size - (((ty * t + y) * width) / coef + ((width - tx * t) / coef - x))
            }
            SourceFormat::RohgaDecr => (file_size / 2) * ((x % 4) / 2) + tx * 16 + (x % 2) + y * 2,
            SourceFormat::PceCg => 16 * ((x % 4) / 2) + tx * 32 + (x % 2) + y * 2,
            SourceFormat::Planar4_16x16 => {
                let base = (if split { tx } else { tx / 4 }) * 128;
                let plane_offset = if full {
                    x % 2
                } else {
                    (plane % 2) * 64 + ((plane % 4) / 2) * 32
                };
                let column = if split { (x / 2) * 2 } else { x };
                base + plane_offset + column + ((y * 4) << full as u32)
            }
            SourceFormat::NeoMirror => tx * 128 + ((x / 4) % 2) * 64 + (x % 4) + y * 4,
            SourceFormat::OldSprite => {
                (tx / 16) * 1024 + (tx % 4) * 8 + ((tx % 16) / 4) * 256 + (x / 4) * 4 + x / 2 + y * 32
            }
            SourceFormat::TaitoZ => {
                let base = (if split { tx } else { tx / 2 }) * 64;
                let byte = if self.options.reflect {
                    1 - (plane % 2)
                } else {
                    plane % 2
                };
                base + byte + (3 - x) * 2 + y * 8
            }
            SourceFormat::Underfire => {
                (tx / 4) * 160 + (1 - (tx % 2)) * 5 + ((tx % 4) / 2) * 80 + x + y * 10
            }
            SourceFormat::HalfDepth => {
                let depth = self.grid.tile_depth as i64;
                // Both nibble halves of the grid address the same tiles.
                let bank = tx.checked_rem(file_size / (t * depth * 2))?;
                (bank / 4) * 256 + (tx % 2) * 8 + ((tx % 4) / 2) * 128 + x + y * 16
            }
        };

        Some(offset)
    }
}
