//! Tile grid layout of an input buffer.

use crate::error::InputValidationError;
use tile_repack_bmp::BmpInfo;
use tile_repack_formats::ConversionOptions;

/// Position of a tile in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileCoordinate {
    /// Column, counted from the left.
    pub tile_x: u32,
    /// Row, counted from the top.
    pub tile_y: u32,
}

impl TileCoordinate {
    /// Creates a coordinate.
    pub const fn new(tile_x: u32, tile_y: u32) -> Self {
        Self { tile_x, tile_y }
    }
}

/// Dimensions of the tile grid and of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Tile edge in pixels (`T`).
    pub tile_size: u32,
    /// Tiles per row.
    pub tiles_x: u32,
    /// Tile rows. Always 1 for raw dumps.
    pub tiles_y: u32,
    /// Pixels per source byte of a bitmap (`8 / depth`). 1 for raw dumps.
    pub pixels_per_byte: u32,
    /// Sample columns per tile row of a raw dump.
    pub tile_depth: u32,
    /// Whether the input is a bitmap.
    pub bitmap: bool,
}

impl TileGrid {
    /// Lays a bitmap out as `width / T` by `height / T` tiles.
    pub fn for_bitmap(
        info: &BmpInfo,
        options: &ConversionOptions,
    ) -> Result<Self, InputValidationError> {
        let tile_size = options.tile_size();
        if info.width % tile_size != 0 || info.height % tile_size != 0 {
            return Err(InputValidationError::NotTileAligned {
                width: info.width,
                height: info.height,
                tile_size,
            });
        }

        let depth = info.bit_depth as u32;
        if depth != options.target_depth() {
            return Err(InputValidationError::BitDepthMismatch {
                target: options.target,
                expected: options.target_depth(),
                found: depth,
            });
        }

        Ok(Self {
            tile_size,
            tiles_x: info.width / tile_size,
            tiles_y: info.height / tile_size,
            pixels_per_byte: info.pixels_per_byte(),
            tile_depth: depth,
            bitmap: true,
        })
    }

    /// Lays a raw dump out as a single row of tiles. Trailing bytes short of a
    /// whole tile are ignored.
    pub fn for_raw(len: usize, options: &ConversionOptions) -> Result<Self, InputValidationError> {
        let tile_size = options.tile_size();
        let tile_depth = options.tile_depth();
        let tile_bytes = Self::raw_tile_bytes(options);
        let tiles_x = len / tile_bytes;
        if tiles_x == 0 {
            return Err(InputValidationError::NoCompleteTile { tile_bytes, len });
        }
        if len % tile_bytes != 0 {
            log::debug!(
                "Ignoring {} trailing bytes after the last complete tile",
                len % tile_bytes
            );
        }

        Ok(Self {
            tile_size,
            tiles_x: tiles_x as u32,
            tiles_y: 1,
            pixels_per_byte: 1,
            tile_depth,
            bitmap: false,
        })
    }

    /// Bytes one tile of a raw dump occupies.
    pub fn raw_tile_bytes(options: &ConversionOptions) -> usize {
        let tile_size = options.tile_size() as usize;
        let tile_height = options.source.raw_tile_height(options.tile_size()) as usize;
        tile_size * tile_height * options.tile_depth() as usize / 8
    }

    /// Total number of tiles scanned.
    pub fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    /// Every tile in scan order: rows top to bottom, tiles left to right.
    pub fn scan(&self) -> impl Iterator<Item = TileCoordinate> + '_ {
        (0..self.tiles_y)
            .flat_map(move |tile_y| (0..self.tiles_x).map(move |tile_x| TileCoordinate::new(tile_x, tile_y)))
    }
}
