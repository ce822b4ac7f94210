use crate::allocate::with_capacity;
use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::{TileCoordinate, TileGrid};
use tile_repack_formats::SourceFormat;

/// Model 3 tiles from an 8bpp bitmap: the columns of each group of four are reversed.
#[derive(Debug, Clone)]
pub struct BitmapModel3Encoder {
    output: Vec<u8>,
}

impl BitmapModel3Encoder {
    pub(crate) fn new(grid: &TileGrid, tile_count: usize) -> Result<Self, ResourceError> {
        let tile_bytes = (grid.tile_size * grid.tile_size) as usize;
        Ok(Self {
            output: with_capacity(tile_count * tile_bytes, "tile stream")?,
        })
    }

    pub(crate) fn encode(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) {
        let size = decoder.grid().tile_size as i64;
        for y in 0..size {
            for x in 0..size {
                self.output.push(decoder.sample(tile, x / 4 + (3 - x % 4), y));
            }
        }
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.output
    }
}

/// Model 3 tiles from a raw dump: planar samples gathered into one byte per pixel.
#[derive(Debug, Clone)]
pub struct PlanarModel3Encoder {
    output: Vec<u8>,
    source: SourceFormat,
}

impl PlanarModel3Encoder {
    pub(crate) fn new(grid: &TileGrid, source: SourceFormat, tile_count: usize) -> Result<Self, ResourceError> {
        let tile_bytes = (grid.tile_size * grid.tile_size) as usize;
        Ok(Self {
            output: with_capacity(tile_count * tile_bytes, "tile stream")?,
            source,
        })
    }

    pub(crate) fn encode(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) {
        let grid = decoder.grid();
        let size = grid.tile_size as i64;
        let depth = grid.tile_depth as i64;

        match self.source {
            // Left half of the grid reads the high nibbles.
            SourceFormat::HalfDepth => {
                for y in 0..size {
                    for x in 0..size {
                        self.output.push(decoder.pixel(tile, x, y));
                    }
                }
            }
            SourceFormat::OldSprite => {
                for y in 0..size {
                    let mut pixel = 0u8;
                    for z in 0..depth {
                        let bit = (decoder.sample(tile, z, y) >> (z % 4)) & 1;
                        pixel |= bit << (7 - z);
                    }
                    for _ in 0..size {
                        self.output.push(pixel);
                    }
                }
            }
            _ => {
                for y in 0..size {
                    for x in 0..size {
                        let bit_index = ((7 - x) / 4) * 4 + x % 4;
                        let mut pixel = 0u8;
                        for z in 0..depth {
                            let bit = (decoder.sample(tile, z, y) >> bit_index) & 1;
                            pixel |= bit << z;
                        }
                        self.output.push(pixel);
                    }
                }
            }
        }
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.output
    }
}
