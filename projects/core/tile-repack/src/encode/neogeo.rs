use crate::allocate::{with_capacity, zeroed};
use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::{TileCoordinate, TileGrid};

/// Bytes of one 16x16 4bpp sprite tile.
pub(crate) const SPRITE_BYTES: usize = 128;

/// Stages Neo-Geo sprites.
///
/// A sprite is two 8 pixel wide halves of 64 bytes; each row is 4 bytes, one per
/// plane, with the leftmost pixel in bit 0. Planes 0/1 go to the first stream and
/// planes 2/3 to the second.
#[derive(Debug, Clone)]
pub struct NeogeoEncoder {
    staging: Vec<u8>,
}

impl NeogeoEncoder {
    pub(crate) fn new(grid: &TileGrid) -> Result<Self, ResourceError> {
        Ok(Self {
            staging: zeroed(grid.tile_count() * SPRITE_BYTES, "sprite staging buffer")?,
        })
    }

    pub(crate) fn encode(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) {
        let grid = decoder.grid();
        let base = tile.tile_x as usize * SPRITE_BYTES;
        let size = grid.tile_size as usize;
        let depth = grid.tile_depth as usize;

        for y in 0..size {
            for x in 0..16 {
                let half = x / 8;
                let bit = x % 8;
                for z in 0..depth {
                    let sample = decoder.sample(tile, (half * 4 + z) as i64, y as i64);
                    let index = base + half * 64 + y * 4 + z;
                    self.staging[index] |= ((sample >> (7 - bit)) & 1) << bit;
                }
            }
        }
    }

    /// Splits the staging buffer into the `.c1` and `.c2` streams.
    pub(crate) fn finish(self) -> Result<(Vec<u8>, Vec<u8>), ResourceError> {
        let half = self.staging.len() / 2;
        let mut first = with_capacity(half, "first plane stream")?;
        let mut second = with_capacity(half, "second plane stream")?;
        for (i, &byte) in self.staging.iter().enumerate() {
            if i % 4 < 2 {
                first.push(byte);
            } else {
                second.push(byte);
            }
        }
        Ok((first, second))
    }
}
