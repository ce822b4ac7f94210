use crate::allocate::zeroed;
use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::{TileCoordinate, TileGrid};

/// Bytes of one 32x32 8bpp sprite.
pub(crate) const SPRITE_BYTES: usize = 1024;

/// Stages early Namco System 2 sprites.
///
/// Each row of a sprite is 32 bytes holding the 8 planes of 32 pixels; a plane pair
/// shares one byte per four pixels (even plane in the high nibble). 16x16 tiles
/// occupy the upper left quarter of their sprite.
#[derive(Debug, Clone)]
pub struct OldSpriteEncoder {
    staging: Vec<u8>,
}

impl OldSpriteEncoder {
    pub(crate) fn new(grid: &TileGrid) -> Result<Self, ResourceError> {
        Ok(Self {
            staging: zeroed(grid.tile_count() * SPRITE_BYTES, "sprite staging buffer")?,
        })
    }

    pub(crate) fn encode(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) {
        let grid = decoder.grid();
        let sprite = (tile.tile_y * grid.tiles_x + tile.tile_x) as usize * SPRITE_BYTES;
        let size = grid.tile_size as usize;

        for y in 0..size {
            for x in 0..size {
                let sample = decoder.sample(tile, x as i64, y as i64);
                for z in 0..8 {
                    let index = sprite + y * 32 + (x / 4) * 4 + (7 - z) / 2;
                    let shift = (3 - x % 4) + (1 - z % 2) * 4;
                    self.staging[index] |= ((sample >> z) & 1) << shift;
                }
            }
        }
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.staging
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    fn sprites(bmp: Vec<u8>, full_size: bool) -> Vec<u8> {
        let options = ConversionOptions::new(SourceFormat::Bmp, TargetFormat::OldSprite).with_full_size(full_size);
        match convert(bmp, options).unwrap().tiles {
            TileStreams::Single(data) => data,
            other => panic!("unexpected streams {other:?}"),
        }
    }

    #[test]
    fn single_pixel_sets_one_bit_per_plane() {
        // Top left pixel = 0xFF, everything else 0.
        let bmp = BitmapBuilder::new(16, 16, 8)
            .pixels(|x, y| if x == 0 && y == 0 { 0xFF } else { 0 })
            .build();
        let data = sprites(bmp, false);
        assert_eq!(data.len(), 1024);
        // Planes 7/6, 5/4, 3/2, 1/0 live in bytes 0..4; pixel 0 is bit 3 of each nibble.
        assert_eq!(&data[..4], &[0x88, 0x88, 0x88, 0x88]);
        assert!(data[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn plane_parity_selects_nibble() {
        // Pixel 1 of row 0 = 0b0000_0001 (plane 0) -> byte 3, high nibble, bit 6.
        // Pixel 5 of row 1 = 0b1000_0000 (plane 7) -> byte 32 + 4, low nibble, bit 2.
        let bmp = BitmapBuilder::new(16, 16, 8)
            .pixels(|x, y| match (x, y) {
                (1, 0) => 0b0000_0001,
                (5, 1) => 0b1000_0000,
                _ => 0,
            })
            .build();
        let data = sprites(bmp, false);
        assert_eq!(data[3], 0b0100_0000);
        assert_eq!(data[36], 0b0000_0100);
        assert_eq!(data.iter().filter(|&&b| b != 0).count(), 2);
    }

    #[test]
    fn small_tiles_fill_upper_left_quarter() {
        let bmp = BitmapBuilder::new(32, 16, 8).pixels(|_, _| 0xFF).build();
        let data = sprites(bmp, false);
        assert_eq!(data.len(), 2 * 1024);
        for sprite in data.chunks(1024) {
            for (row, bytes) in sprite.chunks(32).enumerate() {
                let expected = if row < 16 { 0xFF } else { 0 };
                assert!(bytes[..16].iter().all(|&b| b == expected), "row {row}");
                assert!(bytes[16..].iter().all(|&b| b == 0), "row {row}");
            }
        }
    }

    #[test]
    fn full_size_fills_whole_sprite() {
        let bmp = BitmapBuilder::new(32, 32, 8).pixels(|_, _| 0xFF).build();
        let data = sprites(bmp, true);
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|&b| b == 0xFF));
    }
}
