use crate::allocate::with_capacity;
use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::{TileCoordinate, TileGrid};

/// Copies each tile row's source bytes as they are.
#[derive(Debug, Clone)]
pub struct LinearEncoder {
    output: Vec<u8>,
}

impl LinearEncoder {
    pub(crate) fn new(grid: &TileGrid, tile_count: usize) -> Result<Self, ResourceError> {
        let row_bytes = (grid.tile_size / grid.pixels_per_byte) as usize;
        Ok(Self {
            output: with_capacity(tile_count * grid.tile_size as usize * row_bytes, "tile stream")?,
        })
    }

    pub(crate) fn encode(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) {
        let grid = decoder.grid();
        let row_bytes = (grid.tile_size / grid.pixels_per_byte) as i64;
        for y in 0..grid.tile_size as i64 {
            for x in 0..row_bytes {
                self.output.push(decoder.sample(tile, x, y));
            }
        }
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn c123_tile_is_the_bitmap_rows() {
        let bmp = BitmapBuilder::new(8, 8, 8).pixels(|x, y| (y * 8 + x) as u8).build();
        let output = convert(bmp, ConversionOptions::new(SourceFormat::Bmp, TargetFormat::C123)).unwrap();
        let expected: Vec<u8> = (0..64).collect();
        assert_eq!(output.tiles, TileStreams::Single(expected));
    }

    #[test]
    fn atetris_keeps_nibbles_packed() {
        let bmp = BitmapBuilder::new(8, 8, 4)
            .pixels(|x, y| ((x + y) & 0xF) as u8)
            .build();
        let output = convert(bmp, ConversionOptions::new(SourceFormat::Bmp, TargetFormat::Atetris)).unwrap();
        let TileStreams::Single(tiles) = output.tiles else {
            panic!("expected a single stream");
        };
        assert_eq!(tiles.len(), 32);
        assert_eq!(&tiles[..4], &[0x01, 0x23, 0x45, 0x67]);
        assert_eq!(&tiles[4..8], &[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn psikyo_tiles_follow_scan_order() {
        let bmp = BitmapBuilder::new(32, 16, 8).pixels(|x, _| (x / 16) as u8 + 1).build();
        let output = convert(
            bmp,
            ConversionOptions::new(SourceFormat::Bmp, TargetFormat::PsikyoLaterGenerations8),
        )
        .unwrap();
        let TileStreams::Single(tiles) = output.tiles else {
            panic!("expected a single stream");
        };
        assert_eq!(tiles.len(), 512);
        assert!(tiles[..256].iter().all(|&b| b == 1));
        assert!(tiles[256..].iter().all(|&b| b == 2));
    }

    #[test]
    fn psikyo_rows_keep_pixel_order() {
        let bmp = BitmapBuilder::new(32, 16, 8).pixels(|x, y| (y * 32 + x) as u8).build();
        let output = convert(
            bmp,
            ConversionOptions::new(SourceFormat::Bmp, TargetFormat::PsikyoLaterGenerations8),
        )
        .unwrap();
        let TileStreams::Single(tiles) = output.tiles else {
            panic!("expected a single stream");
        };
        assert_eq!(tiles.len(), 512);
        assert_eq!(&tiles[..4], &[0, 1, 2, 3]);
        assert_eq!(&tiles[16..20], &[32, 33, 34, 35]);
        assert_eq!(tiles[255], 239);
        // Second tile starts at column 16; row 8 wraps past 255.
        assert_eq!(&tiles[256..260], &[16, 17, 18, 19]);
        assert_eq!(tiles[256 + 8 * 16], 16);
        assert_eq!(tiles[511], 255);
    }
}
