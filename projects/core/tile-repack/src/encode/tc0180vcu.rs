use crate::allocate::with_capacity;
use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::{TileCoordinate, TileGrid};
use tile_repack_formats::ConversionOptions;

/// Bit planes written per row.
const PLANES: u32 = 4;

/// Taito TC0180VCU tiles from a 4bpp bitmap.
///
/// For every row and plane, the plane bit of each pixel's high nibble is gathered
/// into `pix0` and that of its low nibble into `pix1`. Full size tiles emit a pair at
/// the middle column and another at the end of the row.
#[derive(Debug, Clone)]
pub struct Tc0180vcuEncoder {
    output: Vec<u8>,
    reflect: bool,
    full_size: bool,
}

impl Tc0180vcuEncoder {
    pub(crate) fn new(grid: &TileGrid, options: &ConversionOptions, tile_count: usize) -> Result<Self, ResourceError> {
        let pairs_per_plane = if options.full_size { 2 } else { 1 };
        let tile_bytes = (grid.tile_size * PLANES * pairs_per_plane * 2) as usize;
        Ok(Self {
            output: with_capacity(tile_count * tile_bytes, "tile stream")?,
            reflect: options.reflect,
            full_size: options.full_size,
        })
    }

    pub(crate) fn encode(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) {
        let grid = decoder.grid();
        let size = grid.tile_size as i64;
        let row_bytes = size / grid.pixels_per_byte as i64;

        for y in 0..size {
            let row = if self.reflect { size - y } else { y };
            for z in 0..PLANES {
                let (mut pix0, mut pix1) = (0u8, 0u8);
                for x in 0..row_bytes {
                    let sample = decoder.sample(tile, x, row);
                    let shift = 7 - (x % 8) * 2;
                    pix0 |= place_bit((sample >> 4) >> z, shift);
                    pix1 |= place_bit((sample & 0xF) >> z, shift + 1);

                    if self.full_size && x == row_bytes / 2 {
                        self.output.extend_from_slice(&[pix0, pix1]);
                        (pix0, pix1) = (0, 0);
                    }
                }
                self.output.extend_from_slice(&[pix0, pix1]);
            }
        }
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.output
    }
}

/// Moves bit 0 of `value` to `shift`; positions outside the byte are dropped.
#[inline]
fn place_bit(value: u8, shift: i64) -> u8 {
    if (0..8).contains(&shift) {
        (value & 1) << shift
    } else {
        0
    }
}
