//! Common test imports and bitmap fixtures.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{
    convert, ConversionOutput, ConvertError, InputValidationError, ResourceError, Session,
    SourceDecoder, TileCoordinate, TileGrid, TileStreams,
};
pub use crate::dedup::*;
pub use crate::palette::*;

pub use derive_enum_all_values::AllValues;
pub use tile_repack_bmp::{parse_bmp, BmpError, BmpInfo};
pub use tile_repack_formats::{
    CompatibilityError, ConversionOptions, DedupStrategy, PaletteModel, SourceFormat, TargetFormat,
};

/// Builds uncompressed bottom-up bitmaps for tests.
pub struct BitmapBuilder {
    width: u32,
    height: u32,
    depth: u16,
    pixels: Box<dyn Fn(u32, u32) -> u8>,
    palette: Box<dyn Fn(usize) -> [u8; 3]>,
}

impl BitmapBuilder {
    /// A `width` x `height` bitmap of all zero pixels and a zeroed palette.
    pub fn new(width: u32, height: u32, depth: u16) -> Self {
        Self {
            width,
            height,
            depth,
            pixels: Box::new(|_, _| 0),
            palette: Box::new(|_| [0, 0, 0]),
        }
    }

    /// Sets the pixel at `(x, y)`, with `y` counted from the top of the image.
    pub fn pixels(mut self, pixel: impl Fn(u32, u32) -> u8 + 'static) -> Self {
        self.pixels = Box::new(pixel);
        self
    }

    /// Sets palette entry `i` as stored blue, green, red.
    pub fn palette(mut self, entry: impl Fn(usize) -> [u8; 3] + 'static) -> Self {
        self.palette = Box::new(entry);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let entries = 1usize << self.depth;
        let pixel_offset = 54 + entries * 4;
        let row_bytes = (self.width * self.depth as u32 / 8) as usize;
        let total = pixel_offset + row_bytes * self.height as usize;

        let mut data = Vec::with_capacity(total);
        data.extend_from_slice(b"BM");
        data.extend_from_slice(&(total as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&(pixel_offset as u32).to_le_bytes());
        data.extend_from_slice(&40u32.to_le_bytes());
        data.extend_from_slice(&self.width.to_le_bytes());
        data.extend_from_slice(&self.height.to_le_bytes());
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&self.depth.to_le_bytes());
        data.resize(54, 0);

        for i in 0..entries {
            let [blue, green, red] = (self.palette)(i);
            data.extend_from_slice(&[blue, green, red, 0]);
        }

        for row in (0..self.height).rev() {
            match self.depth {
                4 => {
                    for x in (0..self.width).step_by(2) {
                        let high = (self.pixels)(x, row) & 0xF;
                        let low = (self.pixels)(x + 1, row) & 0xF;
                        data.push((high << 4) | low);
                    }
                }
                _ => data.extend((0..self.width).map(|x| (self.pixels)(x, row))),
            }
        }
        data
    }
}

/// Creates a valid bitmap with a zeroed palette and a repeating `0, 1, 2, ...` row pattern.
pub fn create_bmp(width: u32, height: u32, depth: u16) -> Vec<u8> {
    BitmapBuilder::new(width, height, depth)
        .pixels(|x, _| x as u8)
        .build()
}

/// Parses `bmp` and creates a decoder over it.
pub fn bitmap_decoder(bmp: &[u8], options: ConversionOptions) -> SourceDecoder<'_> {
    let info = parse_bmp(bmp).unwrap();
    let grid = TileGrid::for_bitmap(&info, &options).unwrap();
    SourceDecoder::new(bmp, options, grid, info.width)
}
