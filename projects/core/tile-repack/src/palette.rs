//! Conversion of the bitmap colour table into the target's colour model.

use crate::allocate::with_capacity;
use crate::error::ResourceError;
use tile_repack_bmp::{BmpInfo, BMP_PALETTE_ENTRY_SIZE};
use tile_repack_formats::PaletteModel;

/// One colour table entry as stored in the bitmap (blue, green, red, reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteEntry {
    /// Blue channel, stored first.
    pub blue: u8,
    /// Green channel.
    pub green: u8,
    /// Red channel.
    pub red: u8,
}

impl PaletteEntry {
    /// Reads an entry from its 4 stored bytes. The reserved byte is ignored.
    #[inline]
    pub fn from_bgrx(bytes: [u8; 4]) -> Self {
        Self {
            blue: bytes[0],
            green: bytes[1],
            red: bytes[2],
        }
    }

    /// Appends this entry in the representation of `model`.
    pub fn write(&self, model: PaletteModel, out: &mut Vec<u8>) {
        let (red, green, blue) = (self.red, self.green, self.blue);
        match model {
            PaletteModel::Rgb888 => out.extend_from_slice(&[red, green, blue]),
            PaletteModel::Rgb332 => out.push(((blue >> 5) << 5) | ((green >> 5) << 2) | (red >> 6)),
            PaletteModel::Model3Tilemap => {
                let value =
                    (u16::from(green >> 3) << 10) | (u16::from(red >> 3) << 5) | u16::from(blue >> 3);
                let [low, high] = value.to_le_bytes();
                out.extend_from_slice(&[low, high, 0, 0]);
            }
            PaletteModel::Rgb444x => out.extend_from_slice(&[(blue & 0xF0) | (green >> 4), red & 0xF0]),
            PaletteModel::None => {}
        }
    }
}

/// Bytes each entry occupies in the representation of `model`.
pub const fn bytes_per_entry(model: PaletteModel) -> usize {
    match model {
        PaletteModel::Rgb888 => 3,
        PaletteModel::Rgb332 => 1,
        PaletteModel::Model3Tilemap => 4,
        PaletteModel::Rgb444x => 2,
        PaletteModel::None => 0,
    }
}

/// Converts the colour table of a parsed bitmap.
///
/// Returns `None` for [`PaletteModel::None`]. `buffer` must be the buffer `info`
/// was parsed from, which guarantees the table is in bounds.
pub fn convert_palette(
    buffer: &[u8],
    info: &BmpInfo,
    model: PaletteModel,
) -> Result<Option<Vec<u8>>, ResourceError> {
    if model == PaletteModel::None {
        return Ok(None);
    }

    let entries = info.palette_entries();
    let mut out = with_capacity(entries * bytes_per_entry(model), "palette")?;
    for chunk in buffer[info.palette_range()].chunks_exact(BMP_PALETTE_ENTRY_SIZE) {
        PaletteEntry::from_bgrx([chunk[0], chunk[1], chunk[2], chunk[3]]).write(model, &mut out);
    }
    Ok(Some(out))
}
