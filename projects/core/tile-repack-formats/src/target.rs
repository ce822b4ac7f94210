//! Target layout catalog.

use crate::source::{SourceFormat, UnknownFormat};
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// A layout tiles can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues, Default)]
#[repr(u8)]
pub enum TargetFormat {
    /// 8bpp linear 8x8 tiles for Namco C123.
    #[default]
    C123 = 0,
    /// 8bpp planar 32x32 sprites for early Namco System 2 boards.
    OldSprite = 1,
    /// 8bpp linear 8x8 tiles for Sega Model 3 tilemaps.
    Model3_8 = 2,
    /// 4bpp planar 16x16 sprites for Neo-Geo MVS/AES, written as a `.c1`/`.c2` pair.
    NeogeoSpr = 3,
    /// 8bpp linear 16x16 tiles for Psikyo's SH-2 based boards.
    PsikyoLaterGenerations8 = 4,
    /// 4bpp linear 8x8 tiles for Atari's Tetris board.
    Atetris = 5,
    /// 4bpp planar tiles for the Taito TC0180VCU, 8x8 or 16x16.
    Tc0180vcu = 6,
}

/// Colour representation a target expects its palette in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteModel {
    /// Three bytes per entry: red, green, blue.
    Rgb888,
    /// One byte per entry: 3 bits blue, 3 bits green, 2 bits red.
    Rgb332,
    /// Four bytes per entry holding a little endian 15-bit colour (green, red, blue from the top) and two zero bytes.
    Model3Tilemap,
    /// Two bytes per entry: blue/green nibbles, then red nibble and padding.
    Rgb444x,
    /// The target carries no palette.
    None,
}

/// Static description of a [`TargetFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Name used on the command line.
    pub name: &'static str,
    /// One line summary shown in the catalog.
    pub description: &'static str,
    /// Bits per pixel written.
    pub bit_depth: u8,
    /// Tile edge in pixels.
    pub tile_size: u8,
    /// Tile edge in pixels when `full_size` is set, for layouts with a larger variant.
    pub full_tile_size: Option<u8>,
    /// Whether `reflect` mirrors the written tiles vertically.
    pub accepts_reflect: bool,
    /// Whether the layout addresses tiles through a tilemap (false for sprite-only chips).
    pub accepts_tilemap: bool,
    /// Whether the layout interleaves bits across a whole sprite and must be staged.
    pub staged: bool,
    /// Whether planes are split across two output streams.
    pub split_planes: bool,
    /// Palette representation written alongside the tiles.
    pub palette: PaletteModel,
}

static C123: TargetDescriptor = TargetDescriptor {
    name: "c123",
    description: "8bpp linear 8x8 tiles for Namco C123 (identical to GBA and SNES Mode 7 tiles)",
    bit_depth: 8,
    tile_size: 8,
    full_tile_size: None,
    accepts_reflect: false,
    accepts_tilemap: true,
    staged: false,
    split_planes: false,
    palette: PaletteModel::Rgb888,
};

static OLD_SPRITE: TargetDescriptor = TargetDescriptor {
    name: "old_sprite",
    description: "8bpp planar 32x32 tiles for the sprite subsystem of early Namco System 2 boards. \
                  By default only the upper left 16x16 quarter of each sprite is filled, \
                  use --full to occupy the whole sprite",
    bit_depth: 8,
    tile_size: 16,
    full_tile_size: Some(32),
    accepts_reflect: false,
    accepts_tilemap: false,
    staged: true,
    split_planes: false,
    palette: PaletteModel::Rgb888,
};

static MODEL3_8: TargetDescriptor = TargetDescriptor {
    name: "model3_8",
    description: "8bpp linear 8x8 tiles for Sega Model 3 tilemaps",
    bit_depth: 8,
    tile_size: 8,
    full_tile_size: None,
    accepts_reflect: false,
    accepts_tilemap: true,
    staged: false,
    split_planes: false,
    palette: PaletteModel::Model3Tilemap,
};

static NEOGEO_SPR: TargetDescriptor = TargetDescriptor {
    name: "neogeo_spr",
    description: "4bpp planar 16x16 sprites for Neo-Geo MVS/AES",
    bit_depth: 4,
    tile_size: 16,
    full_tile_size: None,
    accepts_reflect: false,
    accepts_tilemap: false,
    staged: true,
    split_planes: true,
    palette: PaletteModel::None,
};

static PSIKYO_LATER_GENERATIONS_8: TargetDescriptor = TargetDescriptor {
    name: "psikyo_later_generations_8",
    description: "8bpp linear 16x16 tiles for Psikyo's SH-2 based arcade machines",
    bit_depth: 8,
    tile_size: 16,
    full_tile_size: None,
    accepts_reflect: false,
    accepts_tilemap: true,
    staged: false,
    split_planes: false,
    palette: PaletteModel::Rgb888,
};

static ATETRIS: TargetDescriptor = TargetDescriptor {
    name: "atetris",
    description: "4bpp linear 8x8 tiles for Atari's Tetris arcade hardware \
                  (identical to Sega Genesis/Mega Drive and MSX tiles)",
    bit_depth: 4,
    tile_size: 8,
    full_tile_size: None,
    accepts_reflect: false,
    accepts_tilemap: true,
    staged: false,
    split_planes: false,
    palette: PaletteModel::Rgb332,
};

static TC0180VCU: TargetDescriptor = TargetDescriptor {
    name: "tc0180vcu",
    description: "4bpp planar tiles for the Taito TC0180VCU (Taito System B). \
                  Written as 8x8, or 16x16 with --full. The palette is 12-bit RGBx",
    bit_depth: 4,
    tile_size: 8,
    full_tile_size: Some(16),
    accepts_reflect: true,
    accepts_tilemap: true,
    staged: false,
    split_planes: false,
    palette: PaletteModel::Rgb444x,
};

impl TargetFormat {
    /// Returns the static descriptor of this layout.
    pub const fn descriptor(self) -> &'static TargetDescriptor {
        match self {
            TargetFormat::C123 => &C123,
            TargetFormat::OldSprite => &OLD_SPRITE,
            TargetFormat::Model3_8 => &MODEL3_8,
            TargetFormat::NeogeoSpr => &NEOGEO_SPR,
            TargetFormat::PsikyoLaterGenerations8 => &PSIKYO_LATER_GENERATIONS_8,
            TargetFormat::Atetris => &ATETRIS,
            TargetFormat::Tc0180vcu => &TC0180VCU,
        }
    }

    /// Name used on the command line.
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Tile edge in pixels for the requested size variant.
    pub const fn tile_size(self, full_size: bool) -> u32 {
        let descriptor = self.descriptor();
        match (full_size, descriptor.full_tile_size) {
            (true, Some(size)) => size as u32,
            _ => descriptor.tile_size as u32,
        }
    }

    /// Bits per pixel the target stores, and therefore the depth a bitmap source must have.
    pub const fn bit_depth(self) -> u32 {
        self.descriptor().bit_depth as u32
    }

    /// Whether this target has a larger tile variant selected by `full_size`.
    pub const fn has_full_size_variant(self) -> bool {
        self.descriptor().full_tile_size.is_some()
    }

    /// Whether the raw dump layouts are decoded with split bit-planes for this target.
    pub const fn is_split_plane(self) -> bool {
        self.descriptor().split_planes
    }

    /// Whether `source` may be converted into this layout.
    ///
    /// Raw hardware dumps can only be written as Model 3 tiles or Neo-Geo sprites;
    /// every other target takes bitmaps only.
    pub const fn accepts_source(self, source: SourceFormat, full_size: bool) -> bool {
        match self {
            TargetFormat::Model3_8 => match source {
                SourceFormat::Planar4_16x16 => !full_size,
                SourceFormat::NeoMirror => false,
                _ => true,
            },
            TargetFormat::NeogeoSpr => matches!(
                source,
                SourceFormat::Planar4_16x16 | SourceFormat::NeoMirror | SourceFormat::TaitoZ
            ),
            _ => source.is_bitmap(),
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetFormat::all_values()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or(UnknownFormat)
    }
}
