//! Source layout catalog.

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// A layout tiles can be read from.
///
/// The declaration order is significant for nothing but catalog printing; use the
/// descriptor queries rather than comparing variants by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues, Default)]
#[repr(u8)]
pub enum SourceFormat {
    /// Uncompressed, palette indexed bitmap (4 or 8 bits per pixel).
    #[default]
    Bmp = 0,
    /// Decrypted 4bpp planar 8x8 tiles, planes split across the two file halves.
    RohgaDecr = 1,
    /// 4bpp planar 8x8 tiles of the PC Engine background generator.
    PceCg = 2,
    /// Generic 4bpp planar 16x16 tiles.
    Planar4_16x16 = 3,
    /// Neo-Geo style sprite planes with the pixel order inside each byte reversed.
    NeoMirror = 4,
    /// 8bpp planar 32x32 sprites of the early Namco System 2 sprite chip.
    OldSprite = 5,
    /// 4bpp planar 16x8 sprite tiles of Taito System Z.
    TaitoZ = 6,
    /// 5bpp planar 16x16 sprite tiles of Taito's Under Fire hardware.
    Underfire = 7,
    /// 4bpp tiles packed two per byte, one per nibble.
    HalfDepth = 8,
}

/// Static description of a [`SourceFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Name used on the command line.
    pub name: &'static str,
    /// One line summary shown in the catalog.
    pub description: &'static str,
    /// Bits per pixel of the layout. `None` when the file header declares it.
    pub bit_depth: Option<u8>,
    /// Whether the file carries its own palette.
    pub palette_indexed: bool,
    /// Whether `full_size` selects a different row stride for this layout.
    pub accepts_full_size: bool,
    /// Whether `reflect` mirrors tiles of this layout.
    pub accepts_reflect: bool,
    /// Whether building a tilemap is worthwhile for this layout.
    pub accepts_tilemap: bool,
}

static BMP: SourceDescriptor = SourceDescriptor {
    name: "bmp",
    description: "standard BMP file",
    bit_depth: None,
    palette_indexed: true,
    accepts_full_size: false,
    accepts_reflect: false,
    accepts_tilemap: true,
};

static ROHGA_DECR: SourceDescriptor = SourceDescriptor {
    name: "rohga_decr",
    description: "decrypted 4bpp planar 8x8 tiles for Armored Force Rohga",
    bit_depth: Some(4),
    palette_indexed: false,
    accepts_full_size: false,
    accepts_reflect: false,
    accepts_tilemap: false,
};

static PCE_CG: SourceDescriptor = SourceDescriptor {
    name: "pce_cg",
    description: "4bpp planar 8x8 tiles for NEC/Hudson Soft PC Engine/TurboGrafx-16 basic video",
    bit_depth: Some(4),
    palette_indexed: false,
    accepts_full_size: false,
    accepts_reflect: false,
    accepts_tilemap: false,
};

static PLANAR4_16X16: SourceDescriptor = SourceDescriptor {
    name: "planar4_16x16",
    description: "generic 4bpp planar 16x16 tiles (Irem M92 sprites, Taito TC0180VCU and Toaplan GP9001 tiles). \
                  Later M92 games store sprite rows 16px wide instead of 8px, use --full for those",
    bit_depth: Some(4),
    palette_indexed: false,
    accepts_full_size: true,
    accepts_reflect: false,
    accepts_tilemap: true,
};

static NEO_MIRROR: SourceDescriptor = SourceDescriptor {
    name: "neo_mirror",
    description: "Neo-Geo sprite layout with the pixel order of each 8px row reversed \
                  (Data East 16-bit sprites such as Crude Buster, and their clones)",
    bit_depth: Some(4),
    palette_indexed: false,
    accepts_full_size: false,
    accepts_reflect: false,
    accepts_tilemap: true,
};

static OLD_SPRITE: SourceDescriptor = SourceDescriptor {
    name: "old_sprite",
    description: "see the old_sprite target; as a source the whole 32x32 sprite is always read",
    bit_depth: Some(8),
    palette_indexed: false,
    accepts_full_size: false,
    accepts_reflect: false,
    accepts_tilemap: true,
};

static TAITO_Z: SourceDescriptor = SourceDescriptor {
    name: "taito_z",
    description: "4bpp planar 16x8 sprite tiles for Taito System Z games (except Chase HQ). \
                  Battle Shark and Space Gun store pre-mirrored tiles, use --reflect for those",
    bit_depth: Some(4),
    palette_indexed: false,
    accepts_full_size: false,
    accepts_reflect: true,
    accepts_tilemap: true,
};

static UNDERFIRE: SourceDescriptor = SourceDescriptor {
    name: "underfire",
    description: "5bpp planar 16x16 sprite tiles for Taito's Under Fire hardware",
    bit_depth: Some(5),
    palette_indexed: false,
    accepts_full_size: false,
    accepts_reflect: false,
    accepts_tilemap: true,
};

static HALF_DEPTH: SourceDescriptor = SourceDescriptor {
    name: "half_depth",
    description: "4bpp linear 16x16 sprite tiles packed one per nibble, as stored for Namco C355",
    bit_depth: Some(4),
    palette_indexed: false,
    accepts_full_size: false,
    accepts_reflect: false,
    accepts_tilemap: true,
};

impl SourceFormat {
    /// Returns the static descriptor of this layout.
    pub const fn descriptor(self) -> &'static SourceDescriptor {
        match self {
            SourceFormat::Bmp => &BMP,
            SourceFormat::RohgaDecr => &ROHGA_DECR,
            SourceFormat::PceCg => &PCE_CG,
            SourceFormat::Planar4_16x16 => &PLANAR4_16X16,
            SourceFormat::NeoMirror => &NEO_MIRROR,
            SourceFormat::OldSprite => &OLD_SPRITE,
            SourceFormat::TaitoZ => &TAITO_Z,
            SourceFormat::Underfire => &UNDERFIRE,
            SourceFormat::HalfDepth => &HALF_DEPTH,
        }
    }

    /// Name used on the command line.
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// True for the bitmap source, false for every raw hardware dump.
    pub const fn is_bitmap(self) -> bool {
        matches!(self, SourceFormat::Bmp)
    }

    /// Number of sample columns compared and decoded per tile row of a raw dump.
    ///
    /// Old sprites store one pixel per byte column so their depth follows the tile
    /// size. Not meaningful for bitmaps.
    pub const fn tile_depth(self, tile_size: u32) -> u32 {
        match self {
            SourceFormat::OldSprite => tile_size,
            SourceFormat::Underfire => 5,
            _ => 4,
        }
    }

    /// Height in pixels of one tile of a raw dump, used to size the tile grid.
    pub const fn raw_tile_height(self, tile_size: u32) -> u32 {
        match self {
            SourceFormat::TaitoZ => 8,
            _ => tile_size,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name does not match any catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown format name")]
pub struct UnknownFormat;

impl FromStr for SourceFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceFormat::all_values()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or(UnknownFormat)
    }
}
