//! Serialisation of decoded tiles into the target layouts.
//!
//! One encoder exists per family of targets. Linear encoders append each unique
//! tile as it is scanned; staged encoders (old sprites, Neo-Geo sprites) OR bits into
//! a zeroed buffer covering the whole grid and emit it on [`TargetEncoder::finish`].

mod linear;
mod model3;
mod neogeo;
mod old_sprite;
mod tc0180vcu;

pub use linear::LinearEncoder;
pub use model3::{BitmapModel3Encoder, PlanarModel3Encoder};
pub use neogeo::NeogeoEncoder;
pub use old_sprite::OldSpriteEncoder;
pub use tc0180vcu::Tc0180vcuEncoder;

use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::TileCoordinate;
use tile_repack_formats::TargetFormat;

/// Encoded tile data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileStreams {
    /// A single tile stream.
    Single(Vec<u8>),
    /// Planes split over two streams (Neo-Geo `.c1`/`.c2`).
    Split {
        /// Planes 0 and 1.
        first: Vec<u8>,
        /// Planes 2 and 3.
        second: Vec<u8>,
    },
}

impl TileStreams {
    /// Total bytes across all streams.
    pub fn len(&self) -> usize {
        match self {
            TileStreams::Single(data) => data.len(),
            TileStreams::Split { first, second } => first.len() + second.len(),
        }
    }

    /// True when no tile data was produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encoder for the target of a conversion.
#[derive(Debug, Clone)]
pub enum TargetEncoder {
    /// C123, Psikyo and Atari Tetris tiles from a bitmap.
    Linear(LinearEncoder),
    /// Model 3 tiles from a bitmap.
    BitmapModel3(BitmapModel3Encoder),
    /// Model 3 tiles from a raw dump.
    PlanarModel3(PlanarModel3Encoder),
    /// Early Namco System 2 sprites.
    OldSprite(OldSpriteEncoder),
    /// Neo-Geo sprites.
    Neogeo(NeogeoEncoder),
    /// Taito TC0180VCU tiles.
    Tc0180vcu(Tc0180vcuEncoder),
}

impl TargetEncoder {
    /// Creates the encoder for the decoder's options, with room for `tile_count` tiles.
    pub fn new(decoder: &SourceDecoder<'_>, tile_count: usize) -> Result<Self, ResourceError> {
        let options = decoder.options();
        let grid = decoder.grid();
        Ok(match options.target {
            TargetFormat::C123 | TargetFormat::PsikyoLaterGenerations8 | TargetFormat::Atetris => {
                TargetEncoder::Linear(LinearEncoder::new(grid, tile_count)?)
            }
            TargetFormat::Model3_8 if grid.bitmap => {
                TargetEncoder::BitmapModel3(BitmapModel3Encoder::new(grid, tile_count)?)
            }
            TargetFormat::Model3_8 => {
                TargetEncoder::PlanarModel3(PlanarModel3Encoder::new(grid, options.source, tile_count)?)
            }
            TargetFormat::OldSprite => TargetEncoder::OldSprite(OldSpriteEncoder::new(grid)?),
            TargetFormat::NeogeoSpr => TargetEncoder::Neogeo(NeogeoEncoder::new(grid)?),
            TargetFormat::Tc0180vcu => {
                TargetEncoder::Tc0180vcu(Tc0180vcuEncoder::new(grid, options, tile_count)?)
            }
        })
    }

    /// Encodes one unique tile.
    pub fn encode(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) {
        match self {
            TargetEncoder::Linear(encoder) => encoder.encode(decoder, tile),
            TargetEncoder::BitmapModel3(encoder) => encoder.encode(decoder, tile),
            TargetEncoder::PlanarModel3(encoder) => encoder.encode(decoder, tile),
            TargetEncoder::OldSprite(encoder) => encoder.encode(decoder, tile),
            TargetEncoder::Neogeo(encoder) => encoder.encode(decoder, tile),
            TargetEncoder::Tc0180vcu(encoder) => encoder.encode(decoder, tile),
        }
    }

    /// Flushes staged data and returns the tile streams.
    pub fn finish(self) -> Result<TileStreams, ResourceError> {
        Ok(match self {
            TargetEncoder::Linear(encoder) => TileStreams::Single(encoder.finish()),
            TargetEncoder::BitmapModel3(encoder) => TileStreams::Single(encoder.finish()),
            TargetEncoder::PlanarModel3(encoder) => TileStreams::Single(encoder.finish()),
            TargetEncoder::OldSprite(encoder) => TileStreams::Single(encoder.finish()),
            TargetEncoder::Neogeo(encoder) => {
                let (first, second) = encoder.finish()?;
                TileStreams::Split { first, second }
            }
            TargetEncoder::Tc0180vcu(encoder) => TileStreams::Single(encoder.finish()),
        })
    }
}
