//! Conversion settings.

use crate::compatibility::{validate, CompatibilityError};
use crate::source::SourceFormat;
use crate::target::TargetFormat;
use derive_enum_all_values::AllValues;

/// How duplicate tiles are located when building a tilemap.
///
/// Both strategies pick the earliest identical tile in scan order and therefore
/// produce identical tilemaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues, Default)]
pub enum DedupStrategy {
    /// Look tiles up by their decoded content.
    #[default]
    Indexed,
    /// Compare each tile against every tile scanned before it.
    ///
    /// Quadratic in the tile count; kept as the reference behaviour.
    Exhaustive,
}

/// Settings for a single conversion.
///
/// Construct with [`ConversionOptions::new`] (or [`Default`] for bitmap to C123), chain the
/// `with_*` setters, then call [`ConversionOptions::validate`] before decoding anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConversionOptions {
    /// Layout the input is stored in.
    pub source: SourceFormat,
    /// Layout the tiles are written in.
    pub target: TargetFormat,
    /// Select the larger size variant of the source or target layout.
    pub full_size: bool,
    /// Mirror tiles (horizontally for Taito Z input, vertically for TC0180VCU output).
    pub reflect: bool,
    /// Deduplicate tiles and write a tilemap.
    pub tilemap: bool,
    /// Duplicate lookup used when `tilemap` is set.
    pub dedup: DedupStrategy,
}

impl ConversionOptions {
    /// Creates options converting `source` into `target` with every flag cleared.
    pub fn new(source: SourceFormat, target: TargetFormat) -> Self {
        Self {
            source,
            target,
            ..Self::default()
        }
    }

    /// Sets [`ConversionOptions::full_size`].
    pub fn with_full_size(mut self, full_size: bool) -> Self {
        self.full_size = full_size;
        self
    }

    /// Sets [`ConversionOptions::reflect`].
    pub fn with_reflect(mut self, reflect: bool) -> Self {
        self.reflect = reflect;
        self
    }

    /// Sets [`ConversionOptions::tilemap`].
    pub fn with_tilemap(mut self, tilemap: bool) -> Self {
        self.tilemap = tilemap;
        self
    }

    /// Sets [`ConversionOptions::dedup`].
    pub fn with_dedup(mut self, dedup: DedupStrategy) -> Self {
        self.dedup = dedup;
        self
    }

    /// Tile edge in pixels, taken from the target layout.
    pub fn tile_size(&self) -> u32 {
        self.target.tile_size(self.full_size)
    }

    /// Bits per pixel of the target, which a bitmap source must match.
    pub fn target_depth(&self) -> u32 {
        self.target.bit_depth()
    }

    /// Sample columns per tile row of a raw dump.
    pub fn tile_depth(&self) -> u32 {
        self.source.tile_depth(self.tile_size())
    }

    /// Checks every flag and the source/target pairing against the catalog.
    pub fn validate(&self) -> Result<(), CompatibilityError> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn defaults_convert_bitmap_to_c123() {
        let options = ConversionOptions::default();
        assert_eq!(options.source, SourceFormat::Bmp);
        assert_eq!(options.target, TargetFormat::C123);
        assert!(!options.full_size && !options.reflect && !options.tilemap);
        assert_eq!(options.dedup, DedupStrategy::Indexed);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn setters_chain() {
        let options = ConversionOptions::new(SourceFormat::Bmp, TargetFormat::Tc0180vcu)
            .with_full_size(true)
            .with_reflect(true)
            .with_tilemap(true)
            .with_dedup(DedupStrategy::Exhaustive);
        assert_eq!(options.tile_size(), 16);
        assert_eq!(options.target_depth(), 4);
        assert!(options.full_size && options.reflect && options.tilemap);
        assert_eq!(options.dedup, DedupStrategy::Exhaustive);
    }

    #[rstest]
    #[case(SourceFormat::OldSprite, 8)]
    #[case(SourceFormat::Underfire, 5)]
    #[case(SourceFormat::HalfDepth, 4)]
    fn tile_depth_follows_model3_tile_size(#[case] source: SourceFormat, #[case] expected: u32) {
        let options = ConversionOptions::new(source, TargetFormat::Model3_8);
        assert_eq!(options.tile_depth(), expected);
    }
}
