//! Source/target/flag compatibility rules.
//!
//! Rules are checked in a fixed order so the first violated one is reported:
//!
//! 1. `full_size` needs a source or target with a size variant.
//! 2. `reflect` needs a source or target that mirrors tiles.
//! 3. The source/target pair must be listed in the pairing table.
//! 4. `tilemap` is refused for sprite-only targets.
//! 5. `tilemap` is refused for sources already stored as minimal 8x8 tiles.

use crate::options::ConversionOptions;
use crate::source::SourceFormat;
use crate::target::TargetFormat;
use thiserror::Error;

/// A requested conversion the catalog does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompatibilityError {
    /// Neither layout has a larger size variant.
    #[error("Neither {source_format} nor {target_format} has more than one tile size variant")]
    FullSizeNotSupported {
        /// Requested source layout.
        source_format: SourceFormat,
        /// Requested target layout.
        target_format: TargetFormat,
    },

    /// Neither layout mirrors its tiles.
    #[error("Neither {source_format} nor {target_format} uses a horizontal or vertical reflection")]
    ReflectNotSupported {
        /// Requested source layout.
        source_format: SourceFormat,
        /// Requested target layout.
        target_format: TargetFormat,
    },

    /// The pair is missing from the pairing table.
    #[error("Converting {source_format} into {target_format}{} is not supported", size_suffix(.full_size))]
    UnsupportedPairing {
        /// Requested source layout.
        source_format: SourceFormat,
        /// Requested target layout.
        target_format: TargetFormat,
        /// Whether the full size variant was requested.
        full_size: bool,
    },

    /// The target stores sprites, which are never addressed through a tilemap.
    #[error("{0} stores sprites, not tilemap tiles")]
    TilemapForSpriteTarget(TargetFormat),

    /// The source is already made of minimal 8x8 tiles.
    #[error("{0} is already stored as 8x8 tiles and gains nothing from a tilemap")]
    TilemapForAtomicSource(SourceFormat),
}

fn size_suffix(full_size: &bool) -> &'static str {
    if *full_size {
        " with full size"
    } else {
        ""
    }
}

/// Checks `options` against every catalog rule.
pub fn validate(options: &ConversionOptions) -> Result<(), CompatibilityError> {
    let source = options.source;
    let target = options.target;
    let source_descriptor = source.descriptor();
    let target_descriptor = target.descriptor();

    if options.full_size && !(source_descriptor.accepts_full_size || target.has_full_size_variant()) {
        return Err(CompatibilityError::FullSizeNotSupported {
            source_format: source,
            target_format: target,
        });
    }

    if options.reflect && !(source_descriptor.accepts_reflect || target_descriptor.accepts_reflect) {
        return Err(CompatibilityError::ReflectNotSupported {
            source_format: source,
            target_format: target,
        });
    }

    if !target.accepts_source(source, options.full_size) {
        return Err(CompatibilityError::UnsupportedPairing {
            source_format: source,
            target_format: target,
            full_size: options.full_size,
        });
    }

    if options.tilemap {
        if !target_descriptor.accepts_tilemap {
            return Err(CompatibilityError::TilemapForSpriteTarget(target));
        }
        if !source_descriptor.accepts_tilemap {
            return Err(CompatibilityError::TilemapForAtomicSource(source));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn full_size_rejected_for_mirror_into_c123() {
        let options = ConversionOptions::new(SourceFormat::NeoMirror, TargetFormat::C123)
            .with_full_size(true);
        assert_eq!(
            options.validate(),
            Err(CompatibilityError::FullSizeNotSupported {
                source_format: SourceFormat::NeoMirror,
                target_format: TargetFormat::C123,
            })
        );
    }

    #[rstest]
    #[case(SourceFormat::Planar4_16x16, TargetFormat::NeogeoSpr)]
    #[case(SourceFormat::Bmp, TargetFormat::OldSprite)]
    #[case(SourceFormat::Bmp, TargetFormat::Tc0180vcu)]
    fn full_size_accepted(#[case] source: SourceFormat, #[case] target: TargetFormat) {
        let options = ConversionOptions::new(source, target).with_full_size(true);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn full_size_planar_into_model3_is_an_unsupported_pairing() {
        let options = ConversionOptions::new(SourceFormat::Planar4_16x16, TargetFormat::Model3_8)
            .with_full_size(true);
        assert!(matches!(
            options.validate(),
            Err(CompatibilityError::UnsupportedPairing { full_size: true, .. })
        ));
    }

    #[rstest]
    #[case(SourceFormat::TaitoZ, TargetFormat::NeogeoSpr, true)]
    #[case(SourceFormat::TaitoZ, TargetFormat::Model3_8, true)]
    #[case(SourceFormat::Bmp, TargetFormat::Tc0180vcu, true)]
    #[case(SourceFormat::Bmp, TargetFormat::C123, false)]
    #[case(SourceFormat::Planar4_16x16, TargetFormat::NeogeoSpr, false)]
    fn reflect_rule(#[case] source: SourceFormat, #[case] target: TargetFormat, #[case] ok: bool) {
        let result = ConversionOptions::new(source, target).with_reflect(true).validate();
        assert_eq!(result.is_ok(), ok, "{source} -> {target}: {result:?}");
        if !ok {
            assert!(matches!(result, Err(CompatibilityError::ReflectNotSupported { .. })));
        }
    }

    #[rstest]
    #[case(TargetFormat::OldSprite, SourceFormat::Bmp)]
    #[case(TargetFormat::NeogeoSpr, SourceFormat::NeoMirror)]
    fn tilemap_rejected_for_sprite_targets(#[case] target: TargetFormat, #[case] source: SourceFormat) {
        let options = ConversionOptions::new(source, target).with_tilemap(true);
        assert_eq!(options.validate(), Err(CompatibilityError::TilemapForSpriteTarget(target)));
    }

    #[rstest]
    #[case(SourceFormat::RohgaDecr)]
    #[case(SourceFormat::PceCg)]
    fn tilemap_rejected_for_atomic_sources(#[case] source: SourceFormat) {
        let options = ConversionOptions::new(source, TargetFormat::Model3_8).with_tilemap(true);
        assert_eq!(options.validate(), Err(CompatibilityError::TilemapForAtomicSource(source)));
        assert!(options.with_tilemap(false).validate().is_ok());
    }

    #[test]
    fn raw_dumps_rejected_for_bitmap_only_targets() {
        let options = ConversionOptions::new(SourceFormat::Underfire, TargetFormat::C123);
        assert_eq!(
            options.validate(),
            Err(CompatibilityError::UnsupportedPairing {
                source_format: SourceFormat::Underfire,
                target_format: TargetFormat::C123,
                full_size: false,
            })
        );
    }

    #[test]
    fn bitmap_rejected_for_neogeo() {
        let options = ConversionOptions::new(SourceFormat::Bmp, TargetFormat::NeogeoSpr);
        assert!(matches!(
            options.validate(),
            Err(CompatibilityError::UnsupportedPairing { .. })
        ));
    }

    #[test]
    fn every_accepted_pair_validates_without_flags() {
        for source in SourceFormat::all_values() {
            for target in TargetFormat::all_values() {
                let options = ConversionOptions::new(*source, *target);
                assert_eq!(
                    options.validate().is_ok(),
                    target.accepts_source(*source, false),
                    "{source} -> {target}"
                );
            }
        }
    }

    #[test]
    fn errors_describe_the_rule() {
        let message = std::format!(
            "{}",
            CompatibilityError::TilemapForSpriteTarget(TargetFormat::NeogeoSpr)
        );
        assert_eq!(message, "neogeo_spr stores sprites, not tilemap tiles");
    }
}
