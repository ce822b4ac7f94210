#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use tile_repack::convert;
use tile_repack::tile_repack_formats::{ConversionOptions, DedupStrategy, SourceFormat, TargetFormat};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub source: u8,
    pub target: u8,
    pub full_size: bool,
    pub reflect: bool,
    pub tilemap: bool,
    pub data: Vec<u8>,
}

// Conversions either fail with an error or succeed; both dedup strategies agree.
fuzz_target!(|input: Input| {
    let sources = SourceFormat::all_values();
    let targets = TargetFormat::all_values();
    let options = ConversionOptions::new(
        sources[input.source as usize % sources.len()],
        targets[input.target as usize % targets.len()],
    )
    .with_full_size(input.full_size)
    .with_reflect(input.reflect)
    .with_tilemap(input.tilemap);

    let indexed = convert(input.data.clone(), options.with_dedup(DedupStrategy::Indexed));
    if input.tilemap {
        let exhaustive = convert(input.data, options.with_dedup(DedupStrategy::Exhaustive));
        assert_eq!(indexed, exhaustive);
    }
});
