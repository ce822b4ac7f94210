use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tile_repack::dedup::build_tilemap;
use tile_repack::tile_repack_formats::{ConversionOptions, DedupStrategy, SourceFormat, TargetFormat};
use tile_repack::Session;

// 32 byte tiles, one in every `period` carries its own content and the rest repeat a few patterns
fn generate_dump(tiles: usize, period: usize) -> Vec<u8> {
    let mut data = vec![0u8; tiles * 32];
    for (index, tile) in data.chunks_exact_mut(32).enumerate() {
        let seed = if index % period == 0 { index } else { index % 7 };
        for (offset, byte) in tile.iter_mut().enumerate() {
            *byte = (seed.wrapping_mul(31) ^ offset.wrapping_mul(17)) as u8;
        }
    }
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tile Deduplication");
    let options = ConversionOptions::new(SourceFormat::Planar4_16x16, TargetFormat::Model3_8).with_tilemap(true);

    for tiles in [256, 2048] {
        let dump = generate_dump(tiles, 4);
        group.throughput(Throughput::Bytes(dump.len() as u64));
        let session = Session::new(dump, options).unwrap();
        let decoder = session.decoder();

        for strategy in [DedupStrategy::Indexed, DedupStrategy::Exhaustive] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), tiles),
                &strategy,
                |b, &strategy| b.iter(|| build_tilemap(black_box(&decoder), strategy).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
