//! Tile deduplication.
//!
//! Tiles are visited in scan order. A tile whose samples match an earlier tile
//! maps to that tile's index; any other tile is appended to the
//! [`UniqueTileTable`] and is the only kind that gets encoded.
//!
//! Two strategies are available and always agree:
//!
//! - [`DedupStrategy::Exhaustive`] compares against every unique tile, quadratic in
//!   the tile count times the tile area.
//! - [`DedupStrategy::Indexed`] looks the tile's samples up in a hash map. Unique tiles
//!   have pairwise distinct content, so the one found is the earliest match.

mod exhaustive;
mod indexed;

pub use exhaustive::ExhaustiveScan;
pub use indexed::ContentIndex;

use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::TileCoordinate;
use tile_repack_formats::DedupStrategy;

/// Outcome of looking a tile up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLookup {
    /// First occurrence of this content; the tile was appended at this index.
    Unique(u32),
    /// Same content as the unique tile at this index.
    Duplicate(u32),
}

impl TileLookup {
    /// Index written to the tilemap.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            TileLookup::Unique(index) | TileLookup::Duplicate(index) => index,
        }
    }

    /// Whether the tile has to be encoded.
    #[inline]
    pub fn is_unique(self) -> bool {
        matches!(self, TileLookup::Unique(_))
    }
}

/// First-occurrence tiles in scan order. A tile's position is its tilemap index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueTileTable {
    tiles: Vec<TileCoordinate>,
}

impl UniqueTileTable {
    fn with_capacity(capacity: usize) -> Result<Self, ResourceError> {
        let mut tiles = Vec::new();
        tiles.try_reserve(capacity).map_err(|_| ResourceError {
            requested: capacity * size_of::<TileCoordinate>(),
            purpose: "unique tile table",
        })?;
        Ok(Self { tiles })
    }

    fn push(&mut self, tile: TileCoordinate) -> u32 {
        self.tiles.push(tile);
        (self.tiles.len() - 1) as u32
    }

    /// Number of unique tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True before the first tile was looked up.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Coordinate of the unique tile at `index`.
    pub fn get(&self, index: u32) -> Option<TileCoordinate> {
        self.tiles.get(index as usize).copied()
    }

    /// Unique tiles in index order.
    pub fn as_slice(&self) -> &[TileCoordinate] {
        &self.tiles
    }
}

/// Finds duplicates with the selected [`DedupStrategy`].
#[derive(Debug, Clone)]
pub enum TileDeduplicator {
    /// See [`ContentIndex`].
    Indexed(ContentIndex),
    /// See [`ExhaustiveScan`].
    Exhaustive(ExhaustiveScan),
}

impl TileDeduplicator {
    /// Creates a deduplicator sized for `tile_count` tiles.
    pub fn new(strategy: DedupStrategy, tile_count: usize) -> Result<Self, ResourceError> {
        Ok(match strategy {
            DedupStrategy::Indexed => TileDeduplicator::Indexed(ContentIndex::new(tile_count)?),
            DedupStrategy::Exhaustive => TileDeduplicator::Exhaustive(ExhaustiveScan::new(tile_count)?),
        })
    }

    /// Looks `tile` up, appending it to the table when it is the first of its content.
    pub fn lookup(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) -> TileLookup {
        let lookup = match self {
            TileDeduplicator::Indexed(index) => index.lookup(decoder, tile),
            TileDeduplicator::Exhaustive(scan) => scan.lookup(decoder, tile),
        };
        if let TileLookup::Duplicate(index) = lookup {
            log::trace!("Tile ({}, {}) duplicates unique tile {}", tile.tile_x, tile.tile_y, index);
        }
        lookup
    }

    /// The unique tiles found so far.
    pub fn table(&self) -> &UniqueTileTable {
        match self {
            TileDeduplicator::Indexed(index) => index.table(),
            TileDeduplicator::Exhaustive(scan) => scan.table(),
        }
    }

    /// Consumes the deduplicator, returning its table.
    pub fn into_table(self) -> UniqueTileTable {
        match self {
            TileDeduplicator::Indexed(index) => index.into_table(),
            TileDeduplicator::Exhaustive(scan) => scan.into_table(),
        }
    }
}

/// Tile table and tilemap indices of a whole grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    /// Unique tiles in index order.
    pub table: UniqueTileTable,
    /// One index per scanned tile, in scan order.
    pub indices: Vec<u32>,
}

/// Deduplicates every tile of the decoder's grid.
pub fn build_tilemap(decoder: &SourceDecoder<'_>, strategy: DedupStrategy) -> Result<TileMap, ResourceError> {
    let grid = decoder.grid();
    let mut deduplicator = TileDeduplicator::new(strategy, grid.tile_count())?;
    let mut indices = Vec::new();
    indices.try_reserve_exact(grid.tile_count()).map_err(|_| ResourceError {
        requested: grid.tile_count() * size_of::<u32>(),
        purpose: "tilemap",
    })?;

    for tile in grid.scan() {
        indices.push(deduplicator.lookup(decoder, tile).index());
    }

    Ok(TileMap {
        table: deduplicator.into_table(),
        indices,
    })
}

/// Whether two tiles hold the same pixels over the compare area.
pub(crate) fn tiles_equal(decoder: &SourceDecoder<'_>, a: TileCoordinate, b: TileCoordinate) -> bool {
    let width = decoder.compare_width() as i64;
    (0..decoder.grid().tile_size as i64).all(|y| (0..width).all(|x| decoder.pixel(a, x, y) == decoder.pixel(b, x, y)))
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(DedupStrategy::Indexed)]
    #[case(DedupStrategy::Exhaustive)]
    fn identical_tiles_collapse_to_one(#[case] strategy: DedupStrategy) {
        for n in [1u32, 2, 5] {
            let bmp = BitmapBuilder::new(8 * n, 8 * n, 8)
                .pixels(|x, y| ((x % 8) * 3 + (y % 8) * 7) as u8)
                .build();
            let options = ConversionOptions::new(SourceFormat::Bmp, TargetFormat::C123);
            let decoder = bitmap_decoder(&bmp, options);
            let map = build_tilemap(&decoder, strategy).unwrap();
            assert_eq!(map.table.len(), 1);
            assert_eq!(map.table.get(0), Some(TileCoordinate::new(0, 0)));
            assert_eq!(map.indices, vec![0; (n * n) as usize]);
        }
    }

    #[rstest]
    #[case(DedupStrategy::Indexed)]
    #[case(DedupStrategy::Exhaustive)]
    fn first_occurrence_is_canonical(#[case] strategy: DedupStrategy) {
        // Tile contents by position: A B A / B C A
        let pattern = [[0u8, 1, 0], [1, 2, 0]];
        let bmp = BitmapBuilder::new(24, 16, 8)
            .pixels(move |x, y| pattern[(y / 8) as usize][(x / 8) as usize] * 50 + (x % 8) as u8)
            .build();
        let options = ConversionOptions::new(SourceFormat::Bmp, TargetFormat::C123);
        let decoder = bitmap_decoder(&bmp, options);
        let map = build_tilemap(&decoder, strategy).unwrap();
        assert_eq!(
            map.table.as_slice(),
            &[
                TileCoordinate::new(0, 0),
                TileCoordinate::new(1, 0),
                TileCoordinate::new(1, 1),
            ]
        );
        assert_eq!(map.indices, vec![0, 1, 0, 1, 2, 0]);
    }

    #[test]
    fn strategies_agree_on_noisy_input() {
        // Few distinct tiles spread over a large grid.
        let bmp = BitmapBuilder::new(64, 64, 8)
            .pixels(|x, y| {
                let tile = (x / 8) * 31 + (y / 8) * 17;
                ((tile % 5) as u8).wrapping_mul(40).wrapping_add(((x ^ y) & 3) as u8)
            })
            .build();
        let options = ConversionOptions::new(SourceFormat::Bmp, TargetFormat::C123);
        let decoder = bitmap_decoder(&bmp, options);
        let indexed = build_tilemap(&decoder, DedupStrategy::Indexed).unwrap();
        let exhaustive = build_tilemap(&decoder, DedupStrategy::Exhaustive).unwrap();
        assert_eq!(indexed, exhaustive);
        assert!(indexed.table.len() < 64);
    }

    #[test]
    fn lookup_reports_duplicates() {
        let bmp = BitmapBuilder::new(16, 8, 8).pixels(|x, _| (x % 8) as u8).build();
        let options = ConversionOptions::new(SourceFormat::Bmp, TargetFormat::C123);
        let decoder = bitmap_decoder(&bmp, options);
        let mut deduplicator = TileDeduplicator::new(DedupStrategy::Indexed, 2).unwrap();
        let first = deduplicator.lookup(&decoder, TileCoordinate::new(0, 0));
        let second = deduplicator.lookup(&decoder, TileCoordinate::new(1, 0));
        assert_eq!(first, TileLookup::Unique(0));
        assert_eq!(second, TileLookup::Duplicate(0));
        assert!(first.is_unique() && !second.is_unique());
        assert_eq!(deduplicator.table().len(), 1);
    }
}
