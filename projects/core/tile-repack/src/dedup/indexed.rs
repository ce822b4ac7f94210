use super::{TileLookup, UniqueTileTable};
use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::TileCoordinate;
use std::collections::HashMap;

/// Looks tiles up by the pixels of their compare area.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    table: UniqueTileTable,
    by_content: HashMap<Box<[u8]>, u32>,
}

impl ContentIndex {
    /// Creates an empty index sized for `tile_count` tiles.
    pub fn new(tile_count: usize) -> Result<Self, ResourceError> {
        let mut by_content = HashMap::new();
        by_content.try_reserve(tile_count).map_err(|_| ResourceError {
            requested: tile_count,
            purpose: "tile content index",
        })?;
        Ok(Self {
            table: UniqueTileTable::with_capacity(tile_count)?,
            by_content,
        })
    }

    /// Looks `tile` up, appending it when its content was not seen before.
    pub fn lookup(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) -> TileLookup {
        let key = tile_pixels(decoder, tile);
        if let Some(&index) = self.by_content.get(&key) {
            return TileLookup::Duplicate(index);
        }

        let index = self.table.push(tile);
        self.by_content.insert(key, index);
        TileLookup::Unique(index)
    }

    /// The unique tiles found so far.
    pub fn table(&self) -> &UniqueTileTable {
        &self.table
    }

    /// Consumes the index, returning its table.
    pub fn into_table(self) -> UniqueTileTable {
        self.table
    }
}

/// Pixels of the compare area, row by row.
fn tile_pixels(decoder: &SourceDecoder<'_>, tile: TileCoordinate) -> Box<[u8]> {
    let width = decoder.compare_width() as i64;
    (0..decoder.grid().tile_size as i64)
        .flat_map(|y| (0..width).map(move |x| decoder.pixel(tile, x, y)))
        .collect()
}
