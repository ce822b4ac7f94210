use super::{tiles_equal, TileLookup, UniqueTileTable};
use crate::decode::SourceDecoder;
use crate::error::ResourceError;
use crate::geometry::TileCoordinate;

/// Compares each tile sample by sample against every unique tile before it.
#[derive(Debug, Clone)]
pub struct ExhaustiveScan {
    table: UniqueTileTable,
}

impl ExhaustiveScan {
    /// Creates an empty scan sized for `tile_count` tiles.
    pub fn new(tile_count: usize) -> Result<Self, ResourceError> {
        Ok(Self {
            table: UniqueTileTable::with_capacity(tile_count)?,
        })
    }

    /// Looks `tile` up, appending it when no earlier unique tile matches.
    pub fn lookup(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) -> TileLookup {
        match self
            .table
            .as_slice()
            .iter()
            .position(|&canonical| tiles_equal(decoder, canonical, tile))
        {
            Some(index) => TileLookup::Duplicate(index as u32),
            None => TileLookup::Unique(self.table.push(tile)),
        }
    }

    /// The unique tiles found so far.
    pub fn table(&self) -> &UniqueTileTable {
        &self.table
    }

    /// Consumes the scan, returning its table.
    pub fn into_table(self) -> UniqueTileTable {
        self.table
    }
}
