//! A single conversion run over one input buffer.

use crate::allocate::with_capacity;
use crate::decode::SourceDecoder;
use crate::dedup::TileDeduplicator;
use crate::encode::{TargetEncoder, TileStreams};
use crate::error::ConvertResult;
use crate::geometry::{TileCoordinate, TileGrid};
use crate::palette::convert_palette;
use tile_repack_bmp::{parse_bmp, BmpInfo};
use tile_repack_formats::ConversionOptions;

/// Counters describing a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionStats {
    /// Tiles visited by the scan.
    pub tiles_scanned: usize,
    /// Tiles encoded. Equal to `tiles_scanned` without a tilemap.
    pub unique_tiles: usize,
    /// Tiles per row.
    pub tiles_x: u32,
    /// Tile rows.
    pub tiles_y: u32,
    /// Tile edge in pixels.
    pub tile_size: u32,
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// Encoded tiles.
    pub tiles: TileStreams,
    /// Big endian u32 tile indices, one per scanned tile, when a tilemap was requested.
    pub tilemap: Option<Vec<u8>>,
    /// Converted palette, for bitmap sources whose target has a colour model.
    pub palette: Option<Vec<u8>>,
    /// Counters.
    pub stats: ConversionStats,
}

/// Owns the input of one conversion and the geometry derived from it.
///
/// Creating a session performs every check; once it exists only allocation can fail.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: Vec<u8>,
    options: ConversionOptions,
    grid: TileGrid,
    bitmap: Option<BmpInfo>,
}

impl Session {
    /// Validates `options` and `buffer` and lays out the tile grid.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Compatibility`] when the options are rejected by the catalog.
    /// - [`ConvertError::InputValidation`] when the buffer does not fit the source layout.
    ///
    /// [`ConvertError::Compatibility`]: crate::ConvertError::Compatibility
    /// [`ConvertError::InputValidation`]: crate::ConvertError::InputValidation
    pub fn new(buffer: Vec<u8>, options: ConversionOptions) -> ConvertResult<Self> {
        options.validate()?;

        let (grid, bitmap) = if options.source.is_bitmap() {
            let info = parse_bmp(&buffer)?;
            log::debug!(
                "Bitmap {}x{} at {} bits per pixel",
                info.width,
                info.height,
                info.bit_depth
            );
            (TileGrid::for_bitmap(&info, &options)?, Some(info))
        } else {
            (TileGrid::for_raw(buffer.len(), &options)?, None)
        };

        log::debug!(
            "{} -> {}: {}x{} grid of {}px tiles",
            options.source,
            options.target,
            grid.tiles_x,
            grid.tiles_y,
            grid.tile_size
        );

        Ok(Self {
            buffer,
            options,
            grid,
            bitmap,
        })
    }

    /// The options this session converts with.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// The tile grid of the input.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Header of the input when it is a bitmap.
    pub fn bitmap(&self) -> Option<&BmpInfo> {
        self.bitmap.as_ref()
    }

    /// A decoder over the input.
    pub fn decoder(&self) -> SourceDecoder<'_> {
        let width = self.bitmap.map_or(0, |info| info.width);
        SourceDecoder::new(&self.buffer, self.options, self.grid, width)
    }

    /// Scans the grid once, deduplicating and encoding tiles, then converts the palette.
    pub fn run(&self) -> ConvertResult<ConversionOutput> {
        let decoder = self.decoder();
        let tile_count = self.grid.tile_count();
        let mut encoder = TargetEncoder::new(&decoder, tile_count)?;
        let mut tilemap = if self.options.tilemap {
            Some(TilemapBuilder::new(&self.options, tile_count)?)
        } else {
            None
        };

        let mut unique_tiles = 0;
        for tile in self.grid.scan() {
            let unique = match tilemap.as_mut() {
                Some(tilemap) => tilemap.add(&decoder, tile),
                None => true,
            };
            if unique {
                encoder.encode(&decoder, tile);
                unique_tiles += 1;
            }
        }
        log::info!(
            "{} -> {}: {} tiles scanned, {} encoded",
            self.options.source,
            self.options.target,
            tile_count,
            unique_tiles
        );

        let tiles = encoder.finish()?;
        let palette = match &self.bitmap {
            Some(info) => convert_palette(&self.buffer, info, self.options.target.descriptor().palette)?,
            None => None,
        };

        Ok(ConversionOutput {
            tiles,
            tilemap: tilemap.map(TilemapBuilder::finish),
            palette,
            stats: ConversionStats {
                tiles_scanned: tile_count,
                unique_tiles,
                tiles_x: self.grid.tiles_x,
                tiles_y: self.grid.tiles_y,
                tile_size: self.grid.tile_size,
            },
        })
    }
}

/// Validates and converts `buffer` in one call.
pub fn convert(buffer: Vec<u8>, options: ConversionOptions) -> ConvertResult<ConversionOutput> {
    Session::new(buffer, options)?.run()
}

/// Deduplicator plus the serialised tilemap.
struct TilemapBuilder {
    deduplicator: TileDeduplicator,
    entries: Vec<u8>,
}

impl TilemapBuilder {
    fn new(options: &ConversionOptions, tile_count: usize) -> ConvertResult<Self> {
        Ok(Self {
            deduplicator: TileDeduplicator::new(options.dedup, tile_count)?,
            entries: with_capacity(tile_count * size_of::<u32>(), "tilemap")?,
        })
    }

    /// Records the tile's index; returns whether it has to be encoded.
    fn add(&mut self, decoder: &SourceDecoder<'_>, tile: TileCoordinate) -> bool {
        let lookup = self.deduplicator.lookup(decoder, tile);
        self.entries.extend_from_slice(&lookup.index().to_be_bytes());
        lookup.is_unique()
    }

    fn finish(self) -> Vec<u8> {
        self.entries
    }
}
