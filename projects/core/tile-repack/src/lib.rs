#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub(crate) mod allocate;

/// Sample addressing for every source layout.
pub mod decode;

/// Duplicate tile detection and tilemap construction.
pub mod dedup;

/// Writers for every target layout.
pub mod encode;

/// Error types returned by conversion runs.
pub mod error;

/// Tile grids laid over bitmaps and raw dumps.
pub mod geometry;

/// Palette conversion into the colour models of the targets.
pub mod palette;

/// Conversion runs tying decoding, deduplication and encoding together.
pub mod session;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use decode::SourceDecoder;
pub use encode::TileStreams;
pub use error::*;
pub use geometry::{TileCoordinate, TileGrid};
pub use session::*;

pub use tile_repack_formats;
