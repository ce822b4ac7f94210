#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Bitmap header parsing.
pub mod bmp;

/// Errors raised while reading a bitmap header.
pub mod error;

#[cfg(test)]
pub mod test_prelude;

pub use bmp::*;
pub use error::*;
