#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Rules deciding which source/target/flag combinations are accepted.
pub mod compatibility;

/// Resolved settings for a single conversion run.
pub mod options;

/// Layouts tiles can be read from.
pub mod source;

/// Layouts tiles can be written to.
pub mod target;

#[cfg(test)]
pub mod test_prelude;

pub use compatibility::*;
pub use options::*;
pub use source::*;
pub use target::*;
