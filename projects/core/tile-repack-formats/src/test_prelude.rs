//! Common test imports for the catalog tests.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{
    CompatibilityError, ConversionOptions, DedupStrategy, PaletteModel, SourceFormat, TargetFormat,
    UnknownFormat,
};

pub use derive_enum_all_values::AllValues;
