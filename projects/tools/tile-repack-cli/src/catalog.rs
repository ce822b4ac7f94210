//! The `--formats` listing.

use std::fmt::{self, Write};
use tile_repack_formats::{SourceFormat, TargetFormat};

const NAME_WIDTH: usize = 28;

/// Renders every source and target layout with the flags each accepts.
pub fn render() -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Source formats (-s, default {}):", SourceFormat::default())?;
    for source in SourceFormat::all_values() {
        let descriptor = source.descriptor();
        writeln!(
            out,
            "  {:<NAME_WIDTH$}{}{}",
            descriptor.name,
            descriptor.description,
            flags(descriptor.accepts_full_size, descriptor.accepts_reflect, descriptor.accepts_tilemap)
        )?;
    }

    writeln!(out, "\nTarget formats (-t, default {}):", TargetFormat::default())?;
    for target in TargetFormat::all_values() {
        let descriptor = target.descriptor();
        writeln!(
            out,
            "  {:<NAME_WIDTH$}{}{}",
            descriptor.name,
            descriptor.description,
            flags(
                descriptor.full_tile_size.is_some(),
                descriptor.accepts_reflect,
                descriptor.accepts_tilemap
            )
        )?;
    }
    Ok(out)
}

fn flags(full: bool, reflect: bool, tilemap: bool) -> String {
    let names: Vec<&str> = [(full, "--full"), (reflect, "--reflect"), (!tilemap, "no --tilemap")]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
    if names.is_empty() {
        String::new()
    } else {
        format!(" [{}]", names.join(", "))
    }
}

/// Prints [`render`] to stdout.
pub fn print() {
    match render() {
        Ok(listing) => print!("{listing}"),
        Err(e) => log::error!("Failed to render the format catalog: {e}"),
    }
}
