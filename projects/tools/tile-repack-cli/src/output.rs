//! Naming and writing of the converted files.

use crate::error::CliError;
use crate::file_io::write_file;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tile_repack::{ConversionOutput, TileStreams};

/// A file created by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub len: usize,
}

/// `input` with its final extension replaced by `suffix`.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.with_extension(""));
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes every stream of `output` next to `input`.
pub fn write_outputs(input: &Path, output: &ConversionOutput) -> Result<Vec<WrittenFile>, CliError> {
    let mut files: Vec<(&str, &[u8])> = match &output.tiles {
        TileStreams::Single(tiles) => vec![(".bin", tiles.as_slice())],
        TileStreams::Split { first, second } => vec![(".c1", first.as_slice()), (".c2", second.as_slice())],
    };
    if let Some(tilemap) = &output.tilemap {
        files.push(("_tilemap.bin", tilemap.as_slice()));
    }
    if let Some(palette) = &output.palette {
        files.push(("_pal.bin", palette.as_slice()));
    }

    let mut written = Vec::with_capacity(files.len());
    for (suffix, data) in files {
        let path = output_path(input, suffix);
        write_file(&path, data).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {} bytes to {}", data.len(), path.display());
        written.push(WrittenFile {
            path,
            len: data.len(),
        });
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("art/title.bmp", ".bin", "art/title.bin")]
    #[case("art/title.bmp", "_pal.bin", "art/title_pal.bin")]
    #[case("roms/sprites.u12.bin", ".c1", "roms/sprites.u12.c1")]
    #[case("roms/sprites", "_tilemap.bin", "roms/sprites_tilemap.bin")]
    fn replaces_final_extension(#[case] input: &str, #[case] suffix: &str, #[case] expected: &str) {
        assert_eq!(output_path(Path::new(input), suffix), PathBuf::from(expected));
    }
}
