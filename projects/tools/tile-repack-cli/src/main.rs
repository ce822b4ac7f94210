#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod catalog;
mod error;
mod file_io;
mod output;

use argh::FromArgs;
use bytesize::ByteSize;
use error::{CliError, UsageError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tile_repack_formats::{ConversionOptions, SourceFormat, TargetFormat};

#[derive(FromArgs, Debug)]
/// Converts tile graphics between the bit layouts of arcade and console video hardware
#[argh(note = "Outputs are written next to the input as <name>.bin (or <name>.c1 and <name>.c2 for \
neogeo_spr), <name>_tilemap.bin with --tilemap and <name>_pal.bin for bitmaps.")]
struct Args {
    /// bitmap or raw dump to convert
    #[argh(positional)]
    input: Option<PathBuf>,

    /// source layout [default: bmp]
    #[argh(option, short = 's', default = "SourceFormat::default().name().to_owned()")]
    source: String,

    /// target layout [default: c123]
    #[argh(option, short = 't', default = "TargetFormat::default().name().to_owned()")]
    target: String,

    /// deduplicate tiles and write a tilemap
    #[argh(switch)]
    tilemap: bool,

    /// use the larger tile size variant of the source or target layout
    #[argh(switch)]
    full: bool,

    /// mirror tiles (pre-mirrored Taito Z dumps, TC0180VCU output)
    #[argh(switch)]
    reflect: bool,

    /// list every source and target layout and exit
    #[argh(switch)]
    formats: bool,
}

impl Args {
    fn options(&self) -> Result<ConversionOptions, UsageError> {
        let source = self
            .source
            .parse::<SourceFormat>()
            .map_err(|_| UsageError::UnknownSource(self.source.clone()))?;
        let target = self
            .target
            .parse::<TargetFormat>()
            .map_err(|_| UsageError::UnknownTarget(self.target.clone()))?;

        Ok(ConversionOptions::new(source, target)
            .with_full_size(self.full)
            .with_reflect(self.reflect)
            .with_tilemap(self.tilemap))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    if args.formats {
        catalog::print();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(
                e,
                CliError::Usage(UsageError::UnknownSource(_) | UsageError::UnknownTarget(_))
            ) {
                catalog::print();
            }
            ExitCode::FAILURE
        }
    }
}

/// Parses the process arguments. Help goes to stdout; a parse error is printed
/// with the format catalog and fails the run.
fn parse_args() -> Result<Args, ExitCode> {
    let strings: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let command = strings
        .first()
        .map(|arg| {
            Path::new(arg)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(arg.as_str())
        })
        .unwrap_or("tile-repack");
    let rest: Vec<&str> = strings.iter().skip(1).map(String::as_str).collect();

    Args::from_args(&[command], &rest).map_err(|exit| {
        if exit.status.is_ok() {
            println!("{}", exit.output);
            ExitCode::SUCCESS
        } else {
            eprintln!("{}", exit.output);
            catalog::print();
            ExitCode::FAILURE
        }
    })
}

fn run(args: &Args) -> Result<(), CliError> {
    let options = args.options()?;
    let input = args.input.as_deref().ok_or(UsageError::MissingInput)?;
    if options.source.is_bitmap() && !has_bmp_extension(input) {
        return Err(CliError::NotABitmap(input.to_path_buf()));
    }

    let buffer = file_io::read_file(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} from {}", ByteSize(buffer.len() as u64), input.display());

    let output = tile_repack::convert(buffer, options)?;
    let written = output::write_outputs(input, &output)?;

    println!(
        "{} -> {}: {} tiles scanned, {} unique",
        options.source, options.target, output.stats.tiles_scanned, output.stats.unique_tiles
    );
    for file in &written {
        println!("  {} ({})", file.path.display(), ByteSize(file.len as u64));
    }
    Ok(())
}

fn has_bmp_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("bmp"))
}
