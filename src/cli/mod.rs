//! Command-line interface implementation
//!
//! This module provides the entry points for the `spritegrid` umbrella binary
//! and the three single-purpose tools, and dispatches to submodules for each
//! command.

mod decode;
mod encode;
mod split;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{
    check_section, is_blank_description, load_config, merge_cli_overrides, CliOverrides,
    ConfigSection, SpritegridConfig,
};
use crate::split::SplitVariant;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Spritegrid - Convert sprites between PNG and JSON pixel grids
#[derive(Parser)]
#[command(name = "spritegrid")]
#[command(about = "Convert 16x16 sprites between PNG and JSON pixel grids, and split sprite sheets")]
#[command(version)]
pub struct Cli {
    /// Path to a spritegrid.toml (default: discovered from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a 16x16 PNG image to a JSON pixel grid
    Encode {
        /// Path to the 16x16 PNG input file
        input: PathBuf,

        /// Path to the output JSON file
        output: PathBuf,

        /// Description stored in the JSON file
        #[arg(short, long, value_parser = parse_description)]
        description: Option<String>,
    },
    /// Split a 32x32 or 64x64 sprite sheet into 16x16 tiles
    Split {
        /// Path to the sprite sheet
        image_path: PathBuf,

        /// Sheet size in pixels (32 gives 4 tiles, 64 gives 16)
        #[arg(long, value_enum, default_value = "32")]
        size: SplitVariant,

        /// Directory for the tiles (default: next to the sheet)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Convert a JSON pixel grid back into a PNG image
    Decode {
        /// Path to the JSON grid file
        input: PathBuf,

        /// Path to the output PNG file
        output: PathBuf,
    },
}

/// Convert a 16x16 PNG image to JSON sprite format.
#[derive(Parser)]
#[command(name = "png_to_json")]
#[command(about = "Convert a 16x16 PNG image to JSON sprite format.")]
#[command(version)]
pub struct PngToJsonArgs {
    /// Path to the 16x16 PNG input file
    pub input: PathBuf,

    /// Path to the output JSON file
    pub output: PathBuf,

    /// Optional description for the JSON file
    #[arg(short, long, value_parser = parse_description)]
    pub description: Option<String>,
}

/// Arguments of the fixed-size split tools.
#[derive(Parser)]
#[command(version)]
pub struct SplitArgs {
    /// Path to the PNG sprite sheet
    pub image_path: PathBuf,
}

/// Reject empty or whitespace-only descriptions, as the config file does.
fn parse_description(s: &str) -> Result<String, String> {
    if is_blank_description(s) {
        return Err("description must be a non-empty string".to_string());
    }
    Ok(s.to_string())
}

/// Initialize `env_logger`, honoring `RUST_LOG` and defaulting to warnings.
fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

/// Load config, check the section the command reads, and apply CLI
/// overrides, reporting failures on stderr.
fn resolve_config(
    path: Option<&Path>,
    section: ConfigSection,
    overrides: &CliOverrides,
) -> Result<SpritegridConfig, ExitCode> {
    let loaded = load_config(path).and_then(|config| {
        check_section(&config, section)?;
        Ok(config)
    });

    match loaded {
        Ok(mut config) => {
            merge_cli_overrides(&mut config, overrides);
            Ok(config)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_INVALID_ARGS))
        }
    }
}

/// Entry point of the `spritegrid` binary.
pub fn run() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Encode { input, output, description } => {
            let overrides = CliOverrides { description, ..Default::default() };
            match resolve_config(config_path, ConfigSection::Encode, &overrides) {
                Ok(config) => encode::run_encode(&input, &output, config.description()),
                Err(code) => code,
            }
        }
        Commands::Split { image_path, size, out_dir } => {
            let overrides = CliOverrides { out_dir, ..Default::default() };
            match resolve_config(config_path, ConfigSection::Split, &overrides) {
                Ok(config) => split::run_split(&image_path, size, config.out_dir()),
                Err(code) => code,
            }
        }
        Commands::Decode { input, output } => decode::run_decode(&input, &output),
    }
}

/// Entry point of the `png_to_json` binary.
pub fn run_png_to_json() -> ExitCode {
    init_logging();
    let args = PngToJsonArgs::parse();
    let overrides = CliOverrides { description: args.description, ..Default::default() };

    match resolve_config(None, ConfigSection::Encode, &overrides) {
        Ok(config) => encode::run_encode(&args.input, &args.output, config.description()),
        Err(code) => code,
    }
}

/// Entry point of the fixed-size split binaries.
pub fn run_split_tool(variant: SplitVariant) -> ExitCode {
    init_logging();
    let (name, about) = match variant {
        SplitVariant::Quad => ("split_png", "Split a 32x32 sprite into four 16x16 sprites."),
        SplitVariant::Grid4x4 => {
            ("split_64x64_png", "Split a 64x64 sprite into sixteen 16x16 tiles.")
        }
    };

    let matches =
        <SplitArgs as clap::CommandFactory>::command().name(name).about(about).get_matches();
    let args = match <SplitArgs as clap::FromArgMatches>::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    match resolve_config(None, ConfigSection::Split, &CliOverrides::default()) {
        Ok(config) => split::run_split(&args.image_path, variant, config.out_dir()),
        Err(code) => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        Cli::command().debug_assert();
        PngToJsonArgs::command().debug_assert();
        SplitArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_split_size() {
        let cli = Cli::try_parse_from(["spritegrid", "split", "sheet.png", "--size", "64"]).unwrap();
        match cli.command {
            Commands::Split { size, out_dir, .. } => {
                assert_eq!(size, SplitVariant::Grid4x4);
                assert_eq!(out_dir, None);
            }
            _ => panic!("expected split command"),
        }
    }

    #[test]
    fn test_parse_split_rejects_other_sizes() {
        assert!(Cli::try_parse_from(["spritegrid", "split", "sheet.png", "--size", "48"]).is_err());
    }

    #[test]
    fn test_parse_png_to_json_description() {
        let args =
            PngToJsonArgs::try_parse_from(["png_to_json", "in.png", "out.json", "-d", "Hero"]).unwrap();
        assert_eq!(args.description.as_deref(), Some("Hero"));

        let args = PngToJsonArgs::try_parse_from(["png_to_json", "in.png", "out.json"]).unwrap();
        assert_eq!(args.description, None);
    }

    #[test]
    fn test_parse_rejects_blank_description() {
        for blank in ["", "   "] {
            assert!(
                PngToJsonArgs::try_parse_from(["png_to_json", "in.png", "out.json", "-d", blank])
                    .is_err()
            );
            assert!(Cli::try_parse_from(["spritegrid", "encode", "in.png", "out.json", "-d", blank])
                .is_err());
        }
    }
}
