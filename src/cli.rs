use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::types::{Action, ZipFormat};

#[derive(Parser, Debug, serde::Serialize)]
#[command(
    name = "romrebuild",
    version,
    about = "Rebuild emulator ROM sets from digital re-release dumps",
    long_about = include_str!("help_examples.md")
)]
pub struct Cli {
    /// Command to run
    #[arg(value_enum, value_name = "COMMAND")]
    pub command: Action,

    /// Input directory for `convert`, input file for the file commands
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output directory (archives for `convert`, files for the file commands)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only convert titles whose set name matches (can specify multiple)
    #[arg(short = 't', long = "title", value_name = "GLOB", action = ArgAction::Append)]
    pub title: Vec<String>,

    #[arg(
        long = "zip-format",
        value_enum,
        default_value_t = ZipFormat::Torrentzip,
    )]
    pub zip_format: ZipFormat,

    /// Replace archives and files that already exist
    #[arg(short = 'O', long = "overwrite")]
    pub overwrite: bool,

    /// Interleave pattern for `deinterleave`: unit widths of 1 or 2 bytes
    #[arg(long = "pattern", value_name = "WIDTHS", value_delimiter = ',', default_value = "1,1")]
    pub pattern: Vec<usize>,

    /// Split offsets for `slice` (decimal or 0x-prefixed hex)
    #[arg(long = "at", value_name = "OFFSETS", value_delimiter = ',')]
    pub at: Vec<String>,

    /// Number of titles to convert in parallel
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
    /// Print the execution report JSON to stdout (opt-in)
    #[arg(long = "print-plan")]
    pub print_plan: bool,
}
