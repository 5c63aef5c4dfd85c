use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

use crate::recipe::SkippedRegion;

#[derive(Debug, Clone, Copy, Serialize, ValueEnum, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rebuild every recognised title under --input into emulator sets
    Convert,
    /// Print the title catalog
    List,
    /// Split one file by an interleave pattern
    Deinterleave,
    /// Split one file at explicit offsets
    Slice,
    /// Split a 3DS Virtual Console SNES data.bin into ROM and PCM
    VcSnesSplit,
    /// Convert a Wii Virtual Console Genesis save to .srm
    VcGenesisSave,
    /// Extract the iNES image from a Wii Virtual Console content file
    NesExtract,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Convert => "CONVERT",
            Action::List => "LIST",
            Action::Deinterleave => "DEINTERLEAVE",
            Action::Slice => "SLICE",
            Action::VcSnesSplit => "VC-SNES-SPLIT",
            Action::VcGenesisSave => "VC-GENESIS-SAVE",
            Action::NesExtract => "NES-EXTRACT",
        }
    }

    /// Commands that read a single file rather than a directory of titles.
    pub fn takes_file(&self) -> bool {
        !matches!(self, Action::Convert | Action::List)
    }
}

#[derive(Debug, Clone, Copy, Serialize, ValueEnum, PartialEq, Eq, Default)]
pub enum ZipFormat {
    #[default]
    Torrentzip,
    Rvzstd,
    Deflate,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChecksumSet {
    pub crc32: String,
    pub sha1: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub name: String,
    pub size: u64,
    pub checksums: ChecksumSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveReport {
    pub path: PathBuf,
    pub members: Vec<MemberReport>,
    /// The archive already existed and `--overwrite` was not given.
    pub kept_existing: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum TitleStatus {
    Converted,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleReport {
    pub title: String,
    pub input: PathBuf,
    pub status: TitleStatus,
    pub error: Option<String>,
    pub archives: Vec<ArchiveReport>,
    pub skipped_regions: Vec<SkippedRegion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub size: u64,
    pub checksums: ChecksumSet,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub titles_converted: usize,
    pub titles_failed: usize,
    pub unknown_titles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExecutionPlan {
    pub config: crate::config::Config,
    pub action: Action,
    pub titles: Vec<TitleReport>,
    /// Archives filled by more than one title, packaged after all titles ran.
    pub shared_archives: Vec<ArchiveReport>,
    pub files: Vec<WrittenFile>,
    pub summary: RunSummary,
}
