//! Declarative title recipes and the interpreter that runs them.
//!
//! A [`Title`] is plain data: a list of [`Region`]s, each naming an input, an
//! optional graphics layout, a chain of [`Step`]s and the member names the
//! result is written to. [`run_title`] is the only code that knows how to
//! execute them.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

use crate::bits;
use crate::checksum::crc32_hex;
use crate::cipher::Cipher;
use crate::error::{RecipeError, TransformError, TransformResult};
use crate::gfx::{GfxLayout, encode_gfx};

/// Read access to a set of named vendor files.
pub trait BlobSource: Sync {
    fn exists(&self, name: &str) -> bool;
    fn read(&self, name: &str) -> std::io::Result<Vec<u8>>;
}

/// Files in one directory, looked up by exact name.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BlobSource for DirSource {
    fn exists(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    fn read(&self, name: &str) -> std::io::Result<Vec<u8>> {
        fs::read(self.root.join(name))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, data: Vec<u8>) -> Self {
        self.insert(name, data);
        self
    }

    pub fn insert(&mut self, name: &str, data: Vec<u8>) {
        self.files.insert(name.to_string(), data);
    }
}

impl BlobSource for MemorySource {
    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn read(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, name.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Cps1,
    NeoGeo,
    SeibuSpi,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub enum Input {
    /// Required vendor file.
    File(&'static str),
    /// Vendor file whose absence skips the region.
    Optional(&'static str),
    /// In-memory blob of `size` bytes of `fill`.
    Blank { size: usize, fill: u8 },
}

/// One transform applied to every blob of the working list; results are
/// flattened in order.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Step {
    Interleave(&'static [usize]),
    /// Interleave without swapping wide units.
    Deal(&'static [usize]),
    SplitAt(&'static [usize]),
    SplitEven(usize),
    Slice { start: usize, len: usize },
    /// Join the whole working list into one blob.
    Concat,
    /// Keep only the listed blobs, in the listed order.
    Select(&'static [usize]),
    SwapBytes,
    EncodeGfx(&'static GfxLayout),
    Cipher(Cipher),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub enum Output {
    /// One blob split evenly across the names, or one name per blob.
    Files(&'static [&'static str]),
    /// Member name chosen by the CRC32 of the single result blob.
    Identified(&'static [(u32, &'static str)]),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub input: Input,
    /// Planar encoding applied to the input before `steps`.
    pub layout: Option<&'static GfxLayout>,
    pub steps: &'static [Step],
    pub output: Output,
    /// Archive the members go to instead of the title's own.
    pub archive: Option<&'static str>,
    /// Expected total output size.
    pub size: Option<usize>,
}

impl Region {
    pub const fn new(name: &'static str, input: Input, output: Output) -> Self {
        Region {
            name,
            input,
            layout: None,
            steps: &[],
            output,
            archive: None,
            size: None,
        }
    }

    pub const fn layout(mut self, layout: &'static GfxLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub const fn steps(mut self, steps: &'static [Step]) -> Self {
        self.steps = steps;
        self
    }

    pub const fn archive(mut self, archive: &'static str) -> Self {
        self.archive = Some(archive);
        self
    }

    pub const fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct Title {
    /// Set name, also the default archive name.
    pub name: &'static str,
    pub description: &'static str,
    pub platform: Platform,
    /// Vendor file whose presence selects this title.
    pub marker: &'static str,
    pub regions: &'static [Region],
}

/// One output file of a converted title.
#[derive(Debug, Clone)]
pub struct Member {
    pub archive: String,
    pub name: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedRegion {
    pub region: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct TitleOutput {
    pub members: Vec<Member>,
    pub skipped: Vec<SkippedRegion>,
}

impl TitleOutput {
    /// Members grouped by archive, archives in first-seen order.
    pub fn by_archive(&self) -> Vec<(&str, Vec<&Member>)> {
        let mut groups: Vec<(&str, Vec<&Member>)> = Vec::new();
        for member in &self.members {
            match groups.iter_mut().find(|(a, _)| *a == member.archive) {
                Some((_, list)) => list.push(member),
                None => groups.push((member.archive.as_str(), vec![member])),
            }
        }
        groups
    }
}

enum RegionOutcome {
    Written(Vec<Member>),
    Skipped(SkippedRegion),
}

fn apply_step(step: &Step, blobs: Vec<Vec<u8>>) -> TransformResult<Vec<Vec<u8>>> {
    fn each<F>(blobs: Vec<Vec<u8>>, f: F) -> TransformResult<Vec<Vec<u8>>>
    where
        F: Fn(&[u8]) -> TransformResult<Vec<Vec<u8>>>,
    {
        let mut out = Vec::new();
        for blob in &blobs {
            out.extend(f(blob)?);
        }
        Ok(out)
    }

    match *step {
        Step::Interleave(pattern) => each(blobs, |b| bits::interleave(b, pattern)),
        Step::Deal(pattern) => each(blobs, |b| bits::deal(b, pattern)),
        Step::SplitAt(positions) => each(blobs, |b| bits::split_at(b, positions)),
        Step::SplitEven(n) => each(blobs, |b| bits::split_even(b, n)),
        Step::Slice { start, len } => each(blobs, |b| Ok(vec![bits::slice(b, start, len)?])),
        Step::Concat => Ok(vec![bits::concat(&blobs)]),
        Step::Select(indices) => indices
            .iter()
            .map(|&i| {
                blobs.get(i).cloned().ok_or_else(|| {
                    TransformError::InvalidArgument(format!(
                        "select index {i} out of {} blobs",
                        blobs.len()
                    ))
                })
            })
            .collect(),
        Step::SwapBytes => each(blobs, |b| Ok(vec![bits::swap_bytes(b)?])),
        Step::EncodeGfx(layout) => each(blobs, |b| Ok(vec![encode_gfx(b, layout)?])),
        Step::Cipher(cipher) => each(blobs, |b| Ok(vec![cipher.encrypt(b)?])),
    }
}

fn load_input(
    title: &Title,
    region: &Region,
    source: &dyn BlobSource,
) -> Result<Option<Vec<u8>>, RecipeError> {
    let read = |file: &str| {
        source.read(file).map_err(|e| RecipeError::Io {
            file: file.to_string(),
            source: e,
        })
    };
    match region.input {
        Input::File(file) => {
            if !source.exists(file) {
                return Err(RecipeError::MissingInput {
                    title: title.name.to_string(),
                    file: file.to_string(),
                });
            }
            read(file).map(Some)
        }
        Input::Optional(file) => {
            if source.exists(file) {
                read(file).map(Some)
            } else {
                Ok(None)
            }
        }
        Input::Blank { size, fill } => Ok(Some(vec![fill; size])),
    }
}

fn name_outputs(
    region: &Region,
    names: &[&str],
    mut blobs: Vec<Vec<u8>>,
) -> Result<Vec<(String, Vec<u8>)>, RecipeError> {
    if blobs.len() == 1 && names.len() > 1 {
        let blob = blobs.remove(0);
        if blob.len() % names.len() != 0 {
            return Err(RecipeError::SizeMismatch {
                region: region.name.to_string(),
                detail: format!(
                    "{:#x} bytes do not split evenly across {} files",
                    blob.len(),
                    names.len()
                ),
            });
        }
        blobs = bits::split_even(&blob, names.len())
            .map_err(|e| RecipeError::transform(region.name, e))?;
    }
    if blobs.len() != names.len() {
        return Err(RecipeError::SizeMismatch {
            region: region.name.to_string(),
            detail: format!("{} blobs for {} output names", blobs.len(), names.len()),
        });
    }
    Ok(names.iter().map(|n| n.to_string()).zip(blobs).collect())
}

fn unverified_cipher(region: &Region) -> Option<Cipher> {
    region.steps.iter().find_map(|step| match step {
        Step::Cipher(cipher) if !cipher.keys_verified() => Some(*cipher),
        _ => None,
    })
}

fn transform_region(region: &Region, data: Vec<u8>) -> Result<Vec<Vec<u8>>, RecipeError> {
    let mut blobs = vec![data];
    if let Some(layout) = region.layout {
        blobs = apply_step(&Step::EncodeGfx(layout), blobs)
            .map_err(|e| RecipeError::transform(region.name, e))?;
    }
    for step in region.steps {
        blobs = apply_step(step, blobs).map_err(|e| RecipeError::transform(region.name, e))?;
    }
    Ok(blobs)
}

fn run_region(
    title: &Title,
    region: &Region,
    source: &dyn BlobSource,
    verbose: u8,
) -> Result<RegionOutcome, RecipeError> {
    let Some(data) = load_input(title, region, source)? else {
        return Ok(RegionOutcome::Skipped(SkippedRegion {
            region: region.name.to_string(),
            reason: "optional input absent".to_string(),
        }));
    };

    let skip = |err: RecipeError| -> Result<RegionOutcome, RecipeError> {
        vprintln!(verbose, 1, "  skipping {err}");
        Ok(RegionOutcome::Skipped(SkippedRegion {
            region: region.name.to_string(),
            reason: err.to_string(),
        }))
    };

    if let Some(cipher) = unverified_cipher(region) {
        return skip(RecipeError::UnverifiedKeys {
            region: region.name.to_string(),
            cipher: format!("{cipher:?}"),
        });
    }

    let blobs = match transform_region(region, data) {
        Ok(blobs) => blobs,
        // content of an identified region is not known up front
        Err(err) if matches!(region.output, Output::Identified(_)) => return skip(err),
        Err(err) => return Err(err),
    };

    let total: usize = blobs.iter().map(Vec::len).sum();
    if let Some(expected) = region.size {
        if total != expected {
            return Err(RecipeError::SizeMismatch {
                region: region.name.to_string(),
                detail: format!("produced {total:#x} bytes, expected {expected:#x}"),
            });
        }
    }
    vprintln!(verbose, 2, "  {}: {} blob(s), {:#x} bytes", region.name, blobs.len(), total);

    let named = match region.output {
        Output::Files(names) => name_outputs(region, names, blobs)?,
        Output::Identified(table) => {
            let blob = bits::concat(&blobs);
            let crc = crc32fast::hash(&blob);
            match table.iter().find(|(c, _)| *c == crc) {
                Some((_, name)) => vec![(name.to_string(), blob)],
                None => {
                    return skip(RecipeError::UnrecognizedVariant {
                        region: region.name.to_string(),
                        checksum: crc32_hex(&blob),
                    });
                }
            }
        }
    };

    let archive = region.archive.unwrap_or(title.name);
    Ok(RegionOutcome::Written(
        named
            .into_iter()
            .map(|(name, data)| Member {
                archive: archive.to_string(),
                name,
                data,
            })
            .collect(),
    ))
}

/// Run every region of `title` against `source`. Any error aborts the title;
/// unrecognised or absent optional content and regions whose cipher keys are
/// unverified are reported in `skipped`.
pub fn run_title(
    title: &Title,
    source: &dyn BlobSource,
    verbose: u8,
) -> Result<TitleOutput, RecipeError> {
    let mut out = TitleOutput::default();
    for region in title.regions {
        match run_region(title, region, source, verbose)? {
            RegionOutcome::Written(members) => out.members.extend(members),
            RegionOutcome::Skipped(skip) => out.skipped.push(skip),
        }
    }
    Ok(out)
}

/// A title found on disk.
#[derive(Debug)]
pub struct Detected {
    pub title: &'static Title,
    pub dir: PathBuf,
}

#[derive(Debug, Default)]
pub struct Discovery {
    pub detected: Vec<Detected>,
    /// Vendor names that look like a Neo Geo title but have no recipe.
    pub unknown: Vec<String>,
}

static NEOGEO_VENDOR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z0-9]+)_game_m68k$").unwrap());

/// Walk `root` (and its immediate subdirectories) for title marker files.
pub fn discover(
    root: &Path,
    titles: &[&'static Title],
    verbose: u8,
) -> Result<Discovery, RecipeError> {
    let mut found = Discovery::default();
    for entry in WalkDir::new(root).max_depth(2).sort_by_file_name() {
        let entry = entry.map_err(|e| RecipeError::Walk {
            dir: root.to_path_buf(),
            source: e,
        })?;
        if entry.file_type().is_dir() {
            let source = DirSource::new(entry.path());
            for &title in titles.iter().filter(|t| source.exists(t.marker)) {
                vprintln!(verbose, 2, "found {} in {}", title.name, entry.path().display());
                found.detected.push(Detected {
                    title,
                    dir: entry.path().to_path_buf(),
                });
            }
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(caps) = NEOGEO_VENDOR_NAME.captures(&name) {
            if !titles.iter().any(|t| t.marker == name) {
                let vendor = caps[1].to_string();
                vprintln!(verbose, 1, "no recipe for vendor title {vendor}, skipping");
                found.unknown.push(vendor);
            }
        }
    }
    if found.detected.is_empty() {
        return Err(RecipeError::UnsupportedLayout {
            dir: root.to_path_buf(),
        });
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::NEOGEO_FIX;

    static SPLIT: Title = Title {
        name: "split",
        description: "test",
        platform: Platform::Cps1,
        marker: "in.bin",
        regions: &[
            Region::new("prog", Input::File("in.bin"), Output::Files(&["a", "b", "c", "d"]))
                .steps(&[Step::SplitEven(2), Step::Interleave(&[1, 1])])
                .size(0x40),
            Region::new("extra", Input::Optional("extra.bin"), Output::Files(&["e"])),
            Region::new("pad", Input::Blank { size: 8, fill: 0xff }, Output::Files(&["p1", "p2"]))
                .archive("shared"),
        ],
    };

    fn counting(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn steps_flatten_in_order() {
        let src = MemorySource::new().with("in.bin", counting(0x40));
        let out = run_title(&SPLIT, &src, 0).unwrap();
        let names: Vec<&str> = out.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d", "p1", "p2"]);
        assert_eq!(out.members[0].data[..4], [0, 2, 4, 6]);
        assert_eq!(out.members[1].data[..4], [1, 3, 5, 7]);
        assert_eq!(out.members[2].data[..4], [0x20, 0x22, 0x24, 0x26]);
        assert_eq!(out.members[4].data, vec![0xff; 4]);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].region, "extra");
    }

    #[test]
    fn archive_override_groups_members() {
        let src = MemorySource::new().with("in.bin", counting(0x40));
        let out = run_title(&SPLIT, &src, 0).unwrap();
        let groups = out.by_archive();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "split");
        assert_eq!(groups[0].1.len(), 4);
        assert_eq!(groups[1].0, "shared");
    }

    #[test]
    fn missing_required_input_is_fatal() {
        let err = run_title(&SPLIT, &MemorySource::new(), 0).unwrap_err();
        assert!(matches!(err, RecipeError::MissingInput { ref file, .. } if file == "in.bin"));
    }

    #[test]
    fn region_size_is_enforced() {
        let src = MemorySource::new().with("in.bin", counting(0x44));
        let err = run_title(&SPLIT, &src, 0).unwrap_err();
        assert!(matches!(err, RecipeError::SizeMismatch { ref region, .. } if region == "prog"));
    }

    #[test]
    fn blob_count_must_match_names() {
        let region = Region::new("r", Input::Blank { size: 6, fill: 0 }, Output::Files(&["x", "y"]))
            .steps(&[Step::Interleave(&[1, 1, 1])]);
        let err = name_outputs(&region, &["x", "y"], vec![vec![0; 2]; 3]).unwrap_err();
        assert!(matches!(err, RecipeError::SizeMismatch { .. }));
        let err = name_outputs(&region, &["x", "y", "z", "w"], vec![vec![0; 6]]).unwrap_err();
        assert!(err.to_string().contains("do not split evenly"));
    }

    #[test]
    fn select_and_concat() {
        let blobs = vec![vec![1], vec![2], vec![3]];
        let picked = apply_step(&Step::Select(&[2, 0]), blobs.clone()).unwrap();
        assert_eq!(picked, vec![vec![3], vec![1]]);
        assert!(apply_step(&Step::Select(&[3]), blobs.clone()).is_err());
        assert_eq!(apply_step(&Step::Concat, blobs).unwrap(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn layout_runs_before_steps() {
        static GFX: Title = Title {
            name: "gfx",
            description: "test",
            platform: Platform::NeoGeo,
            marker: "fix",
            regions: &[Region::new("fix", Input::File("fix"), Output::Files(&["s1"]))
                .layout(&NEOGEO_FIX)
                .size(0x40)],
        };
        let src = MemorySource::new().with("fix", vec![0x0f; 0x80]);
        let out = run_title(&GFX, &src, 0).unwrap();
        assert_eq!(out.members[0].data, vec![0xff; 0x40]);
    }

    #[test]
    fn unknown_identified_content_is_skipped() {
        static ID: Title = Title {
            name: "id",
            description: "test",
            platform: Platform::NeoGeo,
            marker: "bios",
            regions: &[Region::new(
                "bios",
                Input::File("bios"),
                Output::Identified(&[(0xcbf4_3926, "known.rom")]),
            )],
        };
        // crc32("123456789") == 0xcbf43926
        let known = MemorySource::new().with("bios", b"123456789".to_vec());
        let out = run_title(&ID, &known, 0).unwrap();
        assert_eq!(out.members[0].name, "known.rom");

        let unknown = MemorySource::new().with("bios", b"12345678".to_vec());
        let out = run_title(&ID, &unknown, 0).unwrap();
        assert!(out.members.is_empty());
        assert!(out.skipped[0].reason.contains("unrecognized"));
    }

    #[test]
    fn discovery_finds_markers_and_unknown_titles() {
        static DEMO: Title = Title {
            name: "demo",
            description: "test",
            platform: Platform::NeoGeo,
            marker: "demo_game_m68k",
            regions: &[],
        };
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("set");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("demo_game_m68k"), b"x").unwrap();
        fs::write(sub.join("other_game_m68k"), b"x").unwrap();

        let found = discover(dir.path(), &[&DEMO], 0).unwrap();
        assert_eq!(found.detected.len(), 1);
        assert_eq!(found.detected[0].dir, sub);
        assert_eq!(found.unknown, ["other"]);

        let empty = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover(empty.path(), &[&DEMO], 0),
            Err(RecipeError::UnsupportedLayout { .. })
        ));
    }

    #[test]
    fn regions_with_unverified_keys_are_skipped() {
        use crate::cipher::{CmcChip, SpiChip};

        static KEYED: Title = Title {
            name: "keyed",
            description: "test",
            platform: Platform::SeibuSpi,
            marker: "fix",
            regions: &[
                Region::new("text", Input::File("fix"), Output::Files(&["t"]))
                    .steps(&[Step::Cipher(Cipher::SpiText(SpiChip::Sei252))]),
                Region::new("sprites", Input::File("fix"), Output::Files(&["o"]))
                    .steps(&[Step::Cipher(Cipher::SpiSprite(SpiChip::Sei252))]),
                Region::new("cmc", Input::File("fix"), Output::Files(&["c"])).steps(&[
                    Step::Cipher(Cipher::CmcGfx {
                        chip: CmcChip::Cmc42,
                        extra_xor: 0,
                    }),
                ]),
            ],
        };
        let src = MemorySource::new().with("fix", vec![0u8; 0x600]);
        let out = run_title(&KEYED, &src, 0).unwrap();
        let names: Vec<&str> = out.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["t"]);
        let skipped: Vec<&str> = out.skipped.iter().map(|s| s.region.as_str()).collect();
        assert_eq!(skipped, ["sprites", "cmc"]);
        assert!(out.skipped.iter().all(|s| s.reason.contains("unverified")));

        // a missing required input is still fatal
        let err = run_title(&KEYED, &MemorySource::new(), 0).unwrap_err();
        assert!(matches!(err, RecipeError::MissingInput { .. }));
    }

    #[test]
    fn identified_region_transform_failure_is_skipped() {
        static ODD_BIOS: Title = Title {
            name: "odd",
            description: "test",
            platform: Platform::NeoGeo,
            marker: "bios",
            regions: &[
                Region::new(
                    "bios",
                    Input::Optional("bios"),
                    Output::Identified(&[(0xcbf4_3926, "known.rom")]),
                )
                .steps(&[Step::SwapBytes]),
                Region::new("prog", Input::File("prog"), Output::Files(&["p1"])),
            ],
        };
        let src = MemorySource::new()
            .with("bios", vec![0u8; 0x81])
            .with("prog", vec![1u8; 4]);
        let out = run_title(&ODD_BIOS, &src, 0).unwrap();
        assert_eq!(out.members.len(), 1);
        assert_eq!(out.members[0].name, "p1");
        assert_eq!(out.skipped[0].region, "bios");
        assert!(out.skipped[0].reason.contains("interleave input"));
    }

    #[test]
    fn unreadable_root_is_not_a_layout_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(&dir.path().join("absent"), &[], 0).unwrap_err();
        assert!(matches!(err, RecipeError::Walk { .. }), "{err}");
    }
}
