use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::archives;
use crate::bits;
use crate::catalog;
use crate::checksum::checksums_of;
use crate::config::Config;
use crate::progress::ProgressReporter;
use crate::recipe::{self, Detected, DirSource, Member, Title};
use crate::types::{
    Action, ArchiveReport, ExecutionPlan, RunSummary, TitleReport, TitleStatus, WrittenFile,
};
use crate::vc;

fn required<'a>(path: &'a Option<PathBuf>, flag: &str) -> anyhow::Result<&'a Path> {
    path.as_deref()
        .with_context(|| format!("{flag} is required for the selected command"))
}

/// Write one output file, refusing to replace an existing one unless
/// `--overwrite` was given.
fn write_output(path: &Path, data: &[u8], config: &Config) -> anyhow::Result<WrittenFile> {
    if path.exists() && !config.overwrite {
        anyhow::bail!("{:?} already exists (use --overwrite to replace it)", path);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    fs::write(path, data).with_context(|| format!("writing {:?}", path))?;
    vprintln!(config.log_level(), 1, "wrote {} ({:#x} bytes)", path.display(), data.len());
    Ok(WrittenFile {
        path: path.to_path_buf(),
        size: data.len() as u64,
        checksums: checksums_of(data),
    })
}

struct Converted {
    report: TitleReport,
    /// Members bound for archives other than the title's own.
    shared: Vec<Member>,
}

fn convert_title(
    detected: &Detected,
    out_dir: &Path,
    config: &Config,
    progress: &ProgressReporter,
) -> Converted {
    let title = detected.title;
    let level = config.log_level();
    progress.start_item(title.name);

    let mut report = TitleReport {
        title: title.name.to_string(),
        input: detected.dir.clone(),
        status: TitleStatus::Converted,
        error: None,
        archives: Vec::new(),
        skipped_regions: Vec::new(),
    };
    let mut shared = Vec::new();

    let result = (|| -> anyhow::Result<()> {
        let source = DirSource::new(&detected.dir);
        let output = recipe::run_title(title, &source, level)?;
        report.skipped_regions = output.skipped.clone();
        for (archive, members) in output.by_archive() {
            if archive == title.name {
                report
                    .archives
                    .push(archives::package(archive, &members, out_dir, config)?);
            } else {
                shared.extend(members.into_iter().cloned());
            }
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            if level >= 1 {
                progress.println(format!(
                    "{}: {} archive(s), {} region(s) skipped",
                    title.name,
                    report.archives.len(),
                    report.skipped_regions.len()
                ));
            }
        }
        Err(err) => {
            if level >= 1 {
                progress.println(format!("{}: failed: {:#}", title.name, err));
            }
            report.status = TitleStatus::Failed;
            report.error = Some(format!("{:#}", err));
            shared.clear();
        }
    }
    progress.finish_item();
    Converted { report, shared }
}

/// Group members by archive, first title wins on a repeated member name.
fn merge_shared(members: Vec<Member>) -> Vec<(String, Vec<Member>)> {
    let mut groups: Vec<(String, Vec<Member>)> = Vec::new();
    for member in members {
        let idx = match groups.iter().position(|(a, _)| *a == member.archive) {
            Some(idx) => idx,
            None => {
                groups.push((member.archive.clone(), Vec::new()));
                groups.len() - 1
            }
        };
        let list = &mut groups[idx].1;
        if !list.iter().any(|m| m.name == member.name) {
            list.push(member);
        }
    }
    groups
}

/// Convert every title of `titles` found under `--input`.
pub fn convert_titles(
    config: &Config,
    titles: &[&'static Title],
) -> anyhow::Result<ExecutionPlan> {
    let input = required(&config.input, "--input")?;
    let out_dir = required(&config.output, "--output")?;
    let level = config.log_level();

    let discovery = recipe::discover(input, titles, level)?;
    let matcher = config.title_matcher()?;
    let selected: Vec<Detected> = discovery
        .detected
        .into_iter()
        .filter(|d| matcher.as_ref().is_none_or(|m| m.is_match(d.title.name)))
        .collect();
    vprintln!(level, 1, "converting {} title(s)", selected.len());

    fs::create_dir_all(out_dir).with_context(|| format!("creating {:?}", out_dir))?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .context("building worker pool")?;
    let progress = ProgressReporter::new(Action::Convert, selected.len(), config);
    let converted: Vec<Converted> = pool.install(|| {
        selected
            .par_iter()
            .map(|d| convert_title(d, out_dir, config, &progress))
            .collect()
    });
    progress.finish();

    let mut reports = Vec::with_capacity(converted.len());
    let mut shared_members = Vec::new();
    for c in converted {
        reports.push(c.report);
        shared_members.extend(c.shared);
    }

    let mut shared_archives: Vec<ArchiveReport> = Vec::new();
    for (archive, members) in merge_shared(shared_members) {
        let refs: Vec<&Member> = members.iter().collect();
        shared_archives.push(archives::package(&archive, &refs, out_dir, config)?);
    }

    let failed = reports
        .iter()
        .filter(|t| t.status == TitleStatus::Failed)
        .count();
    let summary = RunSummary {
        titles_converted: reports.len() - failed,
        titles_failed: failed,
        unknown_titles: discovery.unknown,
    };
    vprintln!(
        level,
        1,
        "done: {} converted, {} failed, {} without a recipe",
        summary.titles_converted,
        summary.titles_failed,
        summary.unknown_titles.len()
    );

    Ok(ExecutionPlan {
        config: config.clone(),
        action: Action::Convert,
        titles: reports,
        shared_archives,
        files: Vec::new(),
        summary,
    })
}

fn list(config: &Config) {
    for title in catalog::TITLES.iter() {
        let platform = format!("{:?}", title.platform);
        println!("{:<10} {:<9} {}", title.name, platform, title.description);
        if config.verbose > 0 {
            for region in title.regions {
                println!("    {:<10} {:?}", region.name, region.input);
            }
        }
    }
}

/// Numbered outputs `<stem>.0`, `<stem>.1`, ... next to each other in `out_dir`.
fn write_numbered(
    input: &Path,
    out_dir: &Path,
    parts: &[Vec<u8>],
    config: &Config,
) -> anyhow::Result<Vec<WrittenFile>> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("{:?} has no file name", input))?;
    parts
        .iter()
        .enumerate()
        .map(|(n, part)| write_output(&out_dir.join(format!("{stem}.{n}")), part, config))
        .collect()
}

fn file_command(config: &Config) -> anyhow::Result<Vec<WrittenFile>> {
    let input = required(&config.input, "--input")?;
    let out_dir = required(&config.output, "--output")?;
    let data = fs::read(input).with_context(|| format!("reading {:?}", input))?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());

    match config.command {
        Action::Deinterleave => {
            let parts = bits::interleave(&data, &config.pattern)
                .with_context(|| format!("deinterleaving {:?}", input))?;
            write_numbered(input, out_dir, &parts, config)
        }
        Action::Slice => {
            let parts = bits::split_at(&data, &config.split_offsets)
                .with_context(|| format!("slicing {:?}", input))?;
            write_numbered(input, out_dir, &parts, config)
        }
        Action::VcSnesSplit => {
            let (rom, pcm) =
                vc::snes_split(&data).with_context(|| format!("splitting {:?}", input))?;
            Ok(vec![
                write_output(&out_dir.join("game.rom"), &rom, config)?,
                write_output(&out_dir.join("game.pcm"), &pcm, config)?,
            ])
        }
        Action::VcGenesisSave => {
            let srm = vc::genesis_save_to_srm(&data)
                .with_context(|| format!("converting {:?}", input))?;
            Ok(vec![write_output(
                &out_dir.join(format!("{stem}.srm")),
                &srm,
                config,
            )?])
        }
        Action::NesExtract => {
            let nes = vc::extract_nes(&data).with_context(|| format!("scanning {:?}", input))?;
            Ok(vec![write_output(
                &out_dir.join(format!("{stem}.nes")),
                &nes,
                config,
            )?])
        }
        Action::Convert | Action::List => {
            anyhow::bail!("{} does not operate on a single file", config.command.label())
        }
    }
}

/// Run the configured command and describe what was done.
pub fn perform_actions(config: &Config) -> anyhow::Result<ExecutionPlan> {
    if config.command == Action::Convert {
        return convert_titles(config, &catalog::TITLES);
    }

    let files = if config.command.takes_file() {
        file_command(config)?
    } else {
        list(config);
        Vec::new()
    };
    Ok(ExecutionPlan {
        config: config.clone(),
        action: config.command,
        titles: Vec::new(),
        shared_archives: Vec::new(),
        files,
        summary: RunSummary {
            titles_converted: 0,
            titles_failed: 0,
            unknown_titles: Vec::new(),
        },
    })
}
