use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::checksum::checksums_of;
use crate::config::Config;
use crate::recipe::Member;
use crate::torrentzip::{StagedMember, write_archive};
use crate::types::{ArchiveReport, MemberReport};

fn member_reports(members: &[&Member]) -> Vec<MemberReport> {
    members
        .iter()
        .map(|m| MemberReport {
            name: m.name.clone(),
            size: m.data.len() as u64,
            checksums: checksums_of(&m.data),
        })
        .collect()
}

/// Stage `members` in a scratch directory under `out_dir` and zip them into
/// `<archive>.zip`. The scratch directory is removed on every path out.
pub fn package(
    archive: &str,
    members: &[&Member],
    out_dir: &Path,
    config: &Config,
) -> anyhow::Result<ArchiveReport> {
    let dest = out_dir.join(format!("{archive}.zip"));
    let reports = member_reports(members);
    let level = config.log_level();
    for r in &reports {
        vprintln!(level, 3, "    {} {} {} {}", archive, r.name, r.checksums.crc32, r.checksums.sha1);
    }

    if dest.exists() && !config.overwrite {
        vprintln!(level, 1, "{} exists, keeping it (use --overwrite to replace)", dest.display());
        return Ok(ArchiveReport {
            path: dest,
            members: reports,
            kept_existing: true,
        });
    }

    let mut seen = HashSet::new();
    if let Some(dup) = members.iter().find(|m| !seen.insert(m.name.as_str())) {
        anyhow::bail!("{archive}: member {} declared twice", dup.name);
    }

    fs::create_dir_all(out_dir).with_context(|| format!("creating {:?}", out_dir))?;
    let staging = tempfile::Builder::new()
        .prefix(".romrebuild-")
        .tempdir_in(out_dir)
        .with_context(|| format!("creating staging directory in {:?}", out_dir))?;

    let mut staged = Vec::with_capacity(members.len());
    for member in members {
        let path = staging.path().join(&member.name);
        fs::write(&path, &member.data).with_context(|| format!("staging {:?}", path))?;
        staged.push(StagedMember {
            name: member.name.clone(),
            path,
        });
    }

    let partial = staging.path().join(format!("{archive}.zip"));
    write_archive(&staged, &partial, config.zip_format)?;
    fs::rename(&partial, &dest)
        .with_context(|| format!("moving {:?} to {:?}", partial, dest))?;
    staging
        .close()
        .with_context(|| format!("removing staging directory in {:?}", out_dir))?;

    vprintln!(level, 2, "  wrote {} ({} members)", dest.display(), reports.len());
    Ok(ArchiveReport {
        path: dest,
        members: reports,
        kept_existing: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn member(name: &str, data: &[u8]) -> Member {
        Member {
            archive: "set".to_string(),
            name: name.to_string(),
            data: data.to_vec(),
        }
    }

    #[test]
    fn packages_and_cleans_staging() {
        let out = tempfile::tempdir().unwrap();
        let members = [member("b.rom", b"bee"), member("a.rom", b"ay")];
        let refs: Vec<&Member> = members.iter().collect();
        let report = package("set", &refs, out.path(), &Config::default()).unwrap();
        assert!(!report.kept_existing);
        assert_eq!(report.members[0].checksums, checksums_of(b"bee"));

        let entries: Vec<_> = fs::read_dir(out.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "staging directory left behind");

        let mut zip = zip::ZipArchive::new(fs::File::open(&report.path).unwrap()).unwrap();
        let mut text = String::new();
        zip.by_name("a.rom").unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "ay");
    }

    #[test]
    fn existing_archive_is_kept_without_overwrite() {
        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("set.zip");
        fs::write(&dest, b"old").unwrap();
        let members = [member("a.rom", b"new")];
        let refs: Vec<&Member> = members.iter().collect();

        let report = package("set", &refs, out.path(), &Config::default()).unwrap();
        assert!(report.kept_existing);
        assert_eq!(fs::read(&dest).unwrap(), b"old");

        let config = Config {
            overwrite: true,
            ..Config::default()
        };
        let report = package("set", &refs, out.path(), &config).unwrap();
        assert!(!report.kept_existing);
        assert_ne!(fs::read(&dest).unwrap(), b"old");
    }

    #[test]
    fn duplicate_members_are_rejected() {
        let out = tempfile::tempdir().unwrap();
        let members = [member("a.rom", b"1"), member("a.rom", b"2")];
        let refs: Vec<&Member> = members.iter().collect();
        let err = package("set", &refs, out.path(), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("declared twice"));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
