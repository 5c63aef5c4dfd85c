use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use crc32fast::Hasher as Crc32;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::types::ZipFormat;

/// A file staged on disk, stored in the archive under `name`.
#[derive(Debug, Clone)]
pub struct StagedMember {
    pub name: String,
    pub path: PathBuf,
}

fn member_order(members: &[StagedMember], format: ZipFormat) -> Vec<&StagedMember> {
    let mut ordered: Vec<&StagedMember> = members.iter().collect();
    if format != ZipFormat::Deflate {
        ordered.sort_by_key(|m| m.name.to_lowercase());
    }
    ordered
}

fn file_options(format: ZipFormat) -> SimpleFileOptions {
    let method = match format {
        ZipFormat::Torrentzip | ZipFormat::Deflate => CompressionMethod::Deflated,
        ZipFormat::Rvzstd => CompressionMethod::Zstd,
    };
    SimpleFileOptions::default()
        .compression_method(method)
        .last_modified_time(DateTime::default())
}

/// Write `members` into a new zip at `dest`. TorrentZip and RVZSTD archives get
/// their members sorted case-insensitively and the central directory CRC
/// comment; plain deflate keeps declaration order and no comment.
pub fn write_archive(
    members: &[StagedMember],
    dest: &Path,
    format: ZipFormat,
) -> anyhow::Result<()> {
    let out = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(dest)
        .with_context(|| format!("creating {:?}", dest))?;

    let mut zip = ZipWriter::new(out);
    let mut buf = vec![0u8; 1 << 20];
    for member in member_order(members, format) {
        let mut input =
            File::open(&member.path).with_context(|| format!("opening {:?}", member.path))?;
        zip.start_file(member.name.as_str(), file_options(format))
            .with_context(|| format!("adding {} to {:?}", member.name, dest))?;
        loop {
            let n = input.read(&mut buf)?;
            if n == 0 {
                break;
            }
            zip.write_all(&buf[..n])?;
        }
    }
    let mut out = zip.finish().with_context(|| format!("finishing {:?}", dest))?;

    let prefix = match format {
        ZipFormat::Torrentzip => "TORRENTZIPPED",
        ZipFormat::Rvzstd => "RVZSTD",
        ZipFormat::Deflate => return Ok(()),
    };
    patch_eocd_comment(&mut out, prefix).with_context(|| format!("patching {:?}", dest))
}

/// Read the archive back, hash its central directory and store
/// `<prefix>-XXXXXXXX` as the EOCD comment.
fn patch_eocd_comment(out: &mut File, prefix: &str) -> anyhow::Result<()> {
    out.seek(SeekFrom::Start(0))?;
    let mut data = Vec::new();
    out.read_to_end(&mut data)?;

    let pos = data
        .windows(4)
        .rposition(|w| w == b"PK\x05\x06")
        .context("EOCD not found")?;
    if data.len() < pos + 22 {
        anyhow::bail!("EOCD truncated");
    }
    let cd_size = u32::from_le_bytes([
        data[pos + 12],
        data[pos + 13],
        data[pos + 14],
        data[pos + 15],
    ]) as usize;
    let cd_offset = u32::from_le_bytes([
        data[pos + 16],
        data[pos + 17],
        data[pos + 18],
        data[pos + 19],
    ]) as usize;
    let central_dir = data
        .get(cd_offset..cd_offset + cd_size)
        .context("central directory outside archive")?;

    let mut hasher = Crc32::new();
    hasher.update(central_dir);
    let comment = format!("{}-{:08X}", prefix, hasher.finalize());

    // comment length at pos+20, comment bytes from pos+22
    let mut patched = data;
    patched.truncate(pos + 22);
    patched[pos + 20..pos + 22].copy_from_slice(&(comment.len() as u16).to_le_bytes());
    patched.extend_from_slice(comment.as_bytes());

    out.seek(SeekFrom::Start(0))?;
    out.set_len(patched.len() as u64)?;
    out.write_all(&patched)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(dir: &Path, name: &str, data: &[u8]) -> StagedMember {
        let path = dir.join(name);
        std::fs::write(&path, data).unwrap();
        StagedMember {
            name: name.to_string(),
            path,
        }
    }

    #[test]
    fn torrentzip_sorts_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let members = vec![
            staged(dir.path(), "b.bin", b"b"),
            staged(dir.path(), "C.bin", b"c"),
            staged(dir.path(), "a.bin", b"a"),
        ];
        let names: Vec<&str> = member_order(&members, ZipFormat::Torrentzip)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["a.bin", "b.bin", "C.bin"]);
        let names: Vec<&str> = member_order(&members, ZipFormat::Deflate)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["b.bin", "C.bin", "a.bin"]);
    }

    #[test]
    fn comment_prefix_follows_format() {
        let dir = tempfile::tempdir().unwrap();
        let members = vec![staged(dir.path(), "x.bin", b"payload")];
        for (format, prefix) in [
            (ZipFormat::Torrentzip, Some("TORRENTZIPPED-")),
            (ZipFormat::Rvzstd, Some("RVZSTD-")),
            (ZipFormat::Deflate, None),
        ] {
            let dest = dir.path().join(format!("{format:?}.zip"));
            write_archive(&members, &dest, format).unwrap();
            let archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
            let comment = String::from_utf8_lossy(archive.comment()).to_string();
            match prefix {
                Some(p) => {
                    assert!(comment.starts_with(p), "{comment}");
                    assert_eq!(comment.len(), p.len() + 8);
                }
                None => assert!(comment.is_empty()),
            }
        }
    }
}
