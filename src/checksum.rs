use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use crc32fast::Hasher as Crc32;
use sha1_smol::Sha1;

use crate::types::ChecksumSet;

const STREAM_CHUNK_SIZE: usize = 512 * 1024;

pub fn crc32_hex(data: &[u8]) -> String {
    format!("{:08x}", crc32fast::hash(data))
}

pub fn checksums_of(data: &[u8]) -> ChecksumSet {
    ChecksumSet {
        crc32: crc32_hex(data),
        sha1: Sha1::from(data).digest().to_string(),
    }
}

/// Stream `reader` through both hashers, returning the set and the byte count.
pub fn compute_checksums_stream<R: Read>(mut reader: R) -> anyhow::Result<(ChecksumSet, u64)> {
    let mut crc32 = Crc32::new();
    let mut sha1 = Sha1::new();
    let mut processed: u64 = 0;
    let mut buf = vec![0u8; STREAM_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        processed = processed.saturating_add(n as u64);
        crc32.update(&buf[..n]);
        sha1.update(&buf[..n]);
    }
    Ok((
        ChecksumSet {
            crc32: format!("{:08x}", crc32.finalize()),
            sha1: sha1.digest().to_string(),
        },
        processed,
    ))
}

pub fn compute_checksums(path: &Path) -> anyhow::Result<ChecksumSet> {
    let file = File::open(path).with_context(|| format!("opening file for checksum: {path:?}"))?;
    let (set, _) = compute_checksums_stream(file)
        .with_context(|| format!("reading file for checksum: {path:?}"))?;
    Ok(set)
}
