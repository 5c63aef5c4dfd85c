//! Byte and bit primitives shared by every transform.
//!
//! All functions take the input by reference and return freshly allocated
//! buffers; nothing here mutates its argument.

use crate::error::{TransformError, TransformResult};

/// Split `buf` into consecutive chunks of `size` bytes. The last chunk is
/// shorter when the length is not a multiple of `size`.
pub fn split(buf: &[u8], size: usize) -> TransformResult<Vec<Vec<u8>>> {
    if size == 0 {
        return Err(TransformError::InvalidArgument(
            "split size must be non-zero".to_string(),
        ));
    }
    Ok(buf.chunks(size).map(|c| c.to_vec()).collect())
}

/// Split `buf` into `n` equal contiguous pieces, in order.
pub fn split_even(buf: &[u8], n: usize) -> TransformResult<Vec<Vec<u8>>> {
    if n == 0 {
        return Err(TransformError::InvalidArgument(
            "cannot split into zero pieces".to_string(),
        ));
    }
    if buf.len() % n != 0 {
        return Err(TransformError::SizeMismatch {
            what: "even split",
            expected: (buf.len() / n + 1) * n,
            actual: buf.len(),
        });
    }
    split(buf, (buf.len() / n).max(1)).map(|mut parts| {
        // an empty buffer still yields n (empty) pieces
        parts.resize(n, Vec::new());
        parts
    })
}

/// Split `buf` at explicit byte offsets. Offsets must be strictly ascending and
/// each must fall inside the buffer; the result has `positions.len() + 1`
/// segments.
pub fn split_at(buf: &[u8], positions: &[usize]) -> TransformResult<Vec<Vec<u8>>> {
    let mut out = Vec::with_capacity(positions.len() + 1);
    let mut start = 0usize;
    for (i, &pos) in positions.iter().enumerate() {
        if pos >= buf.len() {
            return Err(TransformError::InvalidArgument(format!(
                "split offset {pos:#x} outside buffer of {:#x} bytes",
                buf.len()
            )));
        }
        if i > 0 && pos <= start {
            return Err(TransformError::InvalidArgument(format!(
                "split offsets must be ascending ({pos:#x} after {start:#x})"
            )));
        }
        out.push(buf[start..pos].to_vec());
        start = pos;
    }
    out.push(buf[start..].to_vec());
    Ok(out)
}

/// Copy `len` bytes starting at `start`.
pub fn slice(buf: &[u8], start: usize, len: usize) -> TransformResult<Vec<u8>> {
    let end = start.checked_add(len).unwrap_or(usize::MAX);
    if end > buf.len() {
        return Err(TransformError::SizeMismatch {
            what: "slice",
            expected: end,
            actual: buf.len(),
        });
    }
    Ok(buf[start..end].to_vec())
}

pub fn concat(parts: &[Vec<u8>]) -> Vec<u8> {
    let total = parts.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

fn check_pattern(pattern: &[usize]) -> TransformResult<usize> {
    check_widths(pattern, |w| matches!(w, 1 | 2))
}

fn check_widths(pattern: &[usize], valid: impl Fn(usize) -> bool) -> TransformResult<usize> {
    if pattern.is_empty() {
        return Err(TransformError::InvalidArgument(
            "interleave pattern is empty".to_string(),
        ));
    }
    if let Some(bad) = pattern.iter().find(|&&w| !valid(w)) {
        return Err(TransformError::InvalidArgument(format!(
            "unsupported interleave unit width {bad}"
        )));
    }
    Ok(pattern.iter().sum())
}

fn distribute(
    buf: &[u8],
    pattern: &[usize],
    group: usize,
    swap_words: bool,
) -> TransformResult<Vec<Vec<u8>>> {
    if buf.len() % group != 0 {
        return Err(TransformError::SizeMismatch {
            what: "interleave input",
            expected: (buf.len() / group + 1) * group,
            actual: buf.len(),
        });
    }
    let groups = buf.len() / group;
    let mut out: Vec<Vec<u8>> = pattern
        .iter()
        .map(|w| Vec::with_capacity(groups * w))
        .collect();

    for chunk in buf.chunks_exact(group) {
        let mut pos = 0;
        for (dest, &width) in out.iter_mut().zip(pattern) {
            if swap_words && width == 2 {
                dest.push(chunk[pos + 1]);
                dest.push(chunk[pos]);
            } else {
                dest.extend_from_slice(&chunk[pos..pos + width]);
            }
            pos += width;
        }
    }
    Ok(out)
}

/// De-interleave a byte stream into `pattern.len()` buffers.
///
/// Each group of `sum(pattern)` input bytes feeds one unit to every
/// destination in order. A width of 1 moves a single byte; a width of 2 reads a
/// big-endian word from the stream and stores it little-endian.
pub fn interleave(buf: &[u8], pattern: &[usize]) -> TransformResult<Vec<Vec<u8>>> {
    let group = check_pattern(pattern)?;
    distribute(buf, pattern, group, true)
}

/// Like [`interleave`] but every unit is copied as it sits in the stream, so
/// wide units keep their byte order. Widths may be any non-zero size.
pub fn deal(buf: &[u8], pattern: &[usize]) -> TransformResult<Vec<Vec<u8>>> {
    let group = check_widths(pattern, |w| w > 0)?;
    distribute(buf, pattern, group, false)
}

/// Inverse of [`interleave`]: weave the parts back into one stream.
pub fn weave(parts: &[Vec<u8>], pattern: &[usize]) -> TransformResult<Vec<u8>> {
    let group = check_pattern(pattern)?;
    if parts.len() != pattern.len() {
        return Err(TransformError::SizeMismatch {
            what: "weave part count",
            expected: pattern.len(),
            actual: parts.len(),
        });
    }
    let groups = parts[0].len() / pattern[0];
    for (part, &width) in parts.iter().zip(pattern) {
        if part.len() != groups * width {
            return Err(TransformError::SizeMismatch {
                what: "weave part",
                expected: groups * width,
                actual: part.len(),
            });
        }
    }

    let mut out = Vec::with_capacity(groups * group);
    for g in 0..groups {
        for (part, &width) in parts.iter().zip(pattern) {
            let at = g * width;
            if width == 2 {
                out.push(part[at + 1]);
                out.push(part[at]);
            } else {
                out.push(part[at]);
            }
        }
    }
    Ok(out)
}

/// Swap the two bytes of every 16-bit word.
pub fn swap_bytes(buf: &[u8]) -> TransformResult<Vec<u8>> {
    Ok(interleave(buf, &[2])?.remove(0))
}

/// Gather bits of `value` at `indices` into a contiguous `indices.len()`-bit
/// value, `indices[0]` landing in the most significant position.
pub fn bitswap(value: u32, indices: &[u8]) -> u32 {
    let n = indices.len();
    indices.iter().enumerate().fold(0, |acc, (k, &src)| {
        acc | (((value >> src) & 1) << (n - 1 - k))
    })
}

/// Inverse of [`bitswap`]: scatter a contiguous `indices.len()`-bit value back
/// to the named positions.
pub fn reverse_bitswap(value: u32, indices: &[u8]) -> u32 {
    let n = indices.len();
    indices.iter().enumerate().fold(0, |acc, (k, &dst)| {
        acc | (((value >> (n - 1 - k)) & 1) << dst)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_buf(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 + (i >> 8)) as u8).collect()
    }

    #[test]
    fn split_keeps_short_tail() {
        let parts = split(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(parts, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn split_even_rejects_remainder() {
        assert!(split_even(&[0u8; 10], 3).is_err());
        let parts = split_even(&[0, 1, 2, 3, 4, 5], 3).unwrap();
        assert_eq!(parts, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn split_at_segments_concatenate_back() {
        let buf = pattern_buf(0x400);
        for positions in [&[][..], &[1][..], &[0x10, 0x200][..], &[0x100, 0x101, 0x3ff][..]] {
            let parts = split_at(&buf, positions).unwrap();
            assert_eq!(parts.len(), positions.len() + 1);
            assert_eq!(concat(&parts), buf);
        }
    }

    #[test]
    fn split_at_rejects_bad_offsets() {
        let buf = pattern_buf(16);
        assert!(split_at(&buf, &[16]).is_err());
        assert!(split_at(&buf, &[8, 4]).is_err());
        assert!(split_at(&buf, &[4, 4]).is_err());
    }

    #[test]
    fn interleave_bytes_and_words() {
        let buf = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let parts = interleave(&buf, &[1, 1]).unwrap();
        assert_eq!(parts, vec![vec![0, 2, 4, 6], vec![1, 3, 5, 7]]);

        let parts = interleave(&buf, &[2, 1, 1]).unwrap();
        assert_eq!(parts, vec![vec![1, 0, 5, 4], vec![2, 6], vec![3, 7]]);

        assert_eq!(swap_bytes(&buf[..4]).unwrap(), vec![1, 0, 3, 2]);
    }

    #[test]
    fn deal_keeps_unit_byte_order() {
        let buf = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let parts = deal(&buf, &[2, 1, 1]).unwrap();
        assert_eq!(parts, vec![vec![0, 1, 4, 5], vec![2, 6], vec![3, 7]]);

        // one non-zero pixel word lands in the second lane unswapped
        let parts = deal(&[0, 0, 0, 0x80, 0, 0, 0, 0], &[2, 2, 2, 2]).unwrap();
        assert_eq!(parts[1], vec![0x00, 0x80]);
        assert_eq!(parts[0], vec![0x00, 0x00]);

        assert_eq!(deal(&buf, &[4, 4]).unwrap(), vec![buf[..4].to_vec(), buf[4..].to_vec()]);
        assert!(deal(&buf, &[0, 1]).is_err());
        assert!(deal(&buf[..7], &[2, 2]).is_err());
    }

    #[test]
    fn interleave_then_weave_recovers_input() {
        let buf = pattern_buf(0x600);
        for pattern in [&[1, 1][..], &[2][..], &[1, 1, 1][..], &[1, 1, 1, 1][..], &[2, 1][..], &[2, 2, 2, 2][..]] {
            let parts = interleave(&buf, pattern).unwrap();
            let total: usize = pattern.iter().sum();
            for (part, w) in parts.iter().zip(pattern) {
                assert_eq!(part.len(), buf.len() * w / total);
            }
            assert_eq!(weave(&parts, pattern).unwrap(), buf, "pattern {pattern:?}");
        }
    }

    #[test]
    fn interleave_rejects_ragged_input() {
        assert!(interleave(&[0u8; 5], &[1, 1]).is_err());
        assert!(interleave(&[0u8; 4], &[3]).is_err());
    }

    #[test]
    fn bitswap_identity_and_reverse() {
        let identity: Vec<u8> = (0..16).rev().collect();
        assert_eq!(bitswap(0xbeef, &identity), 0xbeef);
        let reversed: Vec<u8> = (0..16).collect();
        assert_eq!(bitswap(0x0001, &reversed), 0x8000);
        assert_eq!(bitswap(0b1010, &[3, 0]), 0b10);
    }

    #[test]
    fn reverse_bitswap_undoes_bitswap() {
        let perm: [u8; 16] = [7, 6, 5, 14, 0, 15, 4, 3, 2, 8, 9, 10, 11, 12, 13, 1];
        for v in 0..=0xffffu32 {
            assert_eq!(reverse_bitswap(bitswap(v, &perm), &perm), v);
        }
        let perm24: [u8; 24] = [
            18, 19, 9, 5, 10, 17, 16, 20, 21, 22, 6, 11, 15, 14, 4, 23, 0, 1, 7, 8, 13, 12, 3, 2,
        ];
        for v in (0..0x100_0000u32).step_by(0x1235) {
            assert_eq!(reverse_bitswap(bitswap(v, &perm24), &perm24), v);
            assert_eq!(bitswap(reverse_bitswap(v, &perm24), &perm24), v);
        }
    }
}
