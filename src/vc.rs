//! Virtual Console container helpers.

use crate::error::{TransformError, TransformResult};

const SNES_ROM_SIZE_OFFSET: usize = 0x31;
const SNES_ROM_OFFSET: usize = 0x60;

/// Split a 3DS Virtual Console SNES `data.bin` into the ROM image and the
/// trailing PCM audio block.
pub fn snes_split(data: &[u8]) -> TransformResult<(Vec<u8>, Vec<u8>)> {
    if data.len() < SNES_ROM_OFFSET {
        return Err(TransformError::SizeMismatch {
            what: "vc snes header",
            expected: SNES_ROM_OFFSET,
            actual: data.len(),
        });
    }
    let size_bytes = &data[SNES_ROM_SIZE_OFFSET..SNES_ROM_SIZE_OFFSET + 3];
    let rom_size = u32::from_le_bytes([size_bytes[0], size_bytes[1], size_bytes[2], 0]) as usize;
    let rom_end = SNES_ROM_OFFSET + rom_size;
    if rom_end > data.len() {
        return Err(TransformError::SizeMismatch {
            what: "vc snes rom",
            expected: rom_end,
            actual: data.len(),
        });
    }
    Ok((
        data[SNES_ROM_OFFSET..rom_end].to_vec(),
        data[rom_end..].to_vec(),
    ))
}

const GENESIS_HEADER_LEN: usize = 20;

fn le_u32(data: &[u8], at: usize) -> usize {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]) as usize
}

/// Convert a Wii Virtual Console Genesis save (`VCSD` container holding a
/// `SRAM` block) into a raw `.srm`: every stored byte becomes a big-endian
/// 16-bit word.
pub fn genesis_save_to_srm(data: &[u8]) -> TransformResult<Vec<u8>> {
    if data.len() < GENESIS_HEADER_LEN || &data[0..4] != b"VCSD" || &data[12..16] != b"SRAM" {
        return Err(TransformError::InvalidArgument(
            "not a VC Genesis save (missing VCSD/SRAM header)".to_string(),
        ));
    }
    let total = le_u32(data, 4);
    let size = le_u32(data, 16);
    if total.checked_sub(8) != Some(size) {
        return Err(TransformError::SizeMismatch {
            what: "vc genesis sram block",
            expected: total.saturating_sub(8),
            actual: size,
        });
    }

    let body = &data[GENESIS_HEADER_LEN..];
    let needed = size.div_ceil(2);
    if body.len() < needed {
        return Err(TransformError::SizeMismatch {
            what: "vc genesis sram data",
            expected: needed,
            actual: body.len(),
        });
    }
    let mut out: Vec<u8> = body[..needed].iter().flat_map(|&b| [0, b]).collect();
    out.truncate(size);
    Ok(out)
}

/// Everything from the first iNES header onwards.
pub fn extract_nes(data: &[u8]) -> TransformResult<Vec<u8>> {
    data.windows(4)
        .position(|w| w == b"NES\x1a")
        .map(|at| data[at..].to_vec())
        .ok_or_else(|| TransformError::InvalidArgument("no iNES header found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snes_split_reads_24_bit_size() {
        let mut data = vec![0u8; 0x60];
        data[0x31..0x34].copy_from_slice(&[0x04, 0x00, 0x00]);
        data.extend_from_slice(&[1, 2, 3, 4, 9, 9]);
        let (rom, pcm) = snes_split(&data).unwrap();
        assert_eq!(rom, vec![1, 2, 3, 4]);
        assert_eq!(pcm, vec![9, 9]);

        data[0x33] = 0x01;
        assert!(snes_split(&data).is_err());
        assert!(snes_split(&[0u8; 0x20]).is_err());
    }

    fn genesis_save(size: u32, body: &[u8]) -> Vec<u8> {
        let mut data = b"VCSD".to_vec();
        data.extend_from_slice(&(size + 8).to_le_bytes());
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(b"SRAM");
        data.extend_from_slice(&size.to_le_bytes());
        data.extend_from_slice(body);
        data
    }

    #[test]
    fn genesis_bytes_widen_to_words() {
        let srm = genesis_save_to_srm(&genesis_save(6, &[0xab, 0xcd, 0xef, 0x11])).unwrap();
        assert_eq!(srm, vec![0x00, 0xab, 0x00, 0xcd, 0x00, 0xef]);
    }

    #[test]
    fn genesis_rejects_bad_headers() {
        let mut bad = genesis_save(4, &[1, 2]);
        bad[0] = b'X';
        assert!(genesis_save_to_srm(&bad).is_err());

        let mut mismatch = genesis_save(4, &[1, 2]);
        mismatch[4] = 0x20;
        assert!(genesis_save_to_srm(&mismatch).is_err());

        assert!(genesis_save_to_srm(&genesis_save(8, &[1, 2])).is_err());
    }

    #[test]
    fn nes_extract_starts_at_header() {
        let mut app = vec![0u8; 100];
        app.extend_from_slice(b"NES\x1a\x02\x01");
        assert_eq!(extract_nes(&app).unwrap(), b"NES\x1a\x02\x01".to_vec());
        assert!(extract_nes(&[0u8; 64]).is_err());
    }
}
