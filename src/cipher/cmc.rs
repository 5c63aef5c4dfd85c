//! Neo Geo CMC42/CMC50 protection chips.
//!
//! Sprite data is scrambled in 4-byte groups: the group address runs through a
//! chain of byte-keyed XOR folds (each step rewrites one address byte from a
//! table lookup on another, so the chain is always a permutation), and the
//! bytes of each group are XORed with table values chosen by the group
//! address, swapping a byte pair when an address-derived "invert" bit is set.
//! CMC50 boards also scramble the Z80 program address lines, keyed by the byte
//! sum of the first 64 KiB.
//!
//! The table contents in `cmc_tables.rs` are placeholders, not dumped board
//! values. [`super::Cipher::keys_verified`] reports them as unverified and the
//! recipe engine skips every region that needs them.

use serde::Serialize;

use super::cmc_tables;
use crate::bits::bitswap;
use crate::error::{TransformError, TransformResult};

pub(crate) struct CmcTables {
    pub(crate) type0_t03: &'static [u8; 256],
    pub(crate) type0_t12: &'static [u8; 256],
    pub(crate) type1_t03: &'static [u8; 256],
    pub(crate) type1_t12: &'static [u8; 256],
    pub(crate) address_8_15_xor1: &'static [u8; 256],
    pub(crate) address_8_15_xor2: &'static [u8; 256],
    pub(crate) address_16_23_xor1: &'static [u8; 256],
    pub(crate) address_16_23_xor2: &'static [u8; 256],
    pub(crate) address_0_7_xor: &'static [u8; 256],
}

pub(crate) struct M1Tables {
    pub(crate) address_8_15_xor: &'static [u8; 256],
    pub(crate) address_0_7_xor: &'static [u8; 256],
    pub(crate) block_swaps: &'static [[u8; 16]; 8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CmcChip {
    Cmc42,
    Cmc50,
}

impl CmcChip {
    fn tables(self) -> &'static CmcTables {
        match self {
            CmcChip::Cmc42 => &cmc_tables::CMC42,
            CmcChip::Cmc50 => &cmc_tables::CMC50,
        }
    }
}

/// Smallest group space the address chain is a permutation over.
const MIN_GROUPS: usize = 0x10000;

/// Group address space of a sprite region: a power of two, or a power of two
/// followed by a smaller power-of-two bank (three chip pairs).
#[derive(Debug, Clone, Copy)]
struct GroupSpace {
    low: usize,
    high: usize,
}

impl GroupSpace {
    fn for_len(len: usize) -> TransformResult<Self> {
        if len % 4 != 0 {
            return Err(TransformError::SizeMismatch {
                what: "cmc sprite region",
                expected: (len / 4 + 1) * 4,
                actual: len,
            });
        }
        let groups = len / 4;
        if groups >= MIN_GROUPS && groups.is_power_of_two() {
            return Ok(GroupSpace { low: groups, high: 0 });
        }
        if groups > MIN_GROUPS {
            let low = 1usize << (usize::BITS - 1 - groups.leading_zeros());
            let high = groups - low;
            if high >= MIN_GROUPS && high.is_power_of_two() {
                return Ok(GroupSpace { low, high });
            }
        }
        Err(TransformError::InvalidArgument(format!(
            "cmc sprite region of {len:#x} bytes is not a supported bank layout"
        )))
    }

    fn groups(self) -> usize {
        self.low + self.high
    }

    fn scramble(self, rpos: usize, extra_xor: u8, t: &CmcTables) -> usize {
        let mut b = rpos ^ extra_xor as usize;
        b ^= (t.address_8_15_xor1[(b >> 16) & 0xff] as usize) << 8;
        b ^= (t.address_8_15_xor2[b & 0xff] as usize) << 8;
        b ^= (t.address_16_23_xor1[b & 0xff] as usize) << 16;
        b ^= (t.address_16_23_xor2[(b >> 8) & 0xff] as usize) << 16;
        b ^= t.address_0_7_xor[(b >> 8) & 0xff] as usize;

        if self.high == 0 || rpos < self.low {
            b & (self.low - 1)
        } else {
            self.low + (b & (self.high - 1))
        }
    }
}

/// XOR values and invert flag for one byte pair of group `base`.
fn pair_key(
    table0hi: &[u8; 256],
    table0lo: &[u8; 256],
    table1: &[u8; 256],
    t: &CmcTables,
    base: usize,
    invert: bool,
) -> (u8, u8, bool) {
    let hi = (base >> 8) & 0xff;
    let tmp = table1[(base & 0xff) ^ t.address_0_7_xor[hi] as usize];
    let xor0 = (table0hi[hi] & 0xfe) | (tmp & 0x01);
    let xor1 = (tmp & 0xfe) | (table0lo[hi] & 0x01);
    (xor0, xor1, invert)
}

/// Keys for byte pairs (0, 3) and (1, 2) of group `rpos`.
fn group_keys(t: &CmcTables, rpos: usize) -> [(u8, u8, bool); 2] {
    let outer = pair_key(
        t.type0_t03,
        t.type0_t12,
        t.type1_t03,
        t,
        rpos,
        (rpos >> 8) & 1 != 0,
    );
    let inner_invert =
        ((rpos >> 16) ^ t.address_16_23_xor2[(rpos >> 8) & 0xff] as usize) & 1 != 0;
    let inner = pair_key(t.type0_t12, t.type0_t03, t.type1_t12, t, rpos, inner_invert);
    [outer, inner]
}

const PAIRS: [(usize, usize); 2] = [(0, 3), (1, 2)];

pub fn gfx_decrypt(rom: &[u8], chip: CmcChip, extra_xor: u8) -> TransformResult<Vec<u8>> {
    let space = GroupSpace::for_len(rom.len())?;
    let t = chip.tables();

    let mut buf = vec![0u8; rom.len()];
    for rpos in 0..space.groups() {
        let at = 4 * rpos;
        for ((a, b), (x0, x1, invert)) in PAIRS.into_iter().zip(group_keys(t, rpos)) {
            let (c0, c1) = (rom[at + a], rom[at + b]);
            let (r0, r1) = if invert {
                (c1 ^ x0, c0 ^ x1)
            } else {
                (c0 ^ x0, c1 ^ x1)
            };
            buf[at + a] = r0;
            buf[at + b] = r1;
        }
    }

    let mut out = vec![0u8; rom.len()];
    for rpos in 0..space.groups() {
        let src = 4 * space.scramble(rpos, extra_xor, t);
        out[4 * rpos..4 * rpos + 4].copy_from_slice(&buf[src..src + 4]);
    }
    Ok(out)
}

pub fn gfx_encrypt(plain: &[u8], chip: CmcChip, extra_xor: u8) -> TransformResult<Vec<u8>> {
    let space = GroupSpace::for_len(plain.len())?;
    let t = chip.tables();

    let mut buf = vec![0u8; plain.len()];
    for rpos in 0..space.groups() {
        let dst = 4 * space.scramble(rpos, extra_xor, t);
        buf[dst..dst + 4].copy_from_slice(&plain[4 * rpos..4 * rpos + 4]);
    }

    let mut out = vec![0u8; plain.len()];
    for rpos in 0..space.groups() {
        let at = 4 * rpos;
        for ((a, b), (x0, x1, invert)) in PAIRS.into_iter().zip(group_keys(t, rpos)) {
            let (r0, r1) = (buf[at + a] ^ x0, buf[at + b] ^ x1);
            let (c0, c1) = if invert { (r1, r0) } else { (r0, r1) };
            out[at + a] = c0;
            out[at + b] = c1;
        }
    }
    Ok(out)
}

const M1_BLOCK: usize = 0x10000;
const M1_KEY_ORDER: [u8; 16] = [12, 0, 2, 4, 8, 15, 7, 13, 10, 1, 3, 6, 11, 9, 14, 5];
const M1_OUTPUT_ORDER: [u8; 16] = [7, 15, 14, 6, 5, 13, 12, 4, 11, 3, 10, 2, 9, 1, 8, 0];

/// 16-bit byte sum of the first 64 KiB, the M1 scramble key.
pub fn m1_key(rom: &[u8]) -> u16 {
    rom.iter()
        .take(M1_BLOCK)
        .fold(0u16, |acc, &b| acc.wrapping_add(b as u16))
}

fn m1_check(len: usize) -> TransformResult<()> {
    if len == 0 || len % M1_BLOCK != 0 || len > 8 * M1_BLOCK {
        return Err(TransformError::InvalidArgument(format!(
            "m1 program of {len:#x} bytes is not 1..=8 banks of 64 KiB"
        )));
    }
    Ok(())
}

fn m1_scramble(address: usize, key: u16) -> usize {
    let t = &cmc_tables::CMC50_M1;
    let block = (address >> 16) & 7;
    let mut aux = (address & 0xffff) as u32;

    let mut order = t.block_swaps[block];
    order.reverse();

    aux ^= bitswap(key as u32, &M1_KEY_ORDER);
    aux = bitswap(aux, &order);
    aux ^= t.address_0_7_xor[((aux >> 8) & 0xff) as usize] as u32;
    aux ^= (t.address_8_15_xor[(aux & 0xff) as usize] as u32) << 8;
    aux = bitswap(aux, &M1_OUTPUT_ORDER);

    (block << 16) | aux as usize
}

pub fn m1_decrypt(rom: &[u8]) -> TransformResult<Vec<u8>> {
    m1_check(rom.len())?;
    let key = m1_key(rom);
    Ok((0..rom.len())
        .map(|i| rom[m1_scramble(i, key)])
        .collect())
}

/// Block 0 only permutes within itself, so the key computed over the plain
/// program equals the one the hardware computes over the scrambled one.
pub fn m1_encrypt(plain: &[u8]) -> TransformResult<Vec<u8>> {
    m1_check(plain.len())?;
    let key = m1_key(plain);
    let mut out = vec![0u8; plain.len()];
    for (i, &b) in plain.iter().enumerate() {
        out[m1_scramble(i, key)] = b;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| (i ^ (i >> 7) ^ (i >> 13)).wrapping_mul(31) as u8)
            .collect()
    }

    fn assert_permutation(space: GroupSpace, extra_xor: u8, chip: CmcChip) {
        let mut seen = vec![false; space.groups()];
        for rpos in 0..space.groups() {
            let b = space.scramble(rpos, extra_xor, chip.tables());
            assert!(!seen[b], "group {b:#x} hit twice");
            seen[b] = true;
        }
    }

    #[test]
    fn address_chain_is_a_permutation() {
        for chip in [CmcChip::Cmc42, CmcChip::Cmc50] {
            assert_permutation(GroupSpace::for_len(0x40000).unwrap(), 0xad, chip);
            assert_permutation(GroupSpace::for_len(0x100000).unwrap(), 0x1e, chip);
        }
    }

    #[test]
    fn three_bank_layout_is_a_permutation() {
        let space = GroupSpace::for_len(0xc0000).unwrap();
        assert_eq!((space.low, space.high), (0x20000, 0x10000));
        assert_permutation(space, 0x9f, CmcChip::Cmc42);
    }

    #[test]
    fn unsupported_sizes_are_rejected() {
        assert!(GroupSpace::for_len(0x40002).is_err());
        assert!(GroupSpace::for_len(0x20000).is_err());
        assert!(GroupSpace::for_len(0xa0000).is_err());
    }

    #[test]
    fn gfx_encrypt_is_inverse_of_hardware() {
        let plain = sample(0x40000);
        for (chip, key) in [(CmcChip::Cmc42, 0xad), (CmcChip::Cmc50, 0x1e)] {
            let enc = gfx_encrypt(&plain, chip, key).unwrap();
            assert_ne!(enc, plain);
            assert_eq!(gfx_decrypt(&enc, chip, key).unwrap(), plain);
        }
    }

    #[test]
    fn extra_xor_changes_group_order() {
        let plain = sample(0x40000);
        let a = gfx_encrypt(&plain, CmcChip::Cmc42, 0x00).unwrap();
        let b = gfx_encrypt(&plain, CmcChip::Cmc42, 0x07).unwrap();
        assert_ne!(a, b);
        assert_ne!(gfx_decrypt(&b, CmcChip::Cmc42, 0x00).unwrap(), plain);
    }

    #[test]
    fn m1_key_is_byte_sum_of_first_bank() {
        let mut rom = vec![0u8; 0x20000];
        rom[0] = 0xff;
        rom[0xffff] = 0x02;
        rom[0x10000] = 0x80;
        assert_eq!(m1_key(&rom), 0x101);
        assert_eq!(m1_key(&vec![0x01u8; 0x20000]), 0);
    }

    #[test]
    fn m1_scramble_keeps_blocks() {
        let key = 0x1234;
        for address in [0usize, 0xffff, 0x10000, 0x3abcd, 0x7ffff] {
            assert_eq!(m1_scramble(address, key) >> 16, address >> 16);
        }
    }

    #[test]
    fn m1_encrypt_is_inverse_of_hardware() {
        let plain = sample(0x40000);
        let enc = m1_encrypt(&plain).unwrap();
        assert_eq!(m1_key(&enc), m1_key(&plain));
        assert_eq!(m1_decrypt(&enc).unwrap(), plain);
        assert!(m1_encrypt(&plain[..0x18000]).is_err());
    }
}
