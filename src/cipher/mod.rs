//! Arcade security-chip transforms.
//!
//! The vendor dumps ship already-decrypted data; the reference emulator wants
//! the bytes as they sat in the original encrypted mask ROMs. Each chip module
//! therefore implements the hardware (decrypt) direction and its exact inverse,
//! and the recipe engine only ever runs the inverse.

pub mod cmc;
mod cmc_tables;
pub mod spi;
mod spi_tables;

use serde::Serialize;

use crate::error::TransformResult;

pub use cmc::CmcChip;
pub use spi::SpiChip;

pub fn width_mask(bits: u32) -> u32 {
    if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 }
}

/// Bitwise add where a carry only leaves bit `i` when bit `i` of `carry_mask`
/// is set. A carry out of the top bit wraps around and flips bit 0.
pub fn partial_carry_sum(add1: u32, add2: u32, carry_mask: u32, bits: u32) -> u32 {
    let mut res = 0u32;
    let mut carry = 0u32;
    for i in 0..bits {
        let sum = ((add1 >> i) & 1) + ((add2 >> i) & 1) + carry;
        res |= (sum & 1) << i;
        carry = if (carry_mask >> i) & 1 != 0 { sum >> 1 } else { 0 };
    }
    if carry != 0 {
        res ^= 1;
    }
    res
}

/// Bitwise subtract with the same masked propagation as
/// [`partial_carry_sum`]: `diff_i = m_i ^ s_i ^ borrow_in`, and a borrow only
/// leaves bit `i` when bit `i` of `carry_mask` is set. The final borrow flips
/// bit 0.
///
/// Undoes `partial_carry_sum(_, subtrahend, carry_mask, bits)` exactly as long
/// as the top bit of `carry_mask` is clear, which holds for every key in this
/// crate.
pub fn partial_borrow_diff(minuend: u32, subtrahend: u32, carry_mask: u32, bits: u32) -> u32 {
    let mut res = 0u32;
    let mut borrow = 0u32;
    for i in 0..bits {
        let m = (minuend >> i) & 1;
        let s = (subtrahend >> i) & 1;
        res |= (m ^ s ^ borrow) << i;
        let out = u32::from(m < s + borrow);
        borrow = out & ((carry_mask >> i) & 1);
    }
    if borrow != 0 {
        res ^= 1;
    }
    res
}

/// A cipher as named in a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cipher {
    /// Neo Geo sprite scrambler with the per-title extra XOR.
    CmcGfx { chip: CmcChip, extra_xor: u8 },
    /// Neo Geo CMC50 Z80 program address scramble.
    CmcM1,
    SpiText(SpiChip),
    SpiBg(SpiChip),
    SpiSprite(SpiChip),
}

impl Cipher {
    /// Re-encrypt plain data into the layout the board's chip expects.
    pub fn encrypt(&self, buf: &[u8]) -> TransformResult<Vec<u8>> {
        match *self {
            Cipher::CmcGfx { chip, extra_xor } => cmc::gfx_encrypt(buf, chip, extra_xor),
            Cipher::CmcM1 => cmc::m1_encrypt(buf),
            Cipher::SpiText(chip) => spi::text_encrypt(buf, chip),
            Cipher::SpiBg(chip) => spi::bg_encrypt(buf, chip),
            Cipher::SpiSprite(chip) => spi::sprite_encrypt(buf, chip),
        }
    }

    /// Whether the keys behind this cipher have been checked against a dumped
    /// board. Only the SEI252 and RISE10 tile keys have; the CMC tables and
    /// every sprite lane key are placeholders.
    pub fn keys_verified(&self) -> bool {
        match *self {
            Cipher::SpiText(chip) | Cipher::SpiBg(chip) => chip != SpiChip::Rise11,
            Cipher::CmcGfx { .. } | Cipher::CmcM1 | Cipher::SpiSprite(_) => false,
        }
    }

    /// The hardware direction.
    pub fn decrypt(&self, buf: &[u8]) -> TransformResult<Vec<u8>> {
        match *self {
            Cipher::CmcGfx { chip, extra_xor } => cmc::gfx_decrypt(buf, chip, extra_xor),
            Cipher::CmcM1 => cmc::m1_decrypt(buf),
            Cipher::SpiText(chip) => spi::text_decrypt(buf, chip),
            Cipher::SpiBg(chip) => spi::bg_decrypt(buf, chip),
            Cipher::SpiSprite(chip) => spi::sprite_decrypt(buf, chip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_sum_reference_vectors() {
        // full carry chain below the top bit: ordinary addition mod 2^16
        assert_eq!(partial_carry_sum(0x1234, 0x0fff, 0x7fff, 16), 0x2233);
        // no carries at all: plain xor
        assert_eq!(partial_carry_sum(0x00ff, 0x0f0f, 0x0000, 16), 0x0ff0);
        // carry only allowed out of bit 0
        assert_eq!(partial_carry_sum(0b0011, 0b0001, 0b0001, 4), 0b0000);
        // carry out of the top bit wraps into bit 0
        assert_eq!(partial_carry_sum(0x8000, 0x8000, 0x8000, 16), 0x0001);
    }

    #[test]
    fn borrow_diff_reference_vectors() {
        assert_eq!(partial_borrow_diff(0x2233, 0x0fff, 0x7fff, 16), 0x1234);
        assert_eq!(partial_borrow_diff(0x0ff0, 0x0f0f, 0x0000, 16), 0x00ff);
        // 0b0000 - 0b0001: borrow from bit 0 moves into bit 1, then stops
        assert_eq!(partial_borrow_diff(0b0000, 0b0001, 0b0001, 4), 0b0011);
        // borrow leaving the top bit flips bit 0
        assert_eq!(partial_borrow_diff(0x0000, 0x8000, 0x8000, 16), 0x8001);
        // mask 0x..5b lets the borrow leave bits 0 and 1 only
        assert_eq!(partial_borrow_diff(0x000000, 0x000001, 0x77cf5b, 24), 0x000007);
    }

    #[test]
    fn borrow_diff_matches_wrapping_sub_with_open_chain() {
        for (a, b) in [(0u32, 1u32), (0x1234, 0x4321), (0xffff, 0xffff), (0x8000, 0x7fff)] {
            assert_eq!(
                partial_borrow_diff(a, b, 0x7fff, 16),
                a.wrapping_sub(b) & 0xffff
            );
        }
    }

    #[test]
    fn borrow_diff_inverts_carry_sum() {
        let keys = [
            (0x77cf5bu32, 0x5a3845u32, 24u32),
            (0x4de2f8, 0x823146, 24),
            (0x55aa, 0xabcb, 16),
            (0x1d469b3a, 0x6543219b, 32),
        ];
        for (mask, key, bits) in keys {
            let wm = width_mask(bits);
            for step in 0..4096u32 {
                let v = step.wrapping_mul(0x9e37_79b9) & wm;
                let enc = partial_borrow_diff(v, key, mask, bits);
                assert_eq!(partial_carry_sum(enc, key, mask, bits), v);
                let dec = partial_carry_sum(v, key, mask, bits);
                assert_eq!(partial_borrow_diff(dec, key, mask, bits), v);
            }
        }
    }

    #[test]
    fn recipe_ciphers_invert_their_hardware_direction() {
        let ciphers = [
            (Cipher::CmcGfx { chip: CmcChip::Cmc42, extra_xor: 0xad }, 0x40000),
            (Cipher::CmcGfx { chip: CmcChip::Cmc50, extra_xor: 0x1e }, 0x40000),
            (Cipher::CmcM1, 0x10000),
            (Cipher::SpiText(SpiChip::Sei252), 0x1800),
            (Cipher::SpiBg(SpiChip::Rise10), 0x1800),
            (Cipher::SpiSprite(SpiChip::Rise11), 0x1800),
        ];
        for (cipher, len) in ciphers {
            let plain: Vec<u8> = (0..len).map(|i| (i * 13 + (i >> 9)) as u8).collect();
            let rom = cipher.encrypt(&plain).unwrap();
            assert_eq!(rom.len(), plain.len());
            assert_eq!(cipher.decrypt(&rom).unwrap(), plain, "{cipher:?}");
        }
    }

    #[test]
    fn only_dumped_tile_keys_count_as_verified() {
        assert!(Cipher::SpiText(SpiChip::Sei252).keys_verified());
        assert!(Cipher::SpiBg(SpiChip::Rise10).keys_verified());
        assert!(!Cipher::SpiText(SpiChip::Rise11).keys_verified());
        assert!(!Cipher::SpiSprite(SpiChip::Sei252).keys_verified());
        assert!(!Cipher::CmcM1.keys_verified());
        assert!(
            !Cipher::CmcGfx {
                chip: CmcChip::Cmc42,
                extra_xor: 0
            }
            .keys_verified()
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = partial_borrow_diff(0x00c0_ffee, 0x0012_3456, 0x0077_cf5b, 24);
        for _ in 0..8 {
            assert_eq!(partial_borrow_diff(0x00c0_ffee, 0x0012_3456, 0x0077_cf5b, 24), first);
        }
    }
}
