//! Seibu SPI graphics encryption (SEI252, RISE10 and RISE11 chips).
//!
//! Text and background tiles are stored as big-endian 24-bit pixel triples;
//! each triple is bit-permuted and then combined with a tile-number-dependent
//! key through a masked-carry add. Sprites split every 16-bit word across three
//! ROMs: the top two planes form one 16-bit lane and the remaining four planes
//! a 32-bit lane, each with its own add/mask/xor key and a per-address choice
//! of 16-bit bit permutation.
//!
//! Only the SEI252 and RISE10 text/background keys are known board values.
//! The sprite permutation tables in `spi_tables.rs`, the sprite lane keys and
//! all RISE11 constants are placeholders. The recipe engine skips regions that
//! need them.

use serde::Serialize;

use super::spi_tables::{RISE10_KEY_TABLE, RISE11_KEY_TABLE, SEI252_KEY_TABLE, SPI_BITSWAP};
use super::{partial_borrow_diff, partial_carry_sum, width_mask};
use crate::bits::{bitswap, reverse_bitswap};
use crate::error::{TransformError, TransformResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpiChip {
    Sei252,
    Rise10,
    Rise11,
}

struct TileKeys {
    add: u32,
    mask: u32,
    xor: u32,
    order: [u8; 24],
}

struct LaneKeys {
    add: u32,
    mask: u32,
    xor: u32,
    bits: u32,
    table_offset: u8,
}

struct SpiVariant {
    tile: TileKeys,
    plane54: LaneKeys,
    plane3210: LaneKeys,
    key_table: &'static [u8; 256],
}

static SEI252: SpiVariant = SpiVariant {
    tile: TileKeys {
        add: 0x5a3845,
        mask: 0x77cf5b,
        xor: 0x1378df,
        order: [
            18, 19, 9, 5, 10, 17, 16, 20, 21, 22, 6, 11, 15, 14, 4, 23, 0, 1, 7, 8, 13, 12, 3, 2,
        ],
    },
    plane54: LaneKeys {
        add: 0x4a6b,
        mask: 0x3b5c,
        xor: 0x2d17,
        bits: 16,
        table_offset: 0x00,
    },
    plane3210: LaneKeys {
        add: 0x1f3a_8c65,
        mask: 0x6d8a_4e1b,
        xor: 0x0c5a_92e3,
        bits: 32,
        table_offset: 0x40,
    },
    key_table: &SEI252_KEY_TABLE,
};

static RISE10: SpiVariant = SpiVariant {
    tile: TileKeys {
        add: 0x823146,
        mask: 0x4de2f8,
        xor: 0x157adc,
        order: [
            1, 3, 13, 10, 9, 16, 17, 8, 7, 0, 4, 14, 15, 23, 11, 2, 21, 19, 20, 6, 5, 18, 12, 22,
        ],
    },
    plane54: LaneKeys {
        add: 0xabcb,
        mask: 0x55aa,
        xor: 0x0000,
        bits: 16,
        table_offset: 0x00,
    },
    plane3210: LaneKeys {
        add: 0x6543_219b,
        mask: 0x1d46_9b3a,
        xor: 0x0000_0000,
        bits: 32,
        table_offset: 0x80,
    },
    key_table: &RISE10_KEY_TABLE,
};

static RISE11: SpiVariant = SpiVariant {
    tile: TileKeys {
        add: 0x3b6a1d,
        mask: 0x5e4dd9,
        xor: 0x0ad3c1,
        order: [
            13, 12, 22, 6, 20, 7, 18, 11, 3, 0, 16, 19, 17, 1, 4, 10, 5, 8, 2, 23, 9, 21, 14, 15,
        ],
    },
    plane54: LaneKeys {
        add: 0x6b8d,
        mask: 0x2ed5,
        xor: 0x1a6c,
        bits: 16,
        table_offset: 0x10,
    },
    plane3210: LaneKeys {
        add: 0x8c2e_4d31,
        mask: 0x3a9c_5e27,
        xor: 0x07b3_e15d,
        bits: 32,
        table_offset: 0xc0,
    },
    key_table: &RISE11_KEY_TABLE,
};

impl SpiChip {
    fn variant(self) -> &'static SpiVariant {
        match self {
            SpiChip::Sei252 => &SEI252,
            SpiChip::Rise10 => &RISE10,
            SpiChip::Rise11 => &RISE11,
        }
    }
}

const TEXT_TILE_SHIFT: u32 = 4; // 8x8 pixels, 16 triples
const BG_TILE_SHIFT: u32 = 6; // 16x16 pixels, 64 triples
const BG_BANK: usize = 0xc0000;

fn check_triples(buf: &[u8], what: &'static str) -> TransformResult<()> {
    if buf.len() % 3 != 0 {
        return Err(TransformError::SizeMismatch {
            what,
            expected: (buf.len() / 3 + 1) * 3,
            actual: buf.len(),
        });
    }
    Ok(())
}

fn map_tiles(buf: &[u8], tile_shift: u32, f: impl Fn(u32, u32) -> u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    for (i, t) in buf.chunks_exact(3).enumerate() {
        let val = (t[0] as u32) << 16 | (t[1] as u32) << 8 | t[2] as u32;
        let v = f(val, (i >> tile_shift) as u32);
        out.extend_from_slice(&[(v >> 16) as u8, (v >> 8) as u8, v as u8]);
    }
    out
}

impl TileKeys {
    fn key(&self, tile: u32) -> u32 {
        tile.wrapping_add(self.add) & 0xff_ffff
    }

    fn decrypt(&self, val: u32, tile: u32) -> u32 {
        let v = bitswap(val, &self.order);
        partial_carry_sum(v, self.key(tile), self.mask, 24) ^ self.xor
    }

    fn encrypt(&self, val: u32, tile: u32) -> u32 {
        let v = partial_borrow_diff(val ^ self.xor, self.key(tile), self.mask, 24);
        reverse_bitswap(v, &self.order)
    }
}

pub fn text_decrypt(buf: &[u8], chip: SpiChip) -> TransformResult<Vec<u8>> {
    check_triples(buf, "spi text region")?;
    let keys = &chip.variant().tile;
    Ok(map_tiles(buf, TEXT_TILE_SHIFT, |v, t| keys.decrypt(v, t)))
}

pub fn text_encrypt(buf: &[u8], chip: SpiChip) -> TransformResult<Vec<u8>> {
    check_triples(buf, "spi text region")?;
    let keys = &chip.variant().tile;
    Ok(map_tiles(buf, TEXT_TILE_SHIFT, |v, t| keys.encrypt(v, t)))
}

/// Background tile numbers restart with every 0xc0000-byte bank.
fn map_banks(buf: &[u8], f: impl Fn(u32, u32) -> u32) -> Vec<u8> {
    buf.chunks(BG_BANK)
        .flat_map(|bank| map_tiles(bank, BG_TILE_SHIFT, &f))
        .collect()
}

pub fn bg_decrypt(buf: &[u8], chip: SpiChip) -> TransformResult<Vec<u8>> {
    check_triples(buf, "spi background region")?;
    let keys = &chip.variant().tile;
    Ok(map_banks(buf, |v, t| keys.decrypt(v, t)))
}

pub fn bg_encrypt(buf: &[u8], chip: SpiChip) -> TransformResult<Vec<u8>> {
    check_triples(buf, "spi background region")?;
    let keys = &chip.variant().tile;
    Ok(map_banks(buf, |v, t| keys.encrypt(v, t)))
}

impl LaneKeys {
    fn swaps(&self, key_table: &[u8; 256], addr: u32) -> u8 {
        key_table[(addr.wrapping_add(self.table_offset as u32) & 0xff) as usize]
    }

    fn permute(&self, v: u32, sel: u8, f: fn(u32, &[u8]) -> u32) -> u32 {
        (0..self.bits / 16).fold(0, |acc, h| {
            let half = (v >> (16 * h)) & 0xffff;
            let table = &SPI_BITSWAP[((sel >> (4 * h)) & 0xf) as usize];
            acc | (f(half, table) << (16 * h))
        })
    }

    fn decrypt(&self, v: u32, addr: u32, key_table: &[u8; 256]) -> u32 {
        let wm = width_mask(self.bits);
        let t = self.permute(v, self.swaps(key_table, addr), bitswap);
        let key = self.add.wrapping_add(addr) & wm;
        (partial_carry_sum(t, key, self.mask, self.bits) ^ self.xor) & wm
    }

    fn encrypt(&self, v: u32, addr: u32, key_table: &[u8; 256]) -> u32 {
        let wm = width_mask(self.bits);
        let key = self.add.wrapping_add(addr) & wm;
        let t = partial_borrow_diff((v ^ self.xor) & wm, key, self.mask, self.bits);
        self.permute(t, self.swaps(key_table, addr), reverse_bitswap)
    }
}

const SPRITE_ADDR_SHIFT: u32 = 5; // 32 words share one address key

fn map_sprites(buf: &[u8], chip: SpiChip, decrypt: bool) -> TransformResult<Vec<u8>> {
    if buf.len() % 6 != 0 {
        return Err(TransformError::SizeMismatch {
            what: "spi sprite region",
            expected: (buf.len() / 6 + 1) * 6,
            actual: buf.len(),
        });
    }
    let var = chip.variant();
    let third = buf.len() / 3;
    let (r0, rest) = buf.split_at(third);
    let (r1, r2) = rest.split_at(third);

    let mut out = vec![0u8; buf.len()];
    let (o0, rest) = out.split_at_mut(third);
    let (o1, o2) = rest.split_at_mut(third);

    for i in 0..third / 2 {
        let at = 2 * i;
        let addr = (i as u32) >> SPRITE_ADDR_SHIFT;
        let w54 = u16::from_le_bytes([r0[at], r0[at + 1]]) as u32;
        let w3210 = u32::from_le_bytes([r2[at], r2[at + 1], r1[at], r1[at + 1]]);

        let (w54, w3210) = if decrypt {
            (
                var.plane54.decrypt(w54, addr, var.key_table),
                var.plane3210.decrypt(w3210, addr, var.key_table),
            )
        } else {
            (
                var.plane54.encrypt(w54, addr, var.key_table),
                var.plane3210.encrypt(w3210, addr, var.key_table),
            )
        };

        o0[at..at + 2].copy_from_slice(&(w54 as u16).to_le_bytes());
        let b = w3210.to_le_bytes();
        o2[at..at + 2].copy_from_slice(&b[0..2]);
        o1[at..at + 2].copy_from_slice(&b[2..4]);
    }
    Ok(out)
}

pub fn sprite_decrypt(buf: &[u8], chip: SpiChip) -> TransformResult<Vec<u8>> {
    map_sprites(buf, chip, true)
}

pub fn sprite_encrypt(buf: &[u8], chip: SpiChip) -> TransformResult<Vec<u8>> {
    map_sprites(buf, chip, false)
}
