//! Planar graphics encoding.
//!
//! Vendor dumps carry graphics as one byte per pixel. The boards expect the
//! pixel bits scattered into tile planes; a [`GfxLayout`] describes where every
//! plane bit of every pixel lands, using the same vocabulary as the reference
//! emulator's tile layouts (plane/x/y bit offsets plus a per-tile increment).

use serde::Serialize;

use crate::error::{TransformError, TransformResult};

/// A layout field that is either a literal or a fraction of the destination
/// size in bits (`dest_bits * num / den + add`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutValue {
    Literal(usize),
    Ratio { num: usize, den: usize, add: usize },
}

impl LayoutValue {
    pub const fn frac(num: usize, den: usize) -> Self {
        LayoutValue::Ratio { num, den, add: 0 }
    }

    pub const fn frac_plus(num: usize, den: usize, add: usize) -> Self {
        LayoutValue::Ratio { num, den, add }
    }

    /// Resolve against the destination size in bits.
    pub fn resolve(self, dest_bits: usize) -> TransformResult<usize> {
        match self {
            LayoutValue::Literal(v) => Ok(v),
            LayoutValue::Ratio { num, den, add } => {
                if den == 0 {
                    return Err(TransformError::InvalidArgument(
                        "layout ratio with zero denominator".to_string(),
                    ));
                }
                Ok(dest_bits * num / den + add)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GfxLayout {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    /// Tile count; a ratio is taken as the share of destination bits covered
    /// and divided by `char_increment`.
    pub total: LayoutValue,
    pub planes: usize,
    /// Bit offset of each plane, most significant plane first.
    pub plane_offsets: &'static [LayoutValue],
    pub x_offsets: &'static [usize],
    pub y_offsets: &'static [usize],
    /// Bits between the start of consecutive tiles.
    pub char_increment: usize,
}

impl GfxLayout {
    fn validate(&self) -> TransformResult<()> {
        if self.planes == 0 || self.planes > 8 {
            return Err(TransformError::InvalidArgument(format!(
                "{}: plane count {} outside 1..=8",
                self.name, self.planes
            )));
        }
        if self.plane_offsets.len() != self.planes
            || self.x_offsets.len() != self.width
            || self.y_offsets.len() != self.height
        {
            return Err(TransformError::InvalidArgument(format!(
                "{}: offset tables do not match {}x{}x{}",
                self.name, self.width, self.height, self.planes
            )));
        }
        if self.char_increment == 0 {
            return Err(TransformError::InvalidArgument(format!(
                "{}: zero tile increment",
                self.name
            )));
        }
        Ok(())
    }

    /// Destination size in bytes for a linear source of `src_len` pixels.
    pub fn dest_len(&self, src_len: usize) -> TransformResult<usize> {
        let bits = src_len * self.planes;
        if bits % 8 != 0 {
            return Err(TransformError::SizeMismatch {
                what: "graphics source",
                expected: (bits / 8 + 1) * 8 / self.planes,
                actual: src_len,
            });
        }
        Ok(bits / 8)
    }

    fn tile_count(&self, dest_bits: usize) -> TransformResult<usize> {
        match self.total {
            LayoutValue::Literal(n) => Ok(n),
            ratio => Ok(ratio.resolve(dest_bits)? / self.char_increment),
        }
    }

    /// Visit every (source pixel, plane, destination bit) triple in tile, row,
    /// column, plane order.
    fn for_each_bit<F>(&self, src_len: usize, mut visit: F) -> TransformResult<usize>
    where
        F: FnMut(usize, usize, usize),
    {
        self.validate()?;
        let dest_bytes = self.dest_len(src_len)?;
        let dest_bits = dest_bytes * 8;
        let total = self.tile_count(dest_bits)?;
        let pixels = total * self.width * self.height;
        if pixels != src_len {
            return Err(TransformError::SizeMismatch {
                what: self.name,
                expected: pixels,
                actual: src_len,
            });
        }

        let planes: Vec<usize> = self
            .plane_offsets
            .iter()
            .map(|p| p.resolve(dest_bits))
            .collect::<TransformResult<_>>()?;

        let mut src = 0usize;
        for tile in 0..total {
            let base = tile * self.char_increment;
            for &y in self.y_offsets {
                for &x in self.x_offsets {
                    for (plane, &plane_offset) in planes.iter().enumerate() {
                        let offset = base + y + x + plane_offset;
                        if offset >= dest_bits {
                            return Err(TransformError::SizeMismatch {
                                what: self.name,
                                expected: offset / 8 + 1,
                                actual: dest_bytes,
                            });
                        }
                        visit(src, plane, offset);
                    }
                    src += 1;
                }
            }
        }
        Ok(dest_bytes)
    }
}

/// Scatter a linear pixel buffer into the planar layout. The result is
/// `buf.len() * planes / 8` bytes; bits not covered by the layout stay zero.
/// The layout's tiles must account for every source pixel.
pub fn encode_gfx(buf: &[u8], layout: &GfxLayout) -> TransformResult<Vec<u8>> {
    layout.validate()?;
    let mut dest = vec![0u8; layout.dest_len(buf.len())?];
    let top = layout.planes - 1;
    layout.for_each_bit(buf.len(), |src, plane, offset| {
        if (buf[src] >> (top - plane)) & 1 != 0 {
            dest[offset >> 3] |= 0x80 >> (offset & 7);
        }
    })?;
    Ok(dest)
}

/// Gather the planar layout back into one byte per pixel.
pub fn decode_gfx(buf: &[u8], layout: &GfxLayout) -> TransformResult<Vec<u8>> {
    layout.validate()?;
    let src_len = buf.len() * 8 / layout.planes;
    if layout.dest_len(src_len)? != buf.len() {
        return Err(TransformError::SizeMismatch {
            what: "planar graphics",
            expected: src_len * layout.planes / 8,
            actual: buf.len(),
        });
    }
    let mut pixels = vec![0u8; src_len];
    let top = layout.planes - 1;
    layout.for_each_bit(src_len, |src, plane, offset| {
        if buf[offset >> 3] & (0x80 >> (offset & 7)) != 0 {
            pixels[src] |= 1 << (top - plane);
        }
    })?;
    Ok(pixels)
}

use LayoutValue::Literal as L;

/// Neo Geo 16x16 sprite, C-ROM pair byte-interleaved: right half first, each
/// row four bytes (planes 0, 2, 1, 3), leftmost pixel in the low bit.
pub static NEOGEO_SPRITE: GfxLayout = GfxLayout {
    name: "neogeo_sprite",
    width: 16,
    height: 16,
    total: LayoutValue::frac(1, 1),
    planes: 4,
    plane_offsets: &[L(24), L(8), L(16), L(0)],
    x_offsets: &[
        519, 518, 517, 516, 515, 514, 513, 512, 7, 6, 5, 4, 3, 2, 1, 0,
    ],
    y_offsets: &[
        0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 480,
    ],
    char_increment: 1024,
};

/// Neo Geo 8x8 fix layer: column pairs stored as 8-byte runs (columns 4-5,
/// 6-7, 0-1, 2-3), low nibble is the left pixel.
pub static NEOGEO_FIX: GfxLayout = GfxLayout {
    name: "neogeo_fix",
    width: 8,
    height: 8,
    total: LayoutValue::frac(1, 1),
    planes: 4,
    plane_offsets: &[L(0), L(1), L(2), L(3)],
    x_offsets: &[132, 128, 196, 192, 4, 0, 68, 64],
    y_offsets: &[0, 8, 16, 24, 32, 40, 48, 56],
    char_increment: 256,
};

pub static CPS1_16X16: GfxLayout = GfxLayout {
    name: "cps1_16x16",
    width: 16,
    height: 16,
    total: LayoutValue::frac(1, 1),
    planes: 4,
    plane_offsets: &[L(24), L(16), L(8), L(0)],
    x_offsets: &[
        0, 1, 2, 3, 4, 5, 6, 7, 32, 33, 34, 35, 36, 37, 38, 39,
    ],
    y_offsets: &[
        0, 64, 128, 192, 256, 320, 384, 448, 512, 576, 640, 704, 768, 832, 896, 960,
    ],
    char_increment: 1024,
};

/// Seibu SPI 8x8 text tiles, 6 bits per pixel packed four pixels to a 24-bit
/// triple.
pub static SPI_TEXT: GfxLayout = GfxLayout {
    name: "spi_text",
    width: 8,
    height: 8,
    total: LayoutValue::frac(1, 1),
    planes: 6,
    plane_offsets: &[L(0), L(1), L(2), L(3), L(4), L(5)],
    x_offsets: &[0, 6, 12, 18, 24, 30, 36, 42],
    y_offsets: &[0, 48, 96, 144, 192, 240, 288, 336],
    char_increment: 384,
};

pub static SPI_BG: GfxLayout = GfxLayout {
    name: "spi_bg",
    width: 16,
    height: 16,
    total: LayoutValue::frac(1, 1),
    planes: 6,
    plane_offsets: &[L(0), L(1), L(2), L(3), L(4), L(5)],
    x_offsets: &[
        0, 6, 12, 18, 24, 30, 36, 42, 48, 54, 60, 66, 72, 78, 84, 90,
    ],
    y_offsets: &[
        0, 96, 192, 288, 384, 480, 576, 672, 768, 864, 960, 1056, 1152, 1248, 1344, 1440,
    ],
    char_increment: 1536,
};

/// Seibu SPI 16x16 sprites split over three equal regions: planes 5-4, 3-2
/// and 1-0, two bits per pixel in each.
pub static SPI_SPRITE: GfxLayout = GfxLayout {
    name: "spi_sprite",
    width: 16,
    height: 16,
    total: LayoutValue::frac(1, 3),
    planes: 6,
    plane_offsets: &[
        LayoutValue::frac(0, 3),
        LayoutValue::frac_plus(0, 3, 1),
        LayoutValue::frac(1, 3),
        LayoutValue::frac_plus(1, 3, 1),
        LayoutValue::frac(2, 3),
        LayoutValue::frac_plus(2, 3, 1),
    ],
    x_offsets: &[
        0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30,
    ],
    y_offsets: &[
        0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 480,
    ],
    char_increment: 512,
};

pub static LAYOUTS: [&GfxLayout; 6] = [
    &NEOGEO_SPRITE,
    &NEOGEO_FIX,
    &CPS1_16X16,
    &SPI_TEXT,
    &SPI_BG,
    &SPI_SPRITE,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_pixels(layout: &GfxLayout, tiles: usize) -> Vec<u8> {
        let mask = ((1u16 << layout.planes) - 1) as u8;
        (0..tiles * layout.width * layout.height)
            .map(|i| ((i * 37 + i / 5) as u8) & mask)
            .collect()
    }

    #[test]
    fn ratio_values_resolve_against_destination() {
        assert_eq!(LayoutValue::Literal(8).resolve(1000).unwrap(), 8);
        assert_eq!(LayoutValue::frac(1, 2).resolve(1000).unwrap(), 500);
        assert_eq!(LayoutValue::frac_plus(1, 2, 8).resolve(1000).unwrap(), 508);
        assert!(LayoutValue::frac(1, 0).resolve(1000).is_err());
    }

    #[test]
    fn output_length_is_planes_over_eight() {
        for layout in LAYOUTS {
            let src = tile_pixels(layout, 6);
            let out = encode_gfx(&src, layout).unwrap();
            assert_eq!(out.len(), src.len() * layout.planes / 8, "{}", layout.name);
        }
    }

    #[test]
    fn every_destination_bit_written_exactly_once() {
        for layout in LAYOUTS {
            let src_len = 6 * layout.width * layout.height;
            let dest_bits = src_len * layout.planes;
            let mut hits = vec![0u8; dest_bits];
            layout
                .for_each_bit(src_len, |_, _, offset| hits[offset] += 1)
                .unwrap();
            assert!(hits.iter().all(|&h| h == 1), "{}", layout.name);
        }
    }

    #[test]
    fn equal_size_inputs_touch_the_same_bits() {
        for layout in LAYOUTS {
            let len = 3 * layout.width * layout.height;
            let full = vec![0xffu8; len];
            assert!(
                encode_gfx(&full, layout).unwrap().iter().all(|&b| b == 0xff),
                "{}",
                layout.name
            );
            assert!(
                encode_gfx(&vec![0u8; len], layout)
                    .unwrap()
                    .iter()
                    .all(|&b| b == 0),
                "{}",
                layout.name
            );
        }
    }

    #[test]
    fn decode_inverts_encode() {
        for layout in LAYOUTS {
            let src = tile_pixels(layout, 4);
            let planar = encode_gfx(&src, layout).unwrap();
            assert_eq!(decode_gfx(&planar, layout).unwrap(), src, "{}", layout.name);
        }
    }

    #[test]
    fn neogeo_sprite_row_bytes() {
        // one tile, top row, rightmost pixel of the left half set to colour 0b1001
        let mut src = vec![0u8; 256];
        src[7] = 0b1001;
        let out = encode_gfx(&src, &NEOGEO_SPRITE).unwrap();
        // left half starts 64 bytes in; pixel 7 of the half is bit 7
        assert_eq!(out[64], 0x80); // plane 0
        assert_eq!(out[67], 0x80); // plane 3
        assert!(out.iter().enumerate().all(|(i, &b)| b == 0 || i == 64 || i == 67));
    }

    #[test]
    fn spi_sprite_planes_land_in_thirds() {
        let mut src = vec![0u8; 256 * 3];
        src[0] = 0b100001;
        let out = encode_gfx(&src, &SPI_SPRITE).unwrap();
        let third = out.len() / 3;
        assert_eq!(out[0], 0x80);
        assert_eq!(out[2 * third], 0x40);
        assert_eq!(out.iter().filter(|&&b| b != 0).count(), 2);
    }

    #[test]
    fn short_source_is_rejected() {
        let layout = GfxLayout {
            total: LayoutValue::Literal(2),
            ..NEOGEO_FIX.clone()
        };
        assert!(encode_gfx(&[0u8; 64], &layout).is_err());
    }

    #[test]
    fn partial_trailing_tile_is_rejected() {
        // two pixels past the last whole 8x8 tile
        let err = encode_gfx(&[0x0f; 66], &NEOGEO_FIX).unwrap_err();
        assert!(matches!(err, TransformError::SizeMismatch { expected: 64, actual: 66, .. }));
        assert!(encode_gfx(&[0x0f; 64], &NEOGEO_FIX).is_ok());
    }

    #[test]
    fn zero_planes_is_an_error() {
        let layout = GfxLayout {
            planes: 0,
            plane_offsets: &[],
            ..NEOGEO_FIX.clone()
        };
        assert!(encode_gfx(&[0u8; 64], &layout).is_err());
        assert!(decode_gfx(&[0u8; 32], &layout).is_err());
    }
}
