//! Title recipes.
//!
//! Member names follow the emulator's set definitions; vendor file names follow
//! the re-release packages (`<TITLE>_CPU1.BIN` for Capcom and Seibu titles,
//! `<name>_game_<region>` for Neo Geo titles).

use crate::cipher::{Cipher, CmcChip, SpiChip};
use crate::gfx::{CPS1_16X16, NEOGEO_FIX, NEOGEO_SPRITE, SPI_BG, SPI_SPRITE, SPI_TEXT};
use crate::recipe::{Input, Output, Platform, Region, Step, Title};

use Input::File;
use Output::Files;

/// System ROMs shipped with the Neo Geo titles, identified by the CRC32 of the
/// word-swapped image.
const NEOGEO_BIOS_VARIANTS: &[(u32, &str)] = &[
    (0x9036_d879, "sp-s2.sp1"),
    (0xc7f2_fa45, "sp-s.sp1"),
    (0xe729_43de, "sp-u2.sp1"),
    (0x91b6_4be3, "asia-s3.rom"),
    (0xf0e8_f27d, "vs-bios.rom"),
    (0xaced_e59c, "sp-j2.sp1"),
    (0x9fb0_abe4, "sp1.jipan.1024"),
    (0x03cc_9f6a, "sp-45.sp1"),
    (0x2723_a5b5, "sp-e.sp1"),
    (0xd27a_71f1, "neo-epo.bin"),
    (0x16d0_c132, "neo-po.bin"),
    (0xa7aa_b458, "uni-bios_4_0.rom"),
];

/// Every Neo Geo set shares the system BIOS, which lives in `neogeo.zip`
/// rather than the title's own archive.
const NEOGEO_BIOS: Region = Region::new(
    "mainbios",
    Input::Optional("bios_m68k"),
    Output::Identified(NEOGEO_BIOS_VARIANTS),
)
.steps(&[Step::SwapBytes])
.archive("neogeo");

const NEOGEO_PROGRAM_SPLIT: &[Step] = &[Step::SplitAt(&[0x100000]), Step::SwapBytes];
const NEOGEO_SPRITE_PAIRS_2: &[Step] = &[Step::SplitEven(2), Step::Interleave(&[1, 1])];

static FFIGHT: Title = Title {
    name: "ffight",
    description: "Final Fight (World)",
    platform: Platform::Cps1,
    marker: "FFIGHT_CPU1.BIN",
    regions: &[
        Region::new(
            "maincpu",
            File("FFIGHT_CPU1.BIN"),
            Files(&["ff_36.11f", "ff_42.11h", "ff_37.12f", "ffe_43.12h"]),
        )
        .steps(&[
            Step::Slice {
                start: 0,
                len: 0x80000,
            },
            Step::SplitEven(2),
            Step::Interleave(&[1, 1]),
        ])
        .size(0x80000),
        Region::new("maincpu_mask", File("FFIGHT_CPU1.BIN"), Files(&["ff-32m.8h"]))
            .steps(&[
                Step::Slice {
                    start: 0x80000,
                    len: 0x80000,
                },
                Step::SwapBytes,
            ])
            .size(0x80000),
        Region::new(
            "gfx",
            File("FFIGHT_GFX1.BIN"),
            Files(&["ff-5m.7a", "ff-7m.9a", "ff-1m.3a", "ff-3m.5a"]),
        )
        .layout(&CPS1_16X16)
        .steps(&[Step::Deal(&[2, 2, 2, 2])])
        .size(0x200000),
        Region::new("audiocpu", File("FFIGHT_SND1.BIN"), Files(&["ff_09.12b"])).size(0x10000),
        Region::new(
            "oki",
            File("FFIGHT_PCM1.BIN"),
            Files(&["ff_18.11c", "ff_19.12c"]),
        )
        .size(0x40000),
    ],
};

static MSLUG: Title = Title {
    name: "mslug",
    description: "Metal Slug - Super Vehicle-001",
    platform: Platform::NeoGeo,
    marker: "mslug_game_m68k",
    regions: &[
        Region::new("cslot1:maincpu", File("mslug_game_m68k"), Files(&["201-p1.p1"]))
            .steps(&[Step::SwapBytes])
            .size(0x200000),
        Region::new("cslot1:fixed", File("mslug_game_fix"), Files(&["201-s1.s1"]))
            .layout(&NEOGEO_FIX)
            .size(0x20000),
        Region::new("cslot1:audiocpu", File("mslug_game_z80"), Files(&["201-m1.m1"]))
            .size(0x20000),
        Region::new(
            "cslot1:ymsnd:adpcma",
            File("mslug_game_adpcma"),
            Files(&["201-v1.v1", "201-v2.v2"]),
        )
        .size(0x800000),
        Region::new(
            "cslot1:sprites",
            File("mslug_game_sprite"),
            Files(&["201-c1.c1", "201-c2.c2", "201-c3.c3", "201-c4.c4"]),
        )
        .layout(&NEOGEO_SPRITE)
        .steps(NEOGEO_SPRITE_PAIRS_2)
        .size(0x1000000),
        NEOGEO_BIOS,
    ],
};

static MSLUG3H: Title = Title {
    name: "mslug3h",
    description: "Metal Slug 3 (NGH-2560)",
    platform: Platform::NeoGeo,
    marker: "mslug3_game_m68k",
    regions: &[
        Region::new(
            "cslot1:maincpu",
            File("mslug3_game_m68k"),
            Files(&["256-ph1.p1", "256-ph2.sp2"]),
        )
        .steps(NEOGEO_PROGRAM_SPLIT)
        .size(0x500000),
        Region::new("cslot1:audiocpu", File("mslug3_game_z80"), Files(&["256-m1.m1"]))
            .size(0x80000),
        Region::new(
            "cslot1:ymsnd:adpcma",
            File("mslug3_game_adpcma"),
            Files(&["256-v1.v1", "256-v2.v2", "256-v3.v3", "256-v4.v4"]),
        )
        .size(0x1000000),
        Region::new(
            "cslot1:sprites",
            File("mslug3_game_sprite"),
            Files(&[
                "256-c1.c1", "256-c2.c2", "256-c3.c3", "256-c4.c4", "256-c5.c5", "256-c6.c6",
                "256-c7.c7", "256-c8.c8",
            ]),
        )
        .layout(&NEOGEO_SPRITE)
        .steps(&[
            Step::Cipher(Cipher::CmcGfx {
                chip: CmcChip::Cmc42,
                extra_xor: 0xad,
            }),
            Step::SplitEven(4),
            Step::Interleave(&[1, 1]),
        ])
        .size(0x4000000),
        NEOGEO_BIOS,
    ],
};

static KOF2001: Title = Title {
    name: "kof2001",
    description: "The King of Fighters 2001 (NGM-262?)",
    platform: Platform::NeoGeo,
    marker: "kof2001_game_m68k",
    regions: &[
        Region::new(
            "cslot1:maincpu",
            File("kof2001_game_m68k"),
            Files(&["262-p1-08-e0.p1", "262-p2-08-e0.sp2"]),
        )
        .steps(NEOGEO_PROGRAM_SPLIT)
        .size(0x500000),
        Region::new("cslot1:audiocpu", File("kof2001_game_z80"), Files(&["265-262-m1.m1"]))
            .steps(&[Step::Cipher(Cipher::CmcM1)])
            .size(0x20000),
        Region::new(
            "cslot1:ymsnd:adpcma",
            File("kof2001_game_adpcma"),
            Files(&[
                "262-v1-08-e0.v1",
                "262-v2-08-e0.v2",
                "262-v3-08-e0.v3",
                "262-v4-08-e0.v4",
            ]),
        )
        .size(0x1000000),
        Region::new(
            "cslot1:sprites",
            File("kof2001_game_sprite"),
            Files(&[
                "262-c1-08-e0.c1",
                "262-c2-08-e0.c2",
                "262-c3-08-e0.c3",
                "262-c4-08-e0.c4",
                "262-c5-08-e0.c5",
                "262-c6-08-e0.c6",
                "262-c7-08-e0.c7",
                "262-c8-08-e0.c8",
            ]),
        )
        .layout(&NEOGEO_SPRITE)
        .steps(&[
            Step::Cipher(Cipher::CmcGfx {
                chip: CmcChip::Cmc50,
                extra_xor: 0x1e,
            }),
            Step::SplitEven(4),
            Step::Interleave(&[1, 1]),
        ])
        .size(0x4000000),
        NEOGEO_BIOS,
    ],
};

static RDFT: Title = Title {
    name: "rdft",
    description: "Raiden Fighters (Germany)",
    platform: Platform::SeibuSpi,
    marker: "RDFT_CPU1.BIN",
    regions: &[
        Region::new(
            "maincpu",
            File("RDFT_CPU1.BIN"),
            Files(&["gd_1.211", "gd_2.212", "gd_3.210", "gd_4.29"]),
        )
        .steps(&[Step::Interleave(&[1, 1, 1, 1])])
        .size(0x200000),
        Region::new(
            "chars",
            File("RDFT_FIX1.BIN"),
            Files(&["gd_5.423", "gd_6.424", "gd_7.48"]),
        )
        .layout(&SPI_TEXT)
        .steps(&[
            Step::Cipher(Cipher::SpiText(SpiChip::Sei252)),
            Step::Interleave(&[1, 1, 1]),
        ])
        .size(0x30000),
        Region::new(
            "tiles",
            File("RDFT_BG1.BIN"),
            Files(&["gd_bg1-d.415", "gd_bg1-p.410", "gd_bg2-d.416", "gd_bg2-p.49"]),
        )
        .layout(&SPI_BG)
        .steps(&[
            Step::Cipher(Cipher::SpiBg(SpiChip::Sei252)),
            Step::SplitEven(2),
            Step::Deal(&[2, 1]),
        ])
        .size(0x600000),
        Region::new(
            "sprites",
            File("RDFT_OBJ1.BIN"),
            Files(&["gd_obj-1.322", "gd_obj-2.324", "gd_obj-3.323"]),
        )
        .layout(&SPI_SPRITE)
        .steps(&[Step::Cipher(Cipher::SpiSprite(SpiChip::Sei252))])
        .size(0xc00000),
        Region::new(
            "ymf",
            File("RDFT_PCM1.BIN"),
            Files(&["gd_pcm.217", "gd_8.216"]),
        )
        .steps(&[Step::SplitAt(&[0x100000])])
        .size(0x180000),
    ],
};

static RDFT2: Title = Title {
    name: "rdft2",
    description: "Raiden Fighters 2 - Operation Hell Dive (Germany)",
    platform: Platform::SeibuSpi,
    marker: "RDFT2_CPU1.BIN",
    regions: &[
        Region::new(
            "maincpu",
            File("RDFT2_CPU1.BIN"),
            Files(&["prg0.tmp", "prg1.tmp", "prg2.tmp", "prg3.tmp"]),
        )
        .steps(&[Step::Interleave(&[1, 1, 1, 1])])
        .size(0x200000),
        Region::new(
            "chars",
            File("RDFT2_FIX1.BIN"),
            Files(&["fix0.u0423", "fix1.u0424", "fixp.u048"]),
        )
        .layout(&SPI_TEXT)
        .steps(&[
            Step::Cipher(Cipher::SpiText(SpiChip::Rise10)),
            Step::Interleave(&[1, 1, 1]),
        ])
        .size(0x30000),
        Region::new(
            "tiles",
            File("RDFT2_BG1.BIN"),
            Files(&["bg-1d.u0535", "bg-1p.u0537", "bg-2d.u0536", "bg-2p.u0538"]),
        )
        .layout(&SPI_BG)
        .steps(&[
            Step::Cipher(Cipher::SpiBg(SpiChip::Rise10)),
            Step::SplitAt(&[0x600000]),
            Step::Deal(&[2, 1]),
        ])
        .size(0x900000),
        Region::new(
            "sprites",
            File("RDFT2_OBJ1.BIN"),
            Files(&[
                "obj1.u0429",
                "obj1b.u0430",
                "obj2.u0431",
                "obj2b.u0432",
                "obj3.u0434",
                "obj3b.u0433",
            ]),
        )
        .layout(&SPI_SPRITE)
        .steps(&[
            Step::Cipher(Cipher::SpiSprite(SpiChip::Rise10)),
            Step::SplitEven(3),
            Step::SplitAt(&[0x400000]),
        ])
        .size(0x1200000),
        Region::new(
            "ymf",
            File("RDFT2_PCM1.BIN"),
            Files(&["pcm.u0217", "sound1.u0222"]),
        )
        .steps(&[Step::SplitAt(&[0x100000])])
        .size(0x180000),
    ],
};

static RFJET: Title = Title {
    name: "rfjet",
    description: "Raiden Fighters Jet (Germany)",
    platform: Platform::SeibuSpi,
    marker: "RFJET_CPU1.BIN",
    regions: &[
        Region::new(
            "maincpu",
            File("RFJET_CPU1.BIN"),
            Files(&["prg0.u0211", "prg1.u0212", "prg2.u0221", "prg3.u0220"]),
        )
        .steps(&[Step::Interleave(&[1, 1, 1, 1])])
        .size(0x200000),
        Region::new(
            "chars",
            File("RFJET_FIX1.BIN"),
            Files(&["fix0.u0524", "fix1.u0518", "fixp.u0514"]),
        )
        .layout(&SPI_TEXT)
        .steps(&[
            Step::Cipher(Cipher::SpiText(SpiChip::Rise11)),
            Step::Interleave(&[1, 1, 1]),
        ])
        .size(0x30000),
        Region::new(
            "tiles",
            File("RFJET_BG1.BIN"),
            Files(&["bg-1d.u0543", "bg-1p.u0544", "bg-2d.u0545", "bg-2p.u0546"]),
        )
        .layout(&SPI_BG)
        .steps(&[
            Step::Cipher(Cipher::SpiBg(SpiChip::Rise11)),
            Step::SplitAt(&[0x600000]),
            Step::Deal(&[2, 1]),
        ])
        .size(0x900000),
        Region::new(
            "sprites",
            File("RFJET_OBJ1.BIN"),
            Files(&["obj-1.u0442", "obj-2.u0443", "obj-3.u0444"]),
        )
        .layout(&SPI_SPRITE)
        .steps(&[Step::Cipher(Cipher::SpiSprite(SpiChip::Rise11))])
        .size(0x1800000),
        Region::new(
            "ymf",
            File("RFJET_PCM1.BIN"),
            Files(&["pcm-d.u0227", "sound1.u0222"]),
        )
        .steps(&[Step::SplitAt(&[0x100000])])
        .size(0x180000),
    ],
};

pub static TITLES: [&Title; 7] = [&FFIGHT, &MSLUG, &MSLUG3H, &KOF2001, &RDFT, &RDFT2, &RFJET];

pub fn find(name: &str) -> Option<&'static Title> {
    TITLES.iter().copied().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_markers_are_unique() {
        let names: HashSet<_> = TITLES.iter().map(|t| t.name).collect();
        let markers: HashSet<_> = TITLES.iter().map(|t| t.marker).collect();
        assert_eq!(names.len(), TITLES.len());
        assert_eq!(markers.len(), TITLES.len());
        assert!(find("rdft2").is_some());
        assert!(find("neogeo").is_none());
    }

    #[test]
    fn member_names_are_unique_per_archive() {
        for title in TITLES {
            let mut seen = HashSet::new();
            for region in title.regions {
                let names: Vec<&str> = match region.output {
                    Output::Files(names) => names.to_vec(),
                    Output::Identified(table) => table.iter().map(|(_, n)| *n).collect(),
                };
                let archive = region.archive.unwrap_or(title.name);
                for name in names {
                    assert!(seen.insert((archive, name)), "{}: duplicate {name}", title.name);
                }
            }
        }
    }

    #[test]
    fn neogeo_titles_share_bios_archive() {
        for title in TITLES.iter().filter(|t| t.platform == Platform::NeoGeo) {
            let bios = title
                .regions
                .iter()
                .find(|r| matches!(r.output, Output::Identified(_)))
                .unwrap();
            assert_eq!(bios.archive, Some("neogeo"));
        }
    }

    #[test]
    fn marker_is_a_required_input() {
        for title in TITLES {
            assert!(
                title
                    .regions
                    .iter()
                    .any(|r| matches!(r.input, Input::File(f) if f == title.marker)),
                "{}",
                title.name
            );
        }
    }
}
