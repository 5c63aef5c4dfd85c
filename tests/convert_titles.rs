use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tempfile::tempdir;

use romrebuild::actions::{convert_titles, perform_actions};
use romrebuild::config::Config;
use romrebuild::error::RecipeError;
use romrebuild::recipe::{Input, Output, Platform, Region, Step, Title};
use romrebuild::types::{Action, TitleStatus};

// crc32("123456789")
const KNOWN_SYSTEM_CRC: u32 = 0xcbf4_3926;

static ALPHA: Title = Title {
    name: "alpha",
    description: "first test set",
    platform: Platform::NeoGeo,
    marker: "alpha_game_m68k",
    regions: &[
        Region::new("maincpu", Input::File("alpha_game_m68k"), Output::Files(&["a-p1.p1"]))
            .steps(&[Step::SwapBytes])
            .size(8),
        Region::new(
            "mainbios",
            Input::Optional("bios_m68k"),
            Output::Identified(&[(KNOWN_SYSTEM_CRC, "sys.rom")]),
        )
        .archive("neogeo"),
    ],
};

static BETA: Title = Title {
    name: "beta",
    description: "second test set",
    platform: Platform::NeoGeo,
    marker: "beta_game_m68k",
    regions: &[
        Region::new(
            "maincpu",
            Input::File("beta_game_m68k"),
            Output::Files(&["b-p1.p1", "b-p2.p2"]),
        )
        .size(8),
        Region::new("audiocpu", Input::File("beta_game_z80"), Output::Files(&["b-m1.m1"])),
        Region::new(
            "mainbios",
            Input::Optional("bios_m68k"),
            Output::Identified(&[(KNOWN_SYSTEM_CRC, "sys.rom")]),
        )
        .archive("neogeo"),
    ],
};

fn write(dir: &Path, name: &str, data: &[u8]) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), data).unwrap();
}

fn quiet_convert(input: &Path, output: &Path) -> Config {
    Config {
        command: Action::Convert,
        input: Some(input.to_path_buf()),
        output: Some(output.to_path_buf()),
        quiet: 1,
        jobs: 2,
        ..Config::default()
    }
}

fn zip_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn zip_member(path: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut data = Vec::new();
    archive.by_name(name).unwrap().read_to_end(&mut data).unwrap();
    data
}

#[test]
fn shared_system_archive_collects_identified_members() {
    let root = tempdir().unwrap();
    let input = root.path().join("dumps");
    let output = root.path().join("roms");
    write(&input.join("alpha"), "alpha_game_m68k", &[1, 2, 3, 4, 5, 6, 7, 8]);
    write(&input.join("alpha"), "bios_m68k", b"123456789");
    write(&input.join("beta"), "beta_game_m68k", &[9; 8]);
    write(&input.join("beta"), "beta_game_z80", &[0x3e; 4]);
    write(&input.join("beta"), "bios_m68k", b"12345678");
    write(&input.join("gamma"), "gamma_game_m68k", &[0; 4]);

    let plan = convert_titles(&quiet_convert(&input, &output), &[&ALPHA, &BETA]).unwrap();

    assert_eq!(plan.summary.titles_converted, 2);
    assert_eq!(plan.summary.titles_failed, 0);
    assert_eq!(plan.summary.unknown_titles, ["gamma"]);

    let alpha = output.join("alpha.zip");
    assert_eq!(zip_names(&alpha), ["a-p1.p1"]);
    assert_eq!(zip_member(&alpha, "a-p1.p1"), vec![2, 1, 4, 3, 6, 5, 8, 7]);

    let beta = output.join("beta.zip");
    assert_eq!(zip_names(&beta), ["b-m1.m1", "b-p1.p1", "b-p2.p2"]);
    assert_eq!(zip_member(&beta, "b-p2.p2"), vec![9; 4]);

    // beta's system image is unknown: skipped, not fatal
    let beta_report = plan.titles.iter().find(|t| t.title == "beta").unwrap();
    assert_eq!(beta_report.skipped_regions.len(), 1);
    assert!(beta_report.skipped_regions[0].reason.contains("unrecognized"));

    assert_eq!(plan.shared_archives.len(), 1);
    let neogeo = output.join("neogeo.zip");
    assert_eq!(plan.shared_archives[0].path, neogeo);
    assert_eq!(zip_names(&neogeo), ["sys.rom"]);
    assert_eq!(zip_member(&neogeo, "sys.rom"), b"123456789".to_vec());

    let leftovers: Vec<_> = fs::read_dir(&output)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| !n.ends_with(".zip"))
        .collect();
    assert!(leftovers.is_empty(), "staging left behind: {leftovers:?}");
}

#[test]
fn missing_input_fails_only_that_title() {
    let root = tempdir().unwrap();
    let input = root.path().join("dumps");
    let output = root.path().join("roms");
    write(&input.join("alpha"), "alpha_game_m68k", &[0; 8]);
    write(&input.join("alpha"), "bios_m68k", b"123456789");
    write(&input.join("beta"), "beta_game_m68k", &[0; 8]);

    let plan = convert_titles(&quiet_convert(&input, &output), &[&ALPHA, &BETA]).unwrap();
    assert_eq!(plan.summary.titles_converted, 1);
    assert_eq!(plan.summary.titles_failed, 1);

    let beta = plan.titles.iter().find(|t| t.title == "beta").unwrap();
    assert_eq!(beta.status, TitleStatus::Failed);
    assert!(beta.error.as_deref().unwrap().contains("beta_game_z80"));
    assert!(!output.join("beta.zip").exists());
    assert!(output.join("alpha.zip").exists());
    assert!(output.join("neogeo.zip").exists());
}

#[test]
fn title_filter_and_existing_archives() {
    let root = tempdir().unwrap();
    let input = root.path().join("dumps");
    let output = root.path().join("roms");
    write(&input, "alpha_game_m68k", &[0; 8]);
    write(&input, "beta_game_m68k", &[0; 8]);
    write(&input, "beta_game_z80", &[0; 2]);

    let config = Config {
        titles: vec!["al*".to_string()],
        ..quiet_convert(&input, &output)
    };
    let plan = convert_titles(&config, &[&ALPHA, &BETA]).unwrap();
    assert_eq!(plan.titles.len(), 1);
    assert_eq!(plan.titles[0].title, "alpha");
    assert!(!output.join("beta.zip").exists());
    assert!(plan.shared_archives.is_empty());

    let again = convert_titles(&config, &[&ALPHA, &BETA]).unwrap();
    assert!(again.titles[0].archives[0].kept_existing);
}

#[test]
fn unrecognised_directory_is_a_layout_error() {
    let root = tempdir().unwrap();
    let input = root.path().join("dumps");
    write(&input, "readme.txt", b"nothing here");

    let err = convert_titles(&quiet_convert(&input, &root.path().join("roms")), &[&ALPHA])
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RecipeError>(),
        Some(RecipeError::UnsupportedLayout { .. })
    ));
}

#[test]
fn ffight_catalog_recipe_end_to_end() {
    let root = tempdir().unwrap();
    let input = root.path().join("FFIGHT");
    let output = root.path().join("roms");
    let cpu: Vec<u8> = (0..0x100000usize).map(|i| (i ^ (i >> 8)) as u8).collect();
    write(&input, "FFIGHT_CPU1.BIN", &cpu);
    // top plane bit of the first pixel
    let mut gfx = vec![0u8; 0x400000];
    gfx[0] = 0x08;
    write(&input, "FFIGHT_GFX1.BIN", &gfx);
    write(&input, "FFIGHT_SND1.BIN", &vec![0x11u8; 0x10000]);
    write(&input, "FFIGHT_PCM1.BIN", &[vec![0x22u8; 0x20000], vec![0x33u8; 0x20000]].concat());

    let config = Config {
        titles: vec!["ffight".to_string()],
        jobs: 1,
        ..quiet_convert(&input, &output)
    };
    let plan = perform_actions(&config).unwrap();
    assert_eq!(plan.summary.titles_converted, 1, "{:?}", plan.titles[0].error);

    let archive = output.join("ffight.zip");
    assert_eq!(
        zip_names(&archive),
        [
            "ff-1m.3a", "ff-32m.8h", "ff-3m.5a", "ff-5m.7a", "ff-7m.9a", "ff_09.12b", "ff_18.11c",
            "ff_19.12c", "ff_36.11f", "ff_37.12f", "ff_42.11h", "ffe_43.12h",
        ]
    );

    let even: Vec<u8> = cpu[..0x40000].iter().step_by(2).copied().collect();
    let odd: Vec<u8> = cpu[1..0x40000].iter().step_by(2).copied().collect();
    let upper_odd: Vec<u8> = cpu[0x40001..0x80000].iter().step_by(2).copied().collect();
    assert_eq!(zip_member(&archive, "ff_36.11f"), even);
    assert_eq!(zip_member(&archive, "ff_42.11h"), odd);
    assert_eq!(zip_member(&archive, "ffe_43.12h"), upper_odd);

    let mask = zip_member(&archive, "ff-32m.8h");
    assert_eq!(mask.len(), 0x80000);
    assert_eq!(mask[..4], [cpu[0x80001], cpu[0x80000], cpu[0x80003], cpu[0x80002]]);

    // 16-bit plane words are stored as they sit in the tile
    assert_eq!(zip_member(&archive, "ff-5m.7a"), vec![0u8; 0x80000]);
    let plane_word = zip_member(&archive, "ff-7m.9a");
    assert_eq!(plane_word[..2], [0x00, 0x80]);
    assert!(plane_word[2..].iter().all(|&b| b == 0));
    assert_eq!(zip_member(&archive, "ff_19.12c"), vec![0x33u8; 0x20000]);
}
