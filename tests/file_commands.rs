use std::fs;
use std::path::Path;

use tempfile::tempdir;

use romrebuild::actions::perform_actions;
use romrebuild::checksum::compute_checksums;
use romrebuild::config::Config;
use romrebuild::types::Action;

fn file_config(command: Action, input: &Path, output: &Path) -> Config {
    Config {
        command,
        input: Some(input.to_path_buf()),
        output: Some(output.to_path_buf()),
        quiet: 1,
        ..Config::default()
    }
}

#[test]
fn deinterleave_mixed_widths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.bin");
    fs::write(&input, [0x10, 0x11, 0x12, 0x20, 0x21, 0x22]).unwrap();
    let out = dir.path().join("out");

    let config = Config {
        pattern: vec![2, 1],
        ..file_config(Action::Deinterleave, &input, &out)
    };
    let plan = perform_actions(&config).unwrap();
    assert_eq!(plan.files.len(), 2);
    assert_eq!(fs::read(out.join("prog.0")).unwrap(), vec![0x11, 0x10, 0x21, 0x20]);
    assert_eq!(fs::read(out.join("prog.1")).unwrap(), vec![0x12, 0x22]);

    // reported checksums describe what landed on disk
    assert_eq!(
        plan.files[1].checksums,
        compute_checksums(&out.join("prog.1")).unwrap()
    );
}

#[test]
fn deinterleave_rejects_ragged_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("odd.bin");
    fs::write(&input, [1, 2, 3]).unwrap();
    let err = perform_actions(&file_config(Action::Deinterleave, &input, dir.path())).unwrap_err();
    assert!(format!("{err:#}").contains("interleave input"));
}

#[test]
fn slice_refuses_to_clobber_without_overwrite() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("snd.bin");
    fs::write(&input, vec![7u8; 32]).unwrap();
    let out = dir.path().join("out");
    let config = Config {
        split_offsets: vec![16],
        ..file_config(Action::Slice, &input, &out)
    };
    perform_actions(&config).unwrap();
    let err = perform_actions(&config).unwrap_err();
    assert!(err.to_string().contains("already exists"));

    let config = Config {
        overwrite: true,
        ..config
    };
    assert_eq!(perform_actions(&config).unwrap().files.len(), 2);
}

#[test]
fn vc_snes_split_writes_rom_and_pcm() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.bin");
    let mut data = vec![0u8; 0x60];
    data[0x31] = 0x08;
    data.extend_from_slice(&[0xaa; 8]);
    data.extend_from_slice(&[0x55; 3]);
    fs::write(&input, &data).unwrap();
    let out = dir.path().join("out");

    perform_actions(&file_config(Action::VcSnesSplit, &input, &out)).unwrap();
    assert_eq!(fs::read(out.join("game.rom")).unwrap(), vec![0xaa; 8]);
    assert_eq!(fs::read(out.join("game.pcm")).unwrap(), vec![0x55; 3]);
}

#[test]
fn vc_genesis_save_writes_srm() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("savedata.vcsd");
    let mut data = b"VCSD".to_vec();
    data.extend_from_slice(&12u32.to_le_bytes());
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(b"SRAM");
    data.extend_from_slice(&4u32.to_le_bytes());
    data.extend_from_slice(&[0x12, 0x34]);
    fs::write(&input, &data).unwrap();
    let out = dir.path().join("out");

    perform_actions(&file_config(Action::VcGenesisSave, &input, &out)).unwrap();
    assert_eq!(
        fs::read(out.join("savedata.srm")).unwrap(),
        vec![0x00, 0x12, 0x00, 0x34]
    );
}

#[test]
fn nes_extract_needs_a_header() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("00000001.app");
    let mut data = vec![0xffu8; 0x40];
    data.extend_from_slice(b"NES\x1a\x01\x01\x00\x00");
    fs::write(&input, &data).unwrap();
    let out = dir.path().join("out");

    perform_actions(&file_config(Action::NesExtract, &input, &out)).unwrap();
    assert_eq!(
        fs::read(out.join("00000001.nes")).unwrap(),
        b"NES\x1a\x01\x01\x00\x00".to_vec()
    );

    fs::write(&input, [0u8; 16]).unwrap();
    let err = perform_actions(&file_config(Action::NesExtract, &input, &out)).unwrap_err();
    assert!(format!("{err:#}").contains("iNES"));
}

#[test]
fn list_needs_no_paths() {
    let config = Config {
        command: Action::List,
        quiet: 1,
        ..Config::default()
    };
    let plan = perform_actions(&config).unwrap();
    assert!(plan.files.is_empty());
    assert!(plan.titles.is_empty());
}
