//! Integration tests for the farm-sprites CLI
//!
//! These tests verify end-to-end behavior by running the binary in a scratch
//! directory and checking exit codes, console output and the files written.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const EXPECTED_FILES: [&str; 16] = [
    "grass.png",
    "soil.png",
    "watered_soil.png",
    "wheat_seed.png",
    "wheat_sprout.png",
    "wheat_growing.png",
    "wheat_mature.png",
    "carrot_seed.png",
    "carrot_sprout.png",
    "carrot_growing.png",
    "carrot_mature.png",
    "tomato_seed.png",
    "tomato_sprout.png",
    "tomato_growing.png",
    "tomato_mature.png",
    "player.png",
];

/// Run the binary with `dir` as its working directory
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_farm-sprites"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute farm-sprites")
}

/// SHA-256 of every file in `dir`, keyed by file name
fn digests(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let bytes = fs::read(entry.path()).unwrap();
            (entry.file_name().to_string_lossy().into_owned(), Sha256::digest(&bytes).to_vec())
        })
        .collect()
}

#[test]
fn test_zero_args_writes_all_sprites_to_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert!(
        output.status.success(),
        "exit code {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let mut written: Vec<String> = digests(dir.path()).into_keys().collect();
    let mut expected: Vec<String> = EXPECTED_FILES.iter().map(|s| s.to_string()).collect();
    written.sort();
    expected.sort();
    assert_eq!(written, expected);

    for name in EXPECTED_FILES {
        let image = image::open(dir.path().join(name)).unwrap();
        assert_eq!(image.color(), image::ColorType::Rgba8, "{} should be RGBA", name);
        assert_eq!((image.width(), image.height()), (32, 32), "{} should be 32x32", name);
    }
}

#[test]
fn test_console_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let created: Vec<&str> =
        stdout.lines().filter_map(|line| line.strip_prefix("  Created: ")).collect();
    assert_eq!(created, EXPECTED_FILES.to_vec());
    assert!(stdout.contains("Generated 16 sprites!"));
    assert!(stdout.contains("Place these in farm-game/assets/"));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_runs_are_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    assert!(run_in(first.path(), &[]).status.success());
    let before = digests(first.path());

    // Rerun over existing files, and once more in a fresh directory
    assert!(run_in(first.path(), &[]).status.success());
    assert!(run_in(second.path(), &[]).status.success());

    assert_eq!(before.len(), 16);
    assert_eq!(digests(first.path()), before);
    assert_eq!(digests(second.path()), before);
}

#[test]
fn test_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("player.png"), b"not a png").unwrap();

    assert!(run_in(dir.path(), &[]).status.success());
    assert!(image::open(dir.path().join("player.png")).is_ok());
}

#[test]
fn test_player_pixels() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_in(dir.path(), &["--only", "player.png"]).status.success());

    let image = image::open(dir.path().join("player.png")).unwrap().to_rgba8();
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] != 0 {
            assert_eq!(pixel.0, [76, 76, 204, 255], "pixel ({}, {})", x, y);
            let inside = (8..=24).contains(&x) && (8..=30).contains(&y);
            assert!(inside, "pixel ({}, {}) outside body", x, y);
        }
    }
    // Torso center
    assert_eq!(image.get_pixel(16, 23).0, [76, 76, 204, 255]);
}

#[test]
fn test_out_dir_and_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["-o", "assets", "--only", "grass.png", "--only", "soil.png"]);
    assert!(output.status.success());

    let mut written: Vec<String> = digests(&dir.path().join("assets")).into_keys().collect();
    written.sort();
    assert_eq!(written, vec!["grass.png", "soil.png"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Generated 2 sprites!"));
}

#[test]
fn test_unknown_only_name_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--only", "potato.png"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: No sprite named 'potato.png'"));
    assert!(digests(dir.path()).is_empty());
}

#[test]
fn test_scale_flag() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_in(dir.path(), &["--scale", "2", "--only", "grass.png"]).status.success());

    let image = image::open(dir.path().join("grass.png")).unwrap();
    assert_eq!((image.width(), image.height()), (64, 64));
}

#[test]
fn test_list_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.lines().next().unwrap().starts_with("grass.png"));
    assert!(digests(dir.path()).is_empty());
}

#[test]
fn test_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("sprites.toml"),
        r##"
[[sprite]]
file = "path.png"
color = "#808080"
pattern = "solid"

[[sprite]]
file = "mystery.png"
color = [255, 0, 0, 255]
pattern = "unknown_tag"
"##,
    )
    .unwrap();

    let output = run_in(dir.path(), &["--catalog", "sprites.toml", "-o", "out"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let path = image::open(dir.path().join("out/path.png")).unwrap().to_rgba8();
    assert!(path.pixels().all(|p| p.0 == [128, 128, 128, 255]));

    let mystery = image::open(dir.path().join("out/mystery.png")).unwrap().to_rgba8();
    assert_eq!(mystery.dimensions(), (32, 32));
    assert!(mystery.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_bad_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.toml"), "[[sprite]]\nfile = \"a.png\"\n").unwrap();

    let output = run_in(dir.path(), &["--catalog", "bad.toml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));

    let missing = run_in(dir.path(), &["--catalog", "missing.toml"]);
    assert_eq!(missing.status.code(), Some(2));
}

#[test]
fn test_invalid_args() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--scale", "99"]);
    assert_eq!(output.status.code(), Some(2));
}
