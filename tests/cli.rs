extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn julia() -> Command {
    Command::cargo_bin("julia").unwrap()
}

#[test]
fn renders_a_colour_pixmap() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("julia.ppm");
    julia()
        .args(&["-o", out.to_str().unwrap(), "-s", "32", "-t", "1"])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"P6"));
    assert!(bytes.len() > 32 * 32 * 3);
}

#[test]
fn renders_a_graymap_for_pgm_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("julia.pgm");
    julia()
        .args(&["-o", out.to_str().unwrap(), "-s", "16", "-t", "1", "-c", "-0.8,0.156"])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"P5"));
}

#[test]
fn numbers_animation_frames() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("sweep.ppm");
    julia()
        .args(&[
            "-o",
            out.to_str().unwrap(),
            "-s",
            "8",
            "-t",
            "1",
            "--frames",
            "3",
            "--step",
            "-0.05",
            "--palette",
            "viridis",
        ])
        .assert()
        .success();
    for frame in 0..3 {
        assert!(dir.path().join(format!("sweep-{:04}.ppm", frame)).exists());
    }
    assert!(!out.exists());
}

#[test]
fn rejects_an_unknown_palette() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("julia.ppm");
    julia()
        .args(&["-o", out.to_str().unwrap(), "-p", "rainbow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown palette"));
}

#[test]
fn rejects_zero_iterations() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("julia.ppm");
    julia()
        .args(&["-o", out.to_str().unwrap(), "-i", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Iteration count"));
    assert!(!out.exists());
}

#[test]
fn inverted_bounds_are_a_render_failure() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("julia.ppm");
    julia()
        .args(&["-o", out.to_str().unwrap(), "-s", "8", "-b", "1.5,-1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure: invalid input"));
    assert!(!out.exists());
}

#[test]
fn output_is_required() {
    julia().assert().failure();
}
