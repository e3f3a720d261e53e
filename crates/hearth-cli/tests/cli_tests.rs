//! Integration tests for the hearth binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, contents).expect("write");
}

fn scaffold_cast(root: &Path) {
    write(
        root,
        "cast/src/launcher/entrypoint.ts",
        "console.log(\"launcher\", __VERSION__);\n",
    );
    write(
        root,
        "cast/src/receiver/entrypoint.ts",
        "console.log(\"receiver\");\n",
    );
}

fn hearth() -> Command {
    Command::cargo_bin("hearth").expect("binary")
}

#[test]
fn help_lists_subcommands() {
    hearth()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("develop"));
}

#[test]
fn build_cast_produces_hashed_output() {
    let dir = TempDir::new().expect("tempdir");
    scaffold_cast(dir.path());

    hearth()
        .args(["build", "cast", "--no-color"])
        .arg("--cwd").arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Build completed"));

    let dist = dir.path().join("cast/dist");
    assert!(dist.join("manifest.json").is_file());
    assert!(dist.join("index.html").is_file());
    let has_hashed_launcher = fs::read_dir(&dist)
        .expect("read dist")
        .filter_map(|e| e.ok())
        .any(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            name.starts_with("launcher-") && name.ends_with(".js")
        });
    assert!(has_hashed_launcher);
}

#[test]
fn develop_once_keeps_stable_names() {
    let dir = TempDir::new().expect("tempdir");
    scaffold_cast(dir.path());

    hearth()
        .args(["develop", "cast", "--once", "--no-color"])
        .arg("--cwd").arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("cast/dist/launcher.js").is_file());
}

#[test]
fn missing_entry_point_fails_with_the_variant_named() {
    let dir = TempDir::new().expect("tempdir");

    hearth()
        .args(["build", "gallery", "--no-color"])
        .arg("--cwd").arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("gallery"));
}

#[test]
fn unknown_target_is_rejected_by_clap() {
    hearth().args(["build", "desktop"]).assert().failure();
}
