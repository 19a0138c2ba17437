#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CHANGELOG: &str =
    "# CHANGELOG\n\n## next\n\nSome manual notes here.\n\n## 0.0.59\n\n- Old entry\n";

fn relnotes(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("relnotes").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), CHANGELOG).unwrap();
    dir
}

#[test]
fn extract_prints_section_to_stdout() {
    let dir = workspace();
    relnotes(&dir)
        .args(["extract", "--section", "0.0.59"])
        .assert()
        .success()
        .stdout("- Old entry\n");
}

#[test]
fn extract_missing_section_prints_nothing() {
    let dir = workspace();
    relnotes(&dir)
        .args(["extract", "--section", "0.0.5"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("missing or empty"));
}

#[test]
fn extract_strips_comments_into_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("HISTORY.md"),
        "## next\n\n<!-- write here -->\n- manual note\n\n\n\n- second\n\n## 1.0.0\n",
    )
    .unwrap();

    relnotes(&dir)
        .args([
            "extract",
            "--section",
            "next",
            "--strip-comments",
            "--changelog",
            "HISTORY.md",
            "--output",
            "manual.md",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("manual.md")).unwrap(),
        "- manual note\n\n- second\n"
    );
}

#[test]
fn missing_required_flag_exits_with_one() {
    let dir = workspace();
    relnotes(&dir)
        .args(["extract"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--section"));

    relnotes(&dir)
        .args(["update", "--version", "0.0.60"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--notes"));
}

#[test]
fn merge_combines_sources() {
    let dir = workspace();
    fs::write(dir.path().join("manual.md"), "Highlights\n").unwrap();
    fs::write(dir.path().join("generated.md"), "- fix (#3)\n").unwrap();

    relnotes(&dir)
        .args([
            "merge",
            "--manual",
            "manual.md",
            "--generated",
            "generated.md",
            "--output",
            "notes.md",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.md"));

    assert_eq!(
        fs::read_to_string(dir.path().join("notes.md")).unwrap(),
        "Highlights\n\n- fix (#3)\n"
    );
}

#[test]
fn merge_falls_back_when_empty() {
    let dir = workspace();
    fs::write(dir.path().join("manual.md"), "  \n").unwrap();
    fs::write(dir.path().join("generated.md"), "").unwrap();

    relnotes(&dir)
        .args([
            "merge",
            "--manual",
            "manual.md",
            "--generated",
            "generated.md",
            "--fallback",
            "Maintenance release.",
            "-o",
            "notes.md",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("notes.md")).unwrap(),
        "Maintenance release.\n"
    );
}

#[test]
fn update_rotates_pending_section() {
    let dir = workspace();
    fs::write(dir.path().join("notes.md"), "- Release notes\n").unwrap();

    relnotes(&dir)
        .args(["update", "--version", "0.0.60", "--notes", "notes.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 0.0.60"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        "# CHANGELOG\n\n\
         ## next\n\n\
         <!-- Add notes for the next release here. -->\n\n\
         ## 0.0.60\n\n\
         - Release notes\n\n\
         ## 0.0.59\n\n\
         - Old entry\n"
    );
}

#[test]
fn update_rejects_existing_version() {
    let dir = workspace();
    fs::write(dir.path().join("notes.md"), "- again\n").unwrap();

    relnotes(&dir)
        .args(["update", "--version", "0.0.59", "--notes", "notes.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already has"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        CHANGELOG
    );
}

#[test]
fn missing_changelog_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    relnotes(&dir)
        .args(["extract", "--section", "next"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Document not found"));
}

#[test]
fn configured_changelog_is_the_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/CHANGES.md"), CHANGELOG).unwrap();

    relnotes(&dir)
        .args(["config", "changelog", "docs/CHANGES.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changelog set to docs/CHANGES.md"));

    relnotes(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changelog = docs/CHANGES.md"));

    relnotes(&dir)
        .args(["extract", "--section", "next"])
        .assert()
        .success()
        .stdout("Some manual notes here.\n");
}

#[test]
fn version_flag_prints_build_version() {
    let dir = tempfile::tempdir().unwrap();
    relnotes(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("relnotes {}\n", ::relnotes::get_version()));
}
