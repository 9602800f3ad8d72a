//! Integration tests for the typograph CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn typograph() -> Command {
    let mut cmd = Command::cargo_bin("typograph").unwrap();
    cmd.env_remove("TYPOGRAPH_CONFIG");
    cmd
}

#[test]
fn test_process_text_output() {
    let mut cmd = typograph();
    cmd.arg("process").arg("-i").arg(fixture_path("sample.txt"));

    cmd.assert().success().stdout(
        "Copyright © 2024 Example Corp…\nNot bad &ndash; not bad at all!!!\nWhat???\n",
    );
}

#[test]
fn test_json_output() {
    let mut cmd = typograph();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let doc = &value[0];
    assert!(doc["file"].as_str().unwrap().ends_with("sample.txt"));
    let replacements = doc["replacements"].as_array().unwrap();
    assert_eq!(replacements.len(), 5);
    assert_eq!(replacements[0]["content"], "©");
    assert_eq!(replacements[0]["matched"], "(C)");
    assert_eq!(replacements[0]["span"]["start"], 10);
    assert_eq!(replacements[0]["span"]["end"], 12);
    assert_eq!(replacements[2]["span"]["line"], 1);
}

#[test]
fn test_custom_mapping_argument() {
    let mut cmd = typograph();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("mappings.txt"))
        .arg("-m")
        .arg("brb=be right back");

    cmd.assert()
        .success()
        .stdout("Prices are ±5%, be right back… &mdash; honest.\n");
}

#[test]
fn test_custom_mapping_from_config() {
    let mut cmd = typograph();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("mappings.txt"))
        .arg("-c")
        .arg(fixture_path("custom.toml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("be right back…"));
}

#[test]
fn test_config_from_environment() {
    let mut cmd = typograph();
    cmd.env("TYPOGRAPH_CONFIG", fixture_path("custom.toml"))
        .arg("process")
        .arg("-i")
        .arg(fixture_path("mappings.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("be right back"));
}

#[test]
fn test_invalid_mapping_argument() {
    let mut cmd = typograph();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-m")
        .arg("=oops");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mapping"));
}

#[test]
fn test_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "one...\n").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "two (r)\n").unwrap();
    fs::write(temp_dir.path().join("c.md"), "skipped (c)\n").unwrap();

    let pattern = temp_dir.path().join("*.txt");
    let mut cmd = typograph();
    cmd.arg("process").arg("-i").arg(pattern.to_str().unwrap());

    cmd.assert()
        .success()
        .stdout("one…\ntwo ®\n");
}

#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..8 {
        fs::write(
            temp_dir.path().join(format!("doc{i}.txt")),
            format!("doc {i} (tm) -- ok...\n"),
        )
        .unwrap();
    }
    let pattern = temp_dir.path().join("*.txt");

    let sequential = typograph()
        .arg("process")
        .arg("-i")
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parallel = typograph()
        .arg("process")
        .arg("-i")
        .arg(pattern.to_str().unwrap())
        .arg("--parallel")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    let mut cmd = typograph();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-o")
        .arg(&output_path);

    cmd.assert().success().stdout("");
    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with("Copyright © 2024"));
}

#[test]
fn test_no_matching_files() {
    let mut cmd = typograph();
    cmd.arg("process").arg("-i").arg("nonexistent/*.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_validate_and_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("typograph.toml");

    typograph()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    typograph()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"));
}

#[test]
fn test_validate_rejects_empty_key() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[[mappings]]\nfrom = \"\"\nto = \"x\"\n").unwrap();

    typograph()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"));
}

#[test]
fn test_list_triggers() {
    typograph()
        .arg("list")
        .arg("triggers")
        .assert()
        .success()
        .stdout(predicate::str::contains("'('  1 matcher"))
        .stdout(predicate::str::contains("'-'  1 matcher"));
}

#[test]
fn test_help_command() {
    typograph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: typograph"));
}
