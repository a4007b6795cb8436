use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_cinemerge")
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("cinemerge-cli-{name}-{stamp}"));
    fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("movies.csv"),
        "id;title;year;genre;rating\n1;Matrix, The;1999;...;...\n2;Amelie;2001;...;...\n",
    )
    .expect("catalog fixture should be written");
    fs::write(dir.join("directors.txt"), "1,Lana Wachowski\n")
        .expect("director fixture should be written");
}

fn cinemerge(dir: &Path) -> Command {
    let mut command = Command::new(bin());
    command
        .current_dir(dir)
        .env_remove("CINEMERGE_CATALOG")
        .env_remove("CINEMERGE_DIRECTORS")
        .env_remove("CINEMERGE_OUTPUT");
    command
}

#[test]
fn bare_invocation_merges_default_paths() {
    let dir = unique_temp_dir("bare");
    write_inputs(&dir);

    let output = cinemerge(&dir).output().expect("cinemerge should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("movies merged: entries=2"));

    let written = fs::read_to_string(dir.join("movies.json")).expect("movies.json should exist");
    let payload: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(payload[0]["title"], "Amelie");
    assert_eq!(payload[0]["director"], "Not specified");
    assert_eq!(payload[1]["title"], "The Matrix");
    assert_eq!(payload[1]["director"], "Lana Wachowski");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn merge_accepts_positional_paths() {
    let dir = unique_temp_dir("positional");
    write_inputs(&dir);
    let out_path = dir.join("nested").join("out.json");

    let output = cinemerge(&dir)
        .args([
            "merge",
            "movies.csv",
            "directors.txt",
            out_path.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("merge should run");

    assert_eq!(output.status.code(), Some(0));
    assert!(out_path.exists());
    assert!(!dir.join("movies.json").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn env_overrides_output_path() {
    let dir = unique_temp_dir("env");
    write_inputs(&dir);

    let output = cinemerge(&dir)
        .env("CINEMERGE_OUTPUT", "from-env.json")
        .output()
        .expect("merge should run");

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.join("from-env.json").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_input_fails_with_path_in_message() {
    let dir = unique_temp_dir("missing");

    let output = cinemerge(&dir).arg("merge").output().expect("merge should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("merge failed: failed to read input file"));
    assert!(stderr.contains("movies.csv"));
    assert!(!dir.join("movies.json").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn inspect_emits_report_json() {
    let dir = unique_temp_dir("inspect");
    write_inputs(&dir);

    let output = cinemerge(&dir).arg("inspect").output().expect("inspect should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("inspect should emit json");
    assert_eq!(payload["entries"], 2);
    assert_eq!(payload["directors_matched"], 1);
    assert_eq!(payload["directors_defaulted"], 1);
    assert!(!dir.join("movies.json").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unknown_command_returns_usage() {
    let dir = unique_temp_dir("unknown");

    let output = cinemerge(&dir).arg("serve").output().expect("cinemerge should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: cinemerge"));

    let _ = fs::remove_dir_all(dir);
}
