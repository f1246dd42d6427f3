use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn lexis(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexis"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn lexis")
}

fn seed(dir: &Path) {
    fs::write(
        dir.join("input.txt"),
        "Le chat noir dort. Le chien noir aboie !\nLe chat, le chien.",
    )
    .unwrap();
    fs::write(dir.join("special-chars.txt"), ".\n,\n!\n").unwrap();
    fs::write(dir.join("ignored-words.txt"), "le\n").unwrap();
    fs::write(dir.join("known-words.txt"), "chat\n").unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn no_arguments_extracts_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());

    let out = lexis(tmp.path(), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(read(tmp.path(), "output.txt"), "aboie\nchien\ndort\nnoir");
}

#[test]
fn stats_flag_prints_counters() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());

    let out = lexis(tmp.path(), &["extract", "--stats"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        "tokens=12 unique=6 ignored=1 known=1 new=4"
    );
}

#[test]
fn dir_and_output_override() {
    let tmp = TempDir::new().unwrap();
    let study = tmp.path().join("study");
    fs::create_dir(&study).unwrap();
    seed(&study);

    let out = lexis(
        tmp.path(),
        &["extract", "--dir", "study", "--output", "nouveaux.txt"],
    );
    assert!(out.status.success());
    assert_eq!(read(&study, "nouveaux.txt"), "aboie\nchien\ndort\nnoir");
    assert!(!study.join("output.txt").exists());
}

#[test]
fn missing_input_fails_with_nonzero_exit() {
    let tmp = TempDir::new().unwrap();

    let out = lexis(tmp.path(), &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("input.txt"), "stderr: {stderr}");
    assert!(!tmp.path().join("output.txt").exists());
}

#[test]
fn learn_then_extract_is_empty() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());

    assert!(lexis(tmp.path(), &["extract"]).status.success());

    let out = lexis(tmp.path(), &["learn"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim_end(),
        "learned 4 new word(s), 5 known in total"
    );
    assert_eq!(
        read(tmp.path(), "known-words.txt"),
        "aboie\nchat\nchien\ndort\nnoir"
    );

    assert!(lexis(tmp.path(), &["extract"]).status.success());
    assert_eq!(read(tmp.path(), "output.txt"), "");
}
