use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use hulhe_cli::run;
use hulhe_engine::logger::HandRecord;
use tempfile::{TempDir, tempdir};

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

/// Simulates `hands` hands into a fresh directory and returns it with the
/// path of its hands.jsonl.
fn simulated(hands: u32) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let hands = hands.to_string();
    let (code, _, _) = run_cli(&[
        "hulhe",
        "sim",
        "--hands",
        &hands,
        "--seed",
        "21",
        "--agents",
        "random,aggressive",
        "--output",
        dir.path().to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    let path = dir.path().join("hands.jsonl");
    (dir, path)
}

fn summary(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).unwrap()
}

fn stats(path: &Path) -> (i32, String, String) {
    run_cli(&["hulhe", "stats", "--input", path.to_str().unwrap()])
}

#[test]
fn summary_counts_add_up() {
    let (_dir, path) = simulated(30);
    let (code, stdout, _) = stats(&path);
    assert_eq!(code, 0);

    let s = summary(&stdout);
    assert_eq!(s["hands"], 30);
    let wins = s["wins"]["seat0"].as_u64().unwrap() + s["wins"]["seat1"].as_u64().unwrap();
    assert_eq!(wins + s["ties"].as_u64().unwrap(), 30);
    let ended = s["ended_by"]["fold"].as_u64().unwrap() + s["ended_by"]["showdown"].as_u64().unwrap();
    assert_eq!(ended, 30);
    assert_eq!(
        s["net"]["seat0"].as_i64().unwrap() + s["net"]["seat1"].as_i64().unwrap(),
        0
    );
}

#[test]
fn tampered_net_fails_conservation_check() {
    let (_dir, path) = simulated(5);
    let text = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<String> = text.lines().map(String::from).collect();
    let mut rec: HandRecord = serde_json::from_str(&lines[2]).unwrap();
    rec.result.net[0] += 1;
    lines[2] = serde_json::to_string(&rec).unwrap();
    fs::write(&path, lines.join("\n") + "\n").unwrap();

    let (code, stdout, stderr) = stats(&path);
    assert_eq!(code, 2);
    assert!(stderr.contains(&format!("Chip conservation violated at hand {}", rec.hand_id)));
    // the summary is still printed
    assert_eq!(summary(&stdout)["hands"], 5);
}

#[test]
fn torn_final_line_is_discarded_with_warning() {
    let (_dir, path) = simulated(4);
    let mut f = fs::OpenOptions::new().append(true).open(&path).unwrap();
    write!(f, "{{\"hand_id\":\"2026").unwrap();
    drop(f);

    let (code, stdout, stderr) = stats(&path);
    assert_eq!(code, 0);
    assert_eq!(summary(&stdout)["hands"], 4);
    assert!(stderr.contains("Discarded 1 incomplete final line(s)"));
}

#[test]
fn directory_input_reads_plain_and_compressed_histories() {
    let (dir, path) = simulated(6);
    let raw = fs::read(&path).unwrap();
    let nested = dir.path().join("archive");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("old.jsonl.zst"), zstd::bulk::compress(&raw, 3).unwrap()).unwrap();

    let (code, stdout, _) = stats(dir.path());
    assert_eq!(code, 0);
    assert_eq!(summary(&stdout)["hands"], 12);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let (code, _, stderr) = stats(&dir.path().join("nope.jsonl"));
    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read"));
}
