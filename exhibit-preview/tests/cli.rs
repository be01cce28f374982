use std::hash::Hasher;
use std::process::Command;

use twox_hash::XxHash64;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "exhibit-preview-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run_to_file(label: &str, args: &[&str]) -> String {
    let exe = env!("CARGO_BIN_EXE_exhibit-preview");
    let output_path = temp_path(label);
    let status = Command::new(exe)
        .args(args)
        .arg("--output")
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success(), "{args:?} failed");
    std::fs::read_to_string(output_path).expect("read output")
}

fn fingerprint(text: &str) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(text.as_bytes());
    hasher.finish()
}

#[test]
fn cli_lists_personas() {
    let content = run_to_file("personas", &["personas"]);
    assert!(content.contains("Available personas"));
    assert!(content.contains("lola-remedios"));
}

#[test]
fn cli_landmark_json_tracks_persona_stats() {
    let content = run_to_file(
        "landmarks",
        &["landmarks", "--persona", "miguel", "--region", "mindanao", "--format", "json"],
    );
    let rows: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let row = &rows[0];
    assert_eq!(row["id"], "mount-apo");
    assert_eq!(row["statsAfter"]["health"], 80);
    assert_eq!(row["statsAfter"]["stamina"], 69);
    assert_eq!(row["statsAfter"]["money"], 0);
}

#[test]
fn cli_console_report_has_banner() {
    let content = run_to_file("console", &["landmarks", "--persona", "lola-remedios"]);
    assert!(content.contains("Hidden Conditions Preview"));
    assert!(content.contains("Chocolate Hills"));
}

#[test]
fn cli_avatar_json_is_reproducible_for_a_seed() {
    let args = ["avatar", "--persona", "ana", "--seed", "42", "--format", "json"];
    let first = run_to_file("avatar-a", &args);
    let second = run_to_file("avatar-b", &args);
    assert_eq!(fingerprint(&first), fingerprint(&second));
    let doc: serde_json::Value = serde_json::from_str(&first).expect("json avatar");
    assert_eq!(doc["avatar"]["sex"], "woman");
    assert_eq!(doc["badges"].as_array().map(Vec::len), Some(2));
}

#[test]
fn cli_avatar_overlay_accepts_condition_list() {
    let content = run_to_file(
        "overlay",
        &[
            "avatar",
            "--gender",
            "female",
            "--age",
            "55",
            "--conditions",
            "asthma,vertigo",
            "--format",
            "overlay",
        ],
    );
    assert!(content.contains("eyelashes"));
    assert!(content.contains("tier-2"));
}

#[test]
fn cli_rejects_unknown_literal() {
    let exe = env!("CARGO_BIN_EXE_exhibit-preview");
    let output = Command::new(exe)
        .args(["avatar", "--hat", "sombrero"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sombrero"));
}

#[test]
fn cli_reports_missing_data_file() {
    let exe = env!("CARGO_BIN_EXE_exhibit-preview");
    let output = Command::new(exe)
        .args(["personas", "--data", "/nonexistent/exhibit.json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load exhibit data"));
}
