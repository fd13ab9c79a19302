use std::path::Path;
use std::process::{Command, Output};

fn site_checker(root: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_site_checker"))
        .arg("--root")
        .arg(root)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .expect("run site_checker")
}

#[test]
fn failing_site_reports_without_gating() {
    let dir = tempfile::tempdir().unwrap();
    let output = site_checker(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("utf8 report");
    assert!(stdout.contains("📊 TEST SUMMARY"));
    assert!(stdout.contains("Success Rate: 0%"));
}

#[test]
fn fail_on_error_exits_one_when_checks_fail() {
    let dir = tempfile::tempdir().unwrap();
    let output = site_checker(dir.path(), &["--fail-on-error"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("❌ Failed Tests:"));
}

#[test]
fn missing_checklist_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.json");
    let output = site_checker(dir.path(), &["--checklist", absent.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("checklist error"));
}
