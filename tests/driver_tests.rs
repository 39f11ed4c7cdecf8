use std::fs;

use vcfront::driver::{check_file, CheckOptions};
use vcfront::error::DriverError;

#[test]
fn check_file_accepts_valid_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ok.vc");
    fs::write(
        &path,
        "// entry point\nint main() {\n\tint x = 2 * (3 + 4);\n\treturn x;\n}\n",
    )
    .unwrap();

    let report = check_file(&path, &CheckOptions::default()).unwrap();
    assert!(report.is_success());
    assert!(report.syntax_error.is_none());
}

#[test]
fn check_file_reports_first_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.vc");
    fs::write(&path, "int main() {\n\treturn x\n}\n").unwrap();

    let report = check_file(&path, &CheckOptions { trace_tokens: true }).unwrap();
    assert!(!report.is_success());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].to_string(),
        "ERROR: 3(1)..3(1): \";\" expected here"
    );
    assert!(report.syntax_error.is_some());
}

#[test]
fn check_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.vc");

    let err = check_file(&path, &CheckOptions::default()).unwrap_err();
    assert!(matches!(err, DriverError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read '"));
}
