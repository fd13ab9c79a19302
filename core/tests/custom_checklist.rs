use sitecheck_core::checker::ConformanceChecker;
use sitecheck_core::checklist::{checklist_v1, Checklist};
use sitecheck_core::error::CoreError;
use std::fs;

const SINGLE_RULE: &str = r#"{
    "checklist_version": "custom_v1",
    "assets": [
        { "name": "page", "path": "public/index.html", "role": "REQUIRED" }
    ],
    "categories": [
        {
            "category": "FILE_STRUCTURE",
            "checks": [
                { "check_id": "F.PAGE", "description": "Page exists",
                  "predicate": { "kind": "asset_exists", "asset": "page" } }
            ]
        },
        {
            "category": "MARKUP_CONTENT",
            "requires": ["page"],
            "unavailable_description": "Page readable",
            "checks": [
                { "check_id": "M.CANONICAL", "description": "Canonical link present",
                  "predicate": { "kind": "matches", "asset": "page",
                                 "pattern": "<link[^>]+rel=\"canonical\"" } }
            ]
        }
    ]
}"#;

#[test]
fn checklist_file_replaces_embedded_rules() {
    let dir = tempfile::tempdir().unwrap();
    let checklist_path = dir.path().join("checklist.json");
    fs::write(&checklist_path, SINGLE_RULE).unwrap();
    fs::create_dir_all(dir.path().join("public")).unwrap();
    fs::write(
        dir.path().join("public/index.html"),
        r#"<head><link href="/" rel="canonical"></head>"#,
    )
    .unwrap();

    let checker =
        ConformanceChecker::from_checklist(Checklist::from_path(&checklist_path).unwrap()).unwrap();
    assert_eq!(checker.checklist_version(), "custom_v1");

    let run = checker.run(dir.path());
    let report = run.report();
    assert_eq!(report.total, 2);
    assert_eq!(report.passed, 2);
    assert!(run.result_for_check("M.CANONICAL").unwrap().passed);
}

#[test]
fn invalid_regex_is_a_setup_error() {
    let json = SINGLE_RULE.replace("<link[^>]+rel=\\\"canonical\\\"", "(unclosed");
    let checklist = Checklist::from_json_str(&json).unwrap();
    match ConformanceChecker::from_checklist(checklist) {
        Err(CoreError::Regex(_)) => {}
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected regex error"),
    }
}

#[test]
fn malformed_checklist_json_is_rejected() {
    let err = Checklist::from_json_str("{ \"checklist_version\": 1 }").unwrap_err();
    assert!(matches!(err, CoreError::Json(_)));
}

#[test]
fn missing_checklist_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Checklist::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn recommended_check_on_required_asset_is_rejected() {
    let mut checklist = checklist_v1().unwrap();
    checklist.assets[3].role = sitecheck_core::assets::AssetRole::REQUIRED;
    let err = ConformanceChecker::from_checklist(checklist).err().unwrap();
    assert!(err.to_string().contains("as recommended"));
}
