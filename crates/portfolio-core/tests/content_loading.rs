//! Content file loading tests

use std::io::Write;

use portfolio_core::{PortfolioContent, PortfolioError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_roundtrips_default_content() {
    let content = PortfolioContent::default();
    let json = serde_json::to_string_pretty(&content).unwrap();
    let file = write_temp(&json);

    let loaded = PortfolioContent::load(file.path()).unwrap();
    assert_eq!(loaded, content);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = PortfolioContent::load("/nonexistent/portfolio/content.json").unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

#[test]
fn test_load_malformed_json_is_parse_error() {
    let file = write_temp("{ not json");
    let err = PortfolioContent::load(file.path()).unwrap_err();
    assert!(matches!(err, PortfolioError::Parse(_)));
}

#[test]
fn test_load_empty_content_rejected() {
    let file = write_temp(
        r#"{
            "owner_name": "Nobody",
            "tagline": "",
            "skills": [],
            "services": [],
            "projects": []
        }"#,
    );
    let err = PortfolioContent::load(file.path()).unwrap_err();
    assert!(matches!(err, PortfolioError::Content(_)));
}

#[test]
fn test_load_partial_content_accepted() {
    let file = write_temp(
        r#"{
            "owner_name": "Sam",
            "tagline": "Just skills",
            "skills": [{ "name": "Editing", "percent": 70 }],
            "services": [],
            "projects": []
        }"#,
    );
    let loaded = PortfolioContent::load(file.path()).unwrap();
    assert_eq!(loaded.skills.len(), 1);
    assert!(loaded.service_slides().is_empty());
}
