use clap::Parser;
use justnotes_cli::{run, Cli, Status};
use justnotes_index::FlatBranch;
use justnotes_test_utils::{sample_index, sample_index_json, MINIMAL_INDEX_JSON};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    path.display().to_string()
}

fn exec(args: &[&str]) -> (Status, String) {
    let cli = Cli::try_parse_from(std::iter::once("justnotes").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let status = run(&cli, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn check_clean_index() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", MINIMAL_INDEX_JSON);

    let (status, out) = exec(&["check", &index, "--strict"]);
    assert_eq!(status, Status::Success);
    assert!(out.contains("1 flat branches"));
    assert!(out.trim_end().ends_with("ok"));
}

#[test]
fn check_reports_issues_and_fails_when_strict() {
    let dir = TempDir::new().unwrap();
    let invalid = MINIMAL_INDEX_JSON.replace("\"3\"", "\"9\"");
    let index = write(dir.path(), "index.json", &invalid);

    let (lenient, out) = exec(&["check", &index]);
    assert_eq!(lenient, Status::Success);
    assert!(out.contains("1 issue(s)"));

    let (strict, _) = exec(&["check", &index, "--strict"]);
    assert_eq!(strict, Status::Failure);
}

const ESCAPING_INDEX_JSON: &str = r#"{"branches": {
    "cse": {"label": "Computer Science", "shortLabel": "CSE", "semesters": {"3": {}}},
    "../escaped": {"label": "Escaped", "shortLabel": "ESC", "semesters": {}}
}}"#;

#[test]
fn check_strict_rejects_path_escaping_key() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", ESCAPING_INDEX_JSON);

    let (status, out) = exec(&["check", &index, "--strict"]);
    assert_eq!(status, Status::Failure);
    assert!(out.contains("key '../escaped' cannot be used as a path segment"));
    assert!(!out.trim_end().ends_with("ok"));
}

#[test]
fn build_never_writes_outside_output_directory() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", ESCAPING_INDEX_JSON);
    let out_dir = dir.path().join("dist");

    let (status, _) = exec(&["build", &index, "--out", &out_dir.display().to_string()]);
    assert_eq!(status, Status::Success);
    assert!(!dir.path().join("escaped.json").exists());
    assert!(out_dir.join("cse/3.json").is_file());

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("routes.json")).unwrap()).unwrap();
    assert!(manifest
        .as_array()
        .unwrap()
        .iter()
        .all(|e| !e["file"].as_str().unwrap().contains("..")));
}

#[test]
fn build_writes_one_manifest_entry_per_file_when_branch_and_scheme_collide() {
    let dir = TempDir::new().unwrap();
    let colliding = sample_index().with_branch("2022", FlatBranch::new("Shadowed", "2022"));
    let colliding = serde_json::to_string(&colliding).unwrap();
    let index = write(dir.path(), "index.json", &colliding);
    let out_dir = dir.path().join("dist");

    let (strict, out) = exec(&["check", &index, "--strict"]);
    assert_eq!(strict, Status::Failure);
    assert!(out.contains("shadowed by scheme '2022'"));

    exec(&["build", &index, "--out", &out_dir.display().to_string()]);
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("routes.json")).unwrap()).unwrap();
    let files: Vec<&str> = manifest
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["file"].as_str().unwrap())
        .collect();
    assert_eq!(files.iter().filter(|f| **f == "2022.json").count(), 1);

    let page: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("2022.json")).unwrap()).unwrap();
    assert_eq!(page["page"], "scheme");
}

#[test]
fn routes_for_one_family() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", &sample_index_json());

    let (status, out) = exec(&["routes", &index, "--family", "subject"]);
    assert_eq!(status, Status::Success);
    assert_eq!(out, "/2022/cse/3/bcs301\n/2022/cse/3/bcs302\n");
}

#[test]
fn routes_defined_only() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", MINIMAL_INDEX_JSON);

    let (_, dense) = exec(&["routes", &index, "--family", "semester"]);
    assert_eq!(dense.lines().count(), 8);

    let (_, defined) = exec(&["routes", &index, "--family", "semester", "--defined-only"]);
    assert_eq!(defined, "/cse/3\n");
}

#[test]
fn unknown_family_is_rejected() {
    let result = Cli::try_parse_from(["justnotes", "routes", "index.json", "--family", "page"]);
    assert!(result.is_err());
}

#[test]
fn show_prints_facts() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", MINIMAL_INDEX_JSON);

    let (status, out) = exec(&["show", &index, "/cse/3/pyqs"]);
    assert_eq!(status, Status::Success);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["page"], "resource-type");
    assert_eq!(json["rows"][0]["tags"][0], "Jan 2023");
}

#[test]
fn show_missing_page() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", MINIMAL_INDEX_JSON);

    let (status, out) = exec(&["show", &index, "/cse/5"]);
    assert_eq!(status, Status::Failure);
    assert_eq!(out, "not found\n");
}

#[test]
fn config_file_applies() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", MINIMAL_INDEX_JSON);
    let config = write(dir.path(), "justnotes.toml", "[site]\nuniversity = \"KTU\"\n");

    let (_, out) = exec(&["show", &index, "/cse", "--config", &config]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        json["meta"]["title"],
        "CSE KTU Notes, PYQs & Question Banks — All Semesters"
    );
}

#[test]
fn build_writes_pages_and_manifest() {
    let dir = TempDir::new().unwrap();
    let index = write(dir.path(), "index.json", &sample_index_json());
    let out_dir = dir.path().join("dist");

    let (status, out) = exec(&["build", &index, "--out", &out_dir.display().to_string()]);
    assert_eq!(status, Status::Success);
    assert!(out.contains("pages written"));

    assert!(out_dir.join("index.json").is_file());
    assert!(out_dir.join("cse/3/pyqs.json").is_file());
    assert!(out_dir.join("2022/cse/3/bcs301.json").is_file());
    assert!(!out_dir.join("cse/1.json").exists());

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("routes.json")).unwrap()).unwrap();
    let entries = manifest.as_array().unwrap();
    assert_eq!(entries[0]["path"], "/cse");
    assert_eq!(entries[0]["file"], "cse.json");
    assert!(entries.iter().all(|e| e["family"].is_string()));
}

#[test]
fn missing_index_is_error() {
    let cli = Cli::try_parse_from(["justnotes", "show", "/nonexistent/index.json", "/cse"]).unwrap();
    let mut out = Vec::new();
    assert!(run(&cli, &mut out).is_err());
}
