//! Integration tests for npm-ghrelease
//!
//! These tests verify the pieces of the release flow that do not need the
//! network: manifest reading, tag derivation, commit resolution, and the
//! exact shape of the release request and upload URL.

use std::fs;
use std::path::Path;

use git2::Repository;
use npm_ghrelease::github::{resolve_upload_url, ReleaseRequest};
use npm_ghrelease::packager::read_manifest;
use npm_ghrelease::publisher::resolve_head_commit;
use tempfile::TempDir;

/// Test helper to create an npm project with a committed package.json
fn setup_test_project(version: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(
        temp_dir.path().join("package.json"),
        format!(r#"{{"name": "test-project", "version": "{version}"}}"#),
    )
    .expect("Failed to write package.json");

    let repo = Repository::init(temp_dir.path()).expect("Failed to init repository");

    let mut config = repo.config().unwrap();
    config.set_str("user.email", "test@example.com").unwrap();
    config.set_str("user.name", "Test User").unwrap();
    drop(config);

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("package.json")).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = repo.signature().unwrap();

    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();

    (temp_dir, commit_id.to_string())
}

#[test]
fn test_version_detection() {
    let (project, _) = setup_test_project("1.2.3");

    let manifest = read_manifest(project.path()).unwrap();
    assert_eq!(manifest.name, "test-project");
    assert_eq!(manifest.version, "1.2.3");
}

#[test]
fn test_release_request_matches_head_and_version() {
    let (project, commit) = setup_test_project("1.2.3");

    let version = read_manifest(project.path()).unwrap().version;
    let resolved_commit = resolve_head_commit(project.path()).unwrap();
    assert_eq!(resolved_commit, commit);

    let tag = format!("v{version}");
    let request = ReleaseRequest {
        tag_name: tag.clone(),
        name: tag,
        target_commitish: resolved_commit,
        body: "Automated npm package release".to_string(),
        draft: false,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["tag_name"], "v1.2.3");
    assert_eq!(value["name"], "v1.2.3");
    assert_eq!(value["target_commitish"], commit);
}

#[test]
fn test_upload_url_per_tarball() {
    // One upload per produced tarball, each with its filename substituted
    // into the release's upload URL template.
    let template = "https://uploads.github.com/repos/alloy/relay/releases/99/assets{?name,label}";
    let tarballs = ["relay-0.4.0.tgz", "babel-relay-plugin-0.4.0.tgz"];

    let urls: Vec<String> = tarballs
        .iter()
        .map(|name| resolve_upload_url(template, name))
        .collect();

    assert_eq!(urls.len(), tarballs.len());
    assert_eq!(
        urls[0],
        "https://uploads.github.com/repos/alloy/relay/releases/99/assets?name=relay-0.4.0.tgz"
    );
    assert_eq!(
        urls[1],
        "https://uploads.github.com/repos/alloy/relay/releases/99/assets?name=babel-relay-plugin-0.4.0.tgz"
    );
}

#[test]
fn test_tag_is_derived_from_root_version_only() {
    let (project, _) = setup_test_project("2.0.0-rc.1");

    // A sub-module with a different version must not influence the tag
    let plugin_dir = project.path().join("scripts/plugin");
    fs::create_dir_all(&plugin_dir).unwrap();
    fs::write(
        plugin_dir.join("package.json"),
        r#"{"name": "plugin", "version": "9.9.9"}"#,
    )
    .unwrap();

    let version = read_manifest(project.path()).unwrap().version;
    assert_eq!(format!("v{version}"), "v2.0.0-rc.1");
}
