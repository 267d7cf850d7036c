//! Integration test: a model repository on disk with a checksum manifest.
//!
//! Builds a small repository layout, writes a manifest for it, and runs the
//! agent's load action the way a model server would.

use modelsum_core::digest::{self, MD5};
use modelsum_core::manifest::Manifest;
use modelsum_core::{Action, ChecksumAgent, ChecksumError, Location, Outcome, ValueFormat};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_repo(root: &Path) {
    fs::create_dir_all(root.join("1")).unwrap();
    fs::write(root.join("config.pbtxt"), b"name: \"resnet\"\n").unwrap();
    fs::write(root.join("1/model.onnx"), (0u8..=255).cycle().take(10_000).collect::<Vec<_>>())
        .unwrap();
}

fn manifest_for(root: &Path, files: &[(&str, &str)]) -> Manifest {
    let mut text = String::from("[parameters]\n");
    for (alg, file) in files {
        let algorithm = digest::lookup(alg).unwrap();
        let data = fs::read(root.join(file)).unwrap();
        text.push_str(&format!("\"{alg}:{file}\" = \"{}\"\n", algorithm.hash(&data)));
    }
    Manifest::parse(&text).unwrap()
}

#[test]
fn repository_with_matching_manifest_loads() {
    let repo = tempdir().unwrap();
    write_repo(repo.path());
    let manifest = manifest_for(
        repo.path(),
        &[("MD5", "config.pbtxt"), ("sha256", "1/model.onnx")],
    );

    let agent = ChecksumAgent::new(ValueFormat::Bare);
    let loc = Location::Filesystem(repo.path().to_path_buf());
    let outcome = agent.handle(Action::Load, &loc, manifest.parameters);
    assert!(outcome.is_pass(), "{outcome:?}");
}

#[test]
fn tampered_file_fails_with_mismatch() {
    let repo = tempdir().unwrap();
    write_repo(repo.path());
    let manifest = manifest_for(repo.path(), &[("md5", "config.pbtxt"), ("md5", "1/model.onnx")]);
    fs::write(repo.path().join("1/model.onnx"), b"swapped weights").unwrap();

    let agent = ChecksumAgent::default();
    let loc = Location::Filesystem(repo.path().to_path_buf());
    match agent.handle(Action::Load, &loc, manifest.parameters) {
        Outcome::Fail(ChecksumError::DigestMismatch {
            path,
            algorithm,
            actual,
            ..
        }) => {
            assert_eq!(path, "1/model.onnx");
            assert_eq!(algorithm, "MD5");
            assert_eq!(actual, MD5.hash(b"swapped weights"));
        }
        other => panic!("expected DigestMismatch, got {other:?}"),
    }
}

#[test]
fn deleted_file_fails_as_unreadable() {
    let repo = tempdir().unwrap();
    write_repo(repo.path());
    let manifest = manifest_for(repo.path(), &[("md5", "1/model.onnx")]);
    fs::remove_file(repo.path().join("1/model.onnx")).unwrap();

    let outcome = ChecksumAgent::default().handle(
        Action::Load,
        &Location::Filesystem(repo.path().to_path_buf()),
        manifest.parameters,
    );
    let err = outcome.into_result().unwrap_err();
    assert!(matches!(err, ChecksumError::UnreadableFile { .. }));
    assert!(err.to_string().contains("1/model.onnx"));
}

#[test]
fn legacy_sum_line_repository() {
    let repo = tempdir().unwrap();
    write_repo(repo.path());
    let digest = MD5.hash(&fs::read(repo.path().join("config.pbtxt")).unwrap());
    let params = vec![(
        "md5:config.pbtxt".to_string(),
        format!("{digest}  config.pbtxt"),
    )];

    let loc = Location::Filesystem(repo.path().to_path_buf());
    assert!(ChecksumAgent::new(ValueFormat::SumLine)
        .handle(Action::Load, &loc, params.clone())
        .is_pass());
    // The same value is not a bare digest.
    assert!(matches!(
        ChecksumAgent::new(ValueFormat::Bare).handle(Action::Load, &loc, params),
        Outcome::Fail(ChecksumError::MalformedDeclaration { .. })
    ));
}

#[test]
fn earlier_mismatch_wins_over_later_bad_parameter() {
    let repo = tempdir().unwrap();
    write_repo(repo.path());
    let mut params = manifest_for(repo.path(), &[("md5", "config.pbtxt")]).parameters;
    params[0].1 = "0".repeat(32);
    params.push(("md5-without-separator".to_string(), "x".to_string()));
    params.push(("sha999:1/model.onnx".to_string(), "x".to_string()));

    let loc = Location::Filesystem(repo.path().to_path_buf());
    match ChecksumAgent::default().handle(Action::Load, &loc, params) {
        Outcome::Fail(ChecksumError::DigestMismatch { path, .. }) => {
            assert_eq!(path, "config.pbtxt")
        }
        other => panic!("expected DigestMismatch, got {other:?}"),
    }
}

#[test]
fn earlier_missing_file_wins_over_later_unknown_algorithm() {
    let repo = tempdir().unwrap();
    write_repo(repo.path());
    let params = vec![
        ("md5:2/model.onnx".to_string(), "0".repeat(32)),
        ("sha999:config.pbtxt".to_string(), "x".to_string()),
    ];

    let loc = Location::Filesystem(repo.path().to_path_buf());
    match ChecksumAgent::default().handle(Action::Load, &loc, params) {
        Outcome::Fail(ChecksumError::UnreadableFile { path, .. }) => {
            assert_eq!(path, "2/model.onnx")
        }
        other => panic!("expected UnreadableFile, got {other:?}"),
    }
}

#[test]
fn passing_entries_then_unknown_algorithm() {
    let repo = tempdir().unwrap();
    write_repo(repo.path());
    let mut params = manifest_for(repo.path(), &[("md5", "config.pbtxt")]).parameters;
    params.push(("SHA999:1/model.onnx".to_string(), "x".to_string()));

    let loc = Location::Filesystem(repo.path().to_path_buf());
    match ChecksumAgent::default().handle(Action::Load, &loc, params) {
        Outcome::Fail(ChecksumError::UnsupportedAlgorithm { algorithm }) => {
            assert_eq!(algorithm, "SHA999")
        }
        other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
    }
}
