//! End-to-end generation against real working copies.

use std::path::Path;
use std::process::Command;

use buildinfo_core::{config, generate, read_build_info, write_build_info, BuildInfoError};
use buildinfo_git::GitRepository;
use chrono::{DateTime, Utc};

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Build Bot",
            "-c",
            "user.email=build@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_generate_outside_working_copy() {
    let dir = tempfile::tempdir().unwrap();
    let start = Utc::now();

    let repo = GitRepository::open(dir.path());
    let version = config::resolve_version(None);
    let generation = generate(&repo, &version, Utc::now());
    let info = generation.info;

    assert!(generation.git_error.is_some());
    assert_eq!(info.version, "1.0.0-dev");
    assert_eq!(info.commit_hash, config::FALLBACK_COMMIT_HASH);
    assert_eq!(info.branch, config::FALLBACK_BRANCH);
    assert_eq!(info.commit_message, config::FALLBACK_COMMIT_MESSAGE);

    let commit_date = parse_timestamp(&info.commit_date);
    let build_date = parse_timestamp(&info.build_date);
    // Millisecond formatting truncates, so compare at that granularity.
    assert!(build_date.timestamp_millis() >= start.timestamp_millis());
    assert!((build_date - commit_date).num_seconds().abs() < 5);
}

#[test]
fn test_generate_inside_working_copy() {
    if !GitRepository::is_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/release"]);
    git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "  Ship it  "]);

    let repo = GitRepository::new(dir.path()).unwrap();
    let version = config::resolve_version(Some("2.3.4".to_string()));
    let generation = generate(&repo, &version, Utc::now());

    assert!(generation.git_error.is_none());
    let info = generation.info;
    assert_eq!(info.version, "2.3.4");
    assert_eq!(info.commit_hash, git(dir.path(), &["rev-parse", "--short", "HEAD"]));
    assert_eq!(info.branch, "release");
    assert_eq!(info.commit_message, "Ship it");
    assert!(!info.is_fallback());
}

#[test]
fn test_successive_runs_differ_only_in_build_date() {
    let work = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let first_path = out.path().join("first.json");
    let second_path = out.path().join("second.json");

    let repo = GitRepository::open(work.path());
    let first = generate(&repo, "1.0.0-dev", Utc::now()).info;
    write_build_info(&first_path, &first).unwrap();
    let second = generate(&repo, "1.0.0-dev", Utc::now()).info;
    write_build_info(&second_path, &second).unwrap();

    let first = read_build_info(&first_path).unwrap();
    let second = read_build_info(&second_path).unwrap();

    assert!(parse_timestamp(&second.build_date) >= parse_timestamp(&first.build_date));
    assert_eq!(first.version, second.version);
    assert_eq!(first.commit_hash, second.commit_hash);
    assert_eq!(first.branch, second.branch);
    assert_eq!(first.commit_message, second.commit_message);
}

#[test]
fn test_missing_output_directory_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public").join("build-info.json");

    let info = generate(GitRepository::open(dir.path()), "1.0.0-dev", Utc::now()).info;
    let result = write_build_info(&path, &info);

    assert!(matches!(result, Err(BuildInfoError::MissingDirectory { .. })));
    assert!(!path.exists());
}
