//! Build script for buildinfo-cli.
//!
//! Embeds the tool's own commit and build date for `--version`.

use buildinfo_git::GitRepository;

fn main() {
    let git_hash = GitRepository::open(".")
        .commit_hash()
        .unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=GIT_HASH={}", git_hash);

    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/heads/");
}
