//! Configuration for build info generation.
//!
//! Environment variables are read once at the command-line edge and passed
//! into [`generate`](crate::generate) explicitly; nothing in this crate
//! reads the process environment on its own.
//!
//! # Environment Variables
//!
//! - `BUILD_VERSION`: Version string stamped into the record
//! - `BUILD_INFO_OUTPUT`: Override the output file path

/// Environment variable for the version string.
pub const BUILD_VERSION_ENV: &str = "BUILD_VERSION";

/// Environment variable for a custom output path.
pub const OUTPUT_ENV: &str = "BUILD_INFO_OUTPUT";

/// Version used when `BUILD_VERSION` is unset or empty.
pub const DEFAULT_VERSION: &str = "1.0.0-dev";

/// Output file, relative to the project root.
pub const DEFAULT_OUTPUT_PATH: &str = "public/build-info.json";

// Values substituted when the git query fails.
pub const FALLBACK_COMMIT_HASH: &str = "unknown";
pub const FALLBACK_BRANCH: &str = "unknown";
pub const FALLBACK_COMMIT_MESSAGE: &str = "No git info";

/// Resolve the version string, falling back to [`DEFAULT_VERSION`].
///
/// An empty value counts as unset.
pub fn resolve_version(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}
