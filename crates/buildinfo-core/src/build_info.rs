//! The build info record.

use buildinfo_git::RepositoryMetadata;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{FALLBACK_BRANCH, FALLBACK_COMMIT_HASH, FALLBACK_COMMIT_MESSAGE};
use crate::Result;

/// Metadata stamped into `build-info.json`.
///
/// Field order is the order written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Version from configuration.
    pub version: String,

    /// Abbreviated commit id, or `unknown`.
    pub commit_hash: String,

    /// Checked-out branch, or `unknown`.
    pub branch: String,

    /// Last commit date, or the generation time when git is unavailable.
    pub commit_date: String,

    /// Last commit message, or `No git info`.
    pub commit_message: String,

    /// When this record was generated.
    pub build_date: String,
}

impl BuildInfo {
    /// Build a record from real repository metadata.
    pub fn from_metadata(
        version: impl Into<String>,
        metadata: RepositoryMetadata,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            version: version.into(),
            commit_hash: metadata.commit_hash,
            branch: metadata.branch,
            commit_date: metadata.commit_date,
            commit_message: metadata.commit_message,
            build_date: iso_timestamp(now),
        }
    }

    /// Build a record with every git field set to its fallback.
    pub fn fallback(version: impl Into<String>, now: DateTime<Utc>) -> Self {
        let timestamp = iso_timestamp(now);
        Self {
            version: version.into(),
            commit_hash: FALLBACK_COMMIT_HASH.to_string(),
            branch: FALLBACK_BRANCH.to_string(),
            commit_date: timestamp.clone(),
            commit_message: FALLBACK_COMMIT_MESSAGE.to_string(),
            build_date: timestamp,
        }
    }

    /// Whether the git fields hold fallback values.
    pub fn is_fallback(&self) -> bool {
        self.commit_hash == FALLBACK_COMMIT_HASH
            && self.branch == FALLBACK_BRANCH
            && self.commit_message == FALLBACK_COMMIT_MESSAGE
    }

    /// Pretty-printed JSON with 2-space indentation, as written to disk.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format a timestamp like `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
