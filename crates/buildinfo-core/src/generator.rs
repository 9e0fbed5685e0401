//! Build info generation with all-or-nothing git fallback.

use buildinfo_git::{GitError, MetadataSource};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::BuildInfo;

/// Outcome of one generator run.
#[derive(Debug)]
pub struct Generation {
    /// The assembled record.
    pub info: BuildInfo,
    /// Why git metadata was replaced by fallbacks, if it was.
    pub git_error: Option<GitError>,
}

impl Generation {
    /// Whether the git fields came from fallbacks.
    pub fn used_fallback(&self) -> bool {
        self.git_error.is_some()
    }
}

/// Assemble a build info record.
///
/// Queries `source` once. If the query fails for any reason, all four git
/// fields fall back together and the error is returned alongside the record
/// rather than propagated. `build_date` is always `now`.
pub fn generate<S: MetadataSource>(source: S, version: &str, now: DateTime<Utc>) -> Generation {
    match source.query() {
        Ok(metadata) => {
            debug!(
                commit = %metadata.commit_hash,
                branch = %metadata.branch,
                "repository metadata loaded"
            );
            Generation {
                info: BuildInfo::from_metadata(version, metadata, now),
                git_error: None,
            }
        }
        Err(e) => {
            warn!(error = %e, "could not read git info, using fallback values");
            Generation {
                info: BuildInfo::fallback(version, now),
                git_error: Some(e),
            }
        }
    }
}
