//! Repository metadata and the source trait.

use crate::Result;

/// The commit facts read from a working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryMetadata {
    /// Abbreviated HEAD commit id.
    pub commit_hash: String,
    /// Checked-out branch (`HEAD` when detached).
    pub branch: String,
    /// Committer date of the last commit, in git's ISO-like format.
    pub commit_date: String,
    /// Full message of the last commit, trimmed.
    pub commit_message: String,
}

/// Something that can report the current commit state.
///
/// A query either yields all four values or fails as a whole.
pub trait MetadataSource {
    /// Query the current repository metadata.
    fn query(&self) -> Result<RepositoryMetadata>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn query(&self) -> Result<RepositoryMetadata> {
        (**self).query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GitError;

    struct Fixed;

    impl MetadataSource for Fixed {
        fn query(&self) -> Result<RepositoryMetadata> {
            Ok(RepositoryMetadata {
                commit_hash: "abc1234".to_string(),
                branch: "main".to_string(),
                commit_date: "2024-05-01 10:00:00 +0000".to_string(),
                commit_message: "Initial commit".to_string(),
            })
        }
    }

    struct Broken;

    impl MetadataSource for Broken {
        fn query(&self) -> Result<RepositoryMetadata> {
            Err(GitError::NotFound)
        }
    }

    fn hash_of<S: MetadataSource>(source: S) -> Result<String> {
        source.query().map(|m| m.commit_hash)
    }

    #[test]
    fn test_reference_forwards_query() {
        let source = Fixed;
        assert_eq!(hash_of(&source).unwrap(), "abc1234");
    }

    #[test]
    fn test_trait_object_forwards_error() {
        let source: &dyn MetadataSource = &Broken;
        assert!(matches!(hash_of(source), Err(GitError::NotFound)));
    }
}
