//! Git metadata queries for buildinfo.
//!
//! This crate reads the handful of facts a build stamp needs from a git
//! working copy:
//! - Abbreviated HEAD commit id
//! - Checked-out branch name
//! - Last commit date and message
//!
//! Callers depend on the [`MetadataSource`] trait so that fallback logic can
//! be exercised without a real repository.
//!
//! # Example
//!
//! ```no_run
//! use buildinfo_git::{GitRepository, MetadataSource};
//!
//! let repo = GitRepository::new(".").expect("git not found");
//! let metadata = repo.query().unwrap();
//! println!("{} on {}", metadata.commit_hash, metadata.branch);
//! ```
//!
//! # Checking git Availability
//!
//! ```
//! use buildinfo_git::GitRepository;
//!
//! if GitRepository::is_available() {
//!     println!("git is available");
//! } else {
//!     println!("git not found, build info will use fallbacks");
//! }
//! ```

pub mod error;
pub mod metadata;
pub mod repository;

pub use error::{GitError, Result};
pub use metadata::{MetadataSource, RepositoryMetadata};
pub use repository::GitRepository;
