//! Build info generation for buildinfo.
//!
//! This crate assembles a [`BuildInfo`] record from git metadata, a version
//! string and the current time, and persists it as pretty-printed JSON.
//!
//! # Example
//!
//! ```no_run
//! use buildinfo_core::{config, generate, write_build_info};
//! use buildinfo_git::GitRepository;
//! use std::path::Path;
//!
//! let repo = GitRepository::open(".");
//! let version = config::resolve_version(std::env::var(config::BUILD_VERSION_ENV).ok());
//! let generation = generate(&repo, &version, chrono::Utc::now());
//!
//! write_build_info(Path::new(config::DEFAULT_OUTPUT_PATH), &generation.info).unwrap();
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;

pub use build_info::BuildInfo;
pub use error::{BuildInfoError, Result};
pub use generator::{generate, Generation};
pub use output::{read_build_info, write_build_info};
