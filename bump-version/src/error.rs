//! Errors raised while planning or applying a bump

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::version::{BumpKind, Version};

pub type Result<T> = std::result::Result<T, BumpError>;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("Invalid version format: {0}")]
    InvalidVersion(String),

    #[error("Invalid version type \"{0}\"")]
    InvalidBumpKind(String),

    #[error("Cannot apply {kind} bump to {version}")]
    VersionOverflow { version: Version, kind: BumpKind },

    #[error("Package at {} is missing a name field", .0.display())]
    MissingName(PathBuf),

    #[error("Package at {} is missing a version field", .0.display())]
    MissingVersion(PathBuf),

    #[error("No package.json files found in packages directory")]
    NoManifests,

    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
