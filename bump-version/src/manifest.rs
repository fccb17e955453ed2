//! Package manifest discovery and persistence
//!
//! Manifests are `package.json` files living somewhere below a `packages`
//! directory of the project tree. `node_modules` and `dist` directories are
//! never entered.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{BumpError, Result};
use crate::version::Version;

pub const MANIFEST_FILE: &str = "package.json";
const PACKAGES_DIR: &str = "packages";
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist"];

/// A parsed manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path to the package.json file
    pub path: PathBuf,
    pub name: String,
    pub version: Version,
    /// Full document, key order preserved
    document: Map<String, Value>,
}

impl Manifest {
    /// Read and validate a manifest
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| BumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Map<String, Value> =
            serde_json::from_str(&content).map_err(|source| BumpError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let name = match document.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(BumpError::MissingName(path.to_path_buf())),
        };
        let version: Version = document
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| BumpError::MissingVersion(path.to_path_buf()))?
            .parse()?;

        Ok(Self {
            path: path.to_path_buf(),
            name,
            version,
            document,
        })
    }

    /// Write the manifest back with a new version
    ///
    /// Output is pretty-printed with two-space indentation and a trailing
    /// newline; every other field is kept as read.
    pub fn write_version(&mut self, version: Version) -> Result<()> {
        self.document
            .insert("version".to_string(), Value::String(version.to_string()));

        let mut content =
            serde_json::to_string_pretty(&self.document).map_err(|source| BumpError::Json {
                path: self.path.clone(),
                source,
            })?;
        content.push('\n');

        fs::write(&self.path, content).map_err(|source| BumpError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.version = version;
        Ok(())
    }
}

/// Find every manifest below a `packages` directory under `root`
///
/// Results are sorted by path.
pub fn find_manifests(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk_dir(root, root, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk_dir(root: &Path, dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|source| BumpError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| BumpError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| BumpError::Io {
            path: path.clone(),
            source,
        })?;
        let name = entry.file_name();

        if file_type.is_dir() {
            if !SKIPPED_DIRS.iter().any(|skipped| name == *skipped) {
                walk_dir(root, &path, found)?;
            }
        } else if name == MANIFEST_FILE && is_below_packages(root, dir) {
            found.push(path);
        }
    }

    Ok(())
}

/// Whether `dir` is nested inside (not equal to) a `packages` directory
fn is_below_packages(root: &Path, dir: &Path) -> bool {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .any(|c| c.as_os_str() == PACKAGES_DIR)
        })
        .unwrap_or(false)
}
