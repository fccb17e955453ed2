//! Workspace version bumping
//!
//! Moves every package manifest of a project tree to one shared version.
//! The highest version found across all manifests is the baseline; it is
//! bumped once and the result written into every manifest, including ones
//! that were behind the baseline.
//!
//! The bump runs in two phases. [`plan_bump`] reads and validates every
//! manifest and computes the target version without touching the disk;
//! [`BumpPlan::apply`] then writes the manifests. A manifest that fails to
//! parse therefore aborts the run before anything is written. A write failure
//! halfway through `apply` leaves earlier manifests updated.
//!
//! ```no_run
//! use std::path::Path;
//! use bump_version::{plan_bump, BumpKind};
//!
//! let plan = plan_bump(Path::new("."), BumpKind::Minor)?;
//! for update in plan.apply()? {
//!     println!("{}: {} → {}", update.name, update.old_version, update.new_version);
//! }
//! # Ok::<(), bump_version::BumpError>(())
//! ```

pub mod error;
pub mod manifest;
pub mod version;

use std::path::Path;

pub use error::{BumpError, Result};
pub use manifest::{find_manifests, Manifest};
pub use version::{BumpKind, Version};

/// Result of bumping one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUpdate {
    pub name: String,
    pub old_version: Version,
    pub new_version: Version,
}

/// A validated bump that has not been written yet
#[derive(Debug)]
pub struct BumpPlan {
    pub kind: BumpKind,
    /// Highest version across all manifests
    pub baseline: Version,
    /// Version every manifest will be set to
    pub target: Version,
    manifests: Vec<Manifest>,
}

impl BumpPlan {
    /// Manifests that will be rewritten
    pub fn manifests(&self) -> &[Manifest] {
        &self.manifests
    }

    /// Write the target version into every manifest
    pub fn apply(self) -> Result<Vec<PackageUpdate>> {
        let target = self.target;
        let mut updates = Vec::with_capacity(self.manifests.len());

        for mut manifest in self.manifests {
            let old_version = manifest.version;
            manifest.write_version(target)?;
            tracing::debug!(path = %manifest.path.display(), "Updated manifest");
            updates.push(PackageUpdate {
                name: manifest.name,
                old_version,
                new_version: target,
            });
        }

        Ok(updates)
    }
}

/// Discover and validate every manifest under `root` and compute the target
pub fn plan_bump(root: &Path, kind: BumpKind) -> Result<BumpPlan> {
    let paths = find_manifests(root)?;
    tracing::debug!("Found {} manifest(s) under {}", paths.len(), root.display());

    let manifests = paths
        .iter()
        .map(|path| Manifest::load(path))
        .collect::<Result<Vec<_>>>()?;

    let baseline = manifests
        .iter()
        .map(|m| m.version)
        .max()
        .ok_or(BumpError::NoManifests)?;
    let target = baseline.bump(kind)?;

    Ok(BumpPlan {
        kind,
        baseline,
        target,
        manifests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_package(root: &Path, dir: &str, name: &str, version: &str) -> PathBuf {
        let dir = root.join("packages").join(dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("package.json");
        fs::write(
            &path,
            format!("{{\"name\": \"{}\", \"version\": \"{}\"}}", name, version),
        )
        .unwrap();
        path
    }

    fn version_of(path: &Path) -> String {
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        value["version"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_minor_bump_uses_highest_version() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_package(temp_dir.path(), "a", "pkg-a", "1.2.3");
        let b = write_package(temp_dir.path(), "b", "pkg-b", "1.2.5");

        let plan = plan_bump(temp_dir.path(), BumpKind::Minor).unwrap();
        assert_eq!(plan.baseline, Version::new(1, 2, 5));
        assert_eq!(plan.target, Version::new(1, 3, 0));
        assert_eq!(plan.manifests().len(), 2);

        let updates = plan.apply().unwrap();
        assert_eq!(
            updates,
            vec![
                PackageUpdate {
                    name: "pkg-a".to_string(),
                    old_version: Version::new(1, 2, 3),
                    new_version: Version::new(1, 3, 0),
                },
                PackageUpdate {
                    name: "pkg-b".to_string(),
                    old_version: Version::new(1, 2, 5),
                    new_version: Version::new(1, 3, 0),
                },
            ]
        );
        assert_eq!(version_of(&a), "1.3.0");
        assert_eq!(version_of(&b), "1.3.0");
    }

    #[test]
    fn test_patch_and_major_bumps() {
        let temp_dir = TempDir::new().unwrap();
        write_package(temp_dir.path(), "a", "pkg-a", "0.9.9");

        let plan = plan_bump(temp_dir.path(), BumpKind::Patch).unwrap();
        assert_eq!(plan.target.to_string(), "0.9.10");

        let plan = plan_bump(temp_dir.path(), BumpKind::Major).unwrap();
        assert_eq!(plan.target.to_string(), "1.0.0");
    }

    #[test]
    fn test_overflowing_bump_aborts_before_any_write() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_package(temp_dir.path(), "a", "pkg-a", "1.0.0");
        write_package(temp_dir.path(), "b", "pkg-b", "1.2.18446744073709551615");

        let err = plan_bump(temp_dir.path(), BumpKind::Patch).unwrap_err();
        assert!(matches!(err, BumpError::VersionOverflow { .. }));
        assert_eq!(version_of(&a), "1.0.0");
    }

    #[test]
    fn test_no_manifests() {
        let temp_dir = TempDir::new().unwrap();
        let err = plan_bump(temp_dir.path(), BumpKind::Patch).unwrap_err();
        assert!(matches!(err, BumpError::NoManifests));
    }

    #[test]
    fn test_invalid_manifest_aborts_before_any_write() {
        let temp_dir = TempDir::new().unwrap();
        let good = write_package(temp_dir.path(), "a", "pkg-a", "1.0.0");
        write_package(temp_dir.path(), "b", "pkg-b", "not-a-version");

        let err = plan_bump(temp_dir.path(), BumpKind::Patch).unwrap_err();
        assert_eq!(err.to_string(), "Invalid version format: not-a-version");
        assert_eq!(version_of(&good), "1.0.0");
    }

    #[test]
    fn test_missing_name_aborts_before_any_write() {
        let temp_dir = TempDir::new().unwrap();
        let good = write_package(temp_dir.path(), "a", "pkg-a", "1.0.0");
        let nameless = temp_dir.path().join("packages/b/package.json");
        fs::create_dir_all(nameless.parent().unwrap()).unwrap();
        fs::write(&nameless, r#"{"version": "2.0.0"}"#).unwrap();

        let err = plan_bump(temp_dir.path(), BumpKind::Patch).unwrap_err();
        assert!(matches!(err, BumpError::MissingName(_)));
        assert_eq!(version_of(&good), "1.0.0");
    }
}
