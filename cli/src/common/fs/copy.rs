//! # nail Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module provides the two copy operations the scaffolder relies on:
//!
//! - **`copy_directory_contents`**: Copies everything inside one directory into
//!   another using `fs_extra`. Used to stage templates that live on local disk.
//! - **`copy_tree_excluding`**: Walks a staged template with `walkdir` and copies
//!   it into the project directory, skipping every path on an `ExclusionList`.
//!
//! ## Exclusion semantics
//!
//! Exclusions are template-relative paths compared by set membership after
//! normalization (`./cypress/` and `cypress` are the same entry). Matching is
//! exact, never prefix or glob based: `cypress` does not exclude
//! `cypress.json`. When a directory is excluded its whole subtree is skipped.
//!
//! Symbolic links inside the template are followed, so the project receives
//! regular files with the link targets' contents.
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::core::error::{NailError, Result};
use anyhow::Context;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Template-relative paths omitted from a generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    entries: BTreeSet<PathBuf>,
}

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a relative path. Entries that climb out of the template (`..`),
    /// absolute paths and empty paths are ignored with a warning.
    pub fn add(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match normalize(path) {
            Some(normalized) => {
                self.entries.insert(normalized);
            }
            None => warn!("Ignoring unusable exclusion entry {:?}", path),
        }
    }

    pub fn contains(&self, relative: &Path) -> bool {
        normalize(relative).is_some_and(|p| self.entries.contains(&p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }
}

fn normalize(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!normalized.as_os_str().is_empty()).then_some(normalized)
}

/// Copies the contents of `source` into `target` (not `source` itself).
///
/// Existing files in `target` are overwritten; `target` is created if needed.
pub fn copy_directory_contents(source: &Path, target: &Path) -> Result<()> {
    if !source.is_dir() {
        anyhow::bail!("Source {:?} is not a directory", source);
    }
    ensure_dir_exists(target)?;

    let mut options = fs_extra::dir::CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;

    fs_extra::dir::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to copy dir {:?} to {:?}", source, target))
    })?;
    info!("Copied contents of {:?} into {:?}", source, target);
    Ok(())
}

/// Recursively copies `source` into `target`, skipping excluded paths.
///
/// Returns the number of files written. `target` must not be `source` or lie
/// inside it; that case is rejected before anything is created.
pub fn copy_tree_excluding(source: &Path, target: &Path, exclusions: &ExclusionList) -> Result<usize> {
    info!("Copying {:?} to {:?}", source, target);
    let resolved_source = resolve_existing_prefix(source)?;
    let resolved_target = resolve_existing_prefix(target)?;
    if resolved_target.starts_with(&resolved_source) {
        anyhow::bail!(NailError::FileSystem(format!(
            "Source and destination must not be the same: cannot copy {:?} into {:?}",
            source, target
        )));
    }
    ensure_dir_exists(target)?;

    let walker = WalkDir::new(source)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let keep = entry
                .path()
                .strip_prefix(source)
                .map(|relative| !exclusions.contains(relative))
                .unwrap_or(true);
            if !keep {
                debug!("Excluded {:?}", entry.path());
            }
            keep
        });

    let mut copied = 0;
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk template tree {:?}", source))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("{:?} is outside {:?}", entry.path(), source))?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir_exists(&destination)?;
        } else {
            if let Some(parent) = destination.parent() {
                ensure_dir_exists(parent)?;
            }
            fs::copy(entry.path(), &destination).with_context(|| {
                format!("Failed to copy {:?} to {:?}", entry.path(), destination)
            })?;
            copied += 1;
        }
    }
    info!("Copied {} file(s) into {:?}", copied, target);
    Ok(copied)
}

/// Canonicalizes the longest existing ancestor of `path` and re-appends the
/// components that do not exist yet.
fn resolve_existing_prefix(path: &Path) -> Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(resolved) => {
                return Ok(missing.iter().rev().fold(resolved, |acc, part| acc.join(part)));
            }
            Err(_) => match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) => {
                    missing.push(name.to_os_string());
                    existing = if parent.as_os_str().is_empty() {
                        Path::new(".")
                    } else {
                        parent
                    };
                }
                _ => {
                    return std::path::absolute(path)
                        .with_context(|| format!("Failed to resolve path {:?}", path))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_exclusion_normalization() {
        let mut list = ExclusionList::new();
        list.add("./cypress/");
        list.add("../outside");
        list.add("/etc");
        list.add("");

        assert!(list.contains(Path::new("cypress")));
        assert!(list.contains(Path::new("./cypress")));
        assert!(!list.contains(Path::new("cypress.json")));
        assert_eq!(list.iter().count(), 1);
    }

    #[test]
    fn test_copy_tree_excluding_skips_files_and_subtrees() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("staging");
        let target = temp.path().join("out");
        write(&source, "package.json", "{}");
        write(&source, "LICENSE", "MIT");
        write(&source, "src/main.js", "console.log(1)");
        write(&source, "cypress/integration/spec.js", "it()");
        write(&source, "cypress.json", "{}");
        write(&source, ".gitignore", "node_modules");

        let mut exclusions = ExclusionList::new();
        exclusions.add("package.json");
        exclusions.add("LICENSE");
        exclusions.add("cypress");

        let copied = copy_tree_excluding(&source, &target, &exclusions)?;

        assert_eq!(copied, 3);
        assert!(target.join("src/main.js").is_file());
        assert!(target.join(".gitignore").is_file());
        assert!(target.join("cypress.json").is_file());
        assert!(!target.join("package.json").exists());
        assert!(!target.join("LICENSE").exists());
        assert!(!target.join("cypress").exists());
        Ok(())
    }

    #[test]
    fn test_copy_tree_excluding_nested_entry() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("staging");
        let target = temp.path().join("out");
        write(&source, "docs/public.md", "a");
        write(&source, "docs/internal/notes.md", "b");

        let mut exclusions = ExclusionList::new();
        exclusions.add("docs/internal");

        copy_tree_excluding(&source, &target, &exclusions)?;
        assert!(target.join("docs/public.md").is_file());
        assert!(!target.join("docs/internal").exists());
        Ok(())
    }

    #[test]
    fn test_copy_tree_overwrites_existing_files() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("staging");
        let target = temp.path().join("out");
        write(&source, "README.md", "new");
        write(&target, "README.md", "old");
        write(&target, "keep.txt", "mine");

        copy_tree_excluding(&source, &target, &ExclusionList::new())?;
        assert_eq!(fs::read_to_string(target.join("README.md"))?, "new");
        assert_eq!(fs::read_to_string(target.join("keep.txt"))?, "mine");
        Ok(())
    }

    #[test]
    fn test_copy_tree_rejects_target_inside_source() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("work/tmp");
        write(&source, "a.txt", "AAAA");

        for target in [source.clone(), source.join("tmp"), temp.path().join("work/./tmp")] {
            let err = copy_tree_excluding(&source, &target, &ExclusionList::new()).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<NailError>(),
                Some(NailError::FileSystem(_))
            ));
        }
        assert_eq!(fs::read_to_string(source.join("a.txt"))?, "AAAA");
        assert!(!source.join("tmp").exists());

        // A sibling whose name merely starts with the source name is fine.
        let sibling = temp.path().join("work/tmp2");
        copy_tree_excluding(&source, &sibling, &ExclusionList::new())?;
        assert_eq!(fs::read_to_string(sibling.join("a.txt"))?, "AAAA");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_follows_symlinks() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("staging");
        let target = temp.path().join("out");
        let shared = temp.path().join("shared.txt");
        fs::write(&shared, "shared content")?;
        fs::create_dir_all(&source)?;
        std::os::unix::fs::symlink(&shared, source.join("linked.txt"))?;

        copy_tree_excluding(&source, &target, &ExclusionList::new())?;

        let copied = target.join("linked.txt");
        assert!(!fs::symlink_metadata(&copied)?.file_type().is_symlink());
        assert_eq!(fs::read_to_string(copied)?, "shared content");
        Ok(())
    }

    #[test]
    fn test_copy_directory_contents() -> Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("template");
        let target = temp.path().join("staging");
        write(&source, "package.json", "{}");
        write(&source, "src/index.js", "");

        copy_directory_contents(&source, &target)?;
        assert!(target.join("package.json").is_file());
        assert!(target.join("src/index.js").is_file());
        assert!(!target.join("template").exists());
        Ok(())
    }
}
