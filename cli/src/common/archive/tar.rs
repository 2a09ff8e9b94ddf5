//! # nail TAR Archive Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Hosting services serve repository snapshots as gzipped tarballs whose
//! entries all live under one top-level directory (`nail-cli-template-master/`
//! and the like). This module unpacks such an archive into the staging
//! directory, dropping leading path components so the template root lands
//! directly in the destination.
//!
//! ## Architecture
//!
//! The module leverages the `flate2` crate for Gzip decoding and the `tar`
//! crate for reading entries.
//!
//! - Global and per-file PAX headers are metadata, not content, and are skipped.
//! - Entries whose path would escape the destination (`..`, absolute paths)
//!   abort the extraction with `NailError::Archive`.
//! - Entries that consist only of stripped components (the top-level directory
//!   itself) are skipped.
//!
use crate::core::error::{NailError, Result}; // Use the standard Result type from the core module
use anyhow::Context; // For adding contextual information to errors
use flate2::read::GzDecoder;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tar::{Archive, EntryType};
use tracing::{debug, info};

/// # Unpack Gzipped TAR (`unpack_tar_gz`)
///
/// Extracts the `.tar.gz` held in `bytes` into `dest`, removing the first
/// `strip_components` path components from every entry.
///
/// ## Returns
///
/// * `Result<usize>` - The number of entries written.
///
/// ## Errors
///
/// Returns an `Err` if the data is not a valid gzipped tarball, an entry path
/// is unsafe, or writing into `dest` fails.
pub fn unpack_tar_gz(bytes: &[u8], dest: &Path, strip_components: usize) -> Result<usize> {
    let mut archive = Archive::new(GzDecoder::new(bytes));
    let entries = archive
        .entries()
        .map_err(|e| NailError::Archive(format!("cannot read archive: {}", e)))?;

    let mut written = 0;
    for entry in entries {
        let mut entry =
            entry.map_err(|e| NailError::Archive(format!("corrupt archive entry: {}", e)))?;

        let entry_type = entry.header().entry_type();
        if matches!(entry_type, EntryType::XGlobalHeader | EntryType::XHeader) {
            continue;
        }

        let raw_path = entry
            .path()
            .map_err(|e| NailError::Archive(format!("unreadable entry path: {}", e)))?
            .into_owned();
        let Some(relative) = stripped_path(&raw_path, strip_components)? else {
            debug!("Skipping stripped entry {:?}", raw_path);
            continue;
        };

        let target = dest.join(&relative);
        if entry_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {:?}", target))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
            entry
                .unpack(&target)
                .with_context(|| format!("Failed to unpack {:?}", target))?;
        }
        written += 1;
    }

    info!("Unpacked {} archive entries into {:?}", written, dest);
    Ok(written)
}

/// Drops the first `strip` normal components of an archive path.
///
/// Returns `Ok(None)` when nothing is left, and an error for paths that could
/// escape the destination.
fn stripped_path(path: &Path, strip: usize) -> Result<Option<PathBuf>> {
    let mut remaining = PathBuf::new();
    let mut skipped = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) if skipped < strip => skipped += 1,
            Component::Normal(part) => remaining.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                anyhow::bail!(NailError::Archive(format!(
                    "entry {:?} points outside the destination",
                    path
                )));
            }
        }
    }
    Ok((!remaining.as_os_str().is_empty()).then_some(remaining))
}
