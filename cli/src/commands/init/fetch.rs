//! # nail Init: Template Fetch Stage
//!
//! File: cli/src/commands/init/fetch.rs
//!
//! ## Overview
//!
//! First stage of `nail init`. Replaces the staging directory with a fresh
//! copy of the configured template:
//!
//! 1. The staging directory is emptied (created if missing).
//! 2. A spinner shows "The project template downloading..." while the
//!    template is fetched.
//! 3. Hosted and direct references are downloaded as a gzipped tarball and
//!    unpacked with the top-level folder stripped. Local references are copied.
//!
//! On success a green notice is printed. On failure the error, a generic
//! failure notice and a retry suggestion are printed, and a `NailError::Fetch`
//! is returned so nothing else runs. The staging directory may be left
//! partially populated; the next run resets it.
//!
use crate::common::archive::tar::unpack_tar_gz;
use crate::common::fs::copy::copy_directory_contents;
use crate::common::fs::io::reset_dir;
use crate::common::network::http::download;
use crate::common::ui::{self, progress};
use crate::core::error::{NailError, Result};
use crate::core::template_ref::TemplateRef;
use anyhow::Context;
use std::path::Path;
use tracing::{error, info};

pub const DOWNLOADING_MESSAGE: &str = "The project template downloading...";
pub const DOWNLOADED_MESSAGE: &str = "The project template was downloaded successfully.";
pub const FAILED_MESSAGE: &str = "The project template download failed.";
pub const RETRY_ADVICE: &str = "Please check the network and try to download again.";

/// Hosted archives wrap the repository in one top-level folder.
const ARCHIVE_STRIP_COMPONENTS: usize = 1;

/// Stages `template` into `staging_dir`.
pub async fn fetch_template(template: &TemplateRef, staging_dir: &Path) -> Result<()> {
    info!("Fetching template {} into {:?}", template, staging_dir);

    let spinner = progress::spinner(DOWNLOADING_MESSAGE);
    let outcome = stage(template, staging_dir).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(()) => {
            info!("Template staged in {:?}", staging_dir);
            println!("{}\n", ui::success(DOWNLOADED_MESSAGE));
            Ok(())
        }
        Err(e) => {
            error!("Template fetch failed: {:?}", e);
            let e = into_fetch_error(e);
            eprintln!("{}", ui::failure(&e.to_string()));
            eprintln!("\n{}\n", ui::failure(FAILED_MESSAGE));
            eprintln!("{}", ui::advice(RETRY_ADVICE));
            Err(e)
        }
    }
}

async fn stage(template: &TemplateRef, staging_dir: &Path) -> Result<()> {
    reset_dir(staging_dir)?;

    if let TemplateRef::Local(path) = template {
        return copy_directory_contents(path, staging_dir)
            .with_context(|| format!("Failed to copy local template {}", path.display()));
    }

    let url = template
        .archive_url()
        .ok_or_else(|| anyhow::anyhow!("Template {} has no archive URL", template))?;
    let bytes = download(&url).await?;
    let entries = unpack_tar_gz(&bytes, staging_dir, ARCHIVE_STRIP_COMPONENTS)?;
    info!("Unpacked {} entries from {}", entries, url);
    Ok(())
}

/// Every failure of this stage surfaces as `NailError::Fetch`.
fn into_fetch_error(e: anyhow::Error) -> anyhow::Error {
    let already_fetch = e
        .downcast_ref::<NailError>()
        .is_some_and(|n| matches!(n, NailError::Fetch(_)));
    if already_fetch {
        e
    } else {
        NailError::Fetch(format!("{:#}", e)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn is_fetch_error(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<NailError>(), Some(NailError::Fetch(_)))
    }

    #[tokio::test]
    async fn test_local_template_replaces_stale_staging_content() {
        let temp = tempdir().unwrap();
        let template = temp.path().join("template");
        fs::create_dir_all(template.join("src")).unwrap();
        fs::write(template.join("package.json"), "{}").unwrap();
        fs::write(template.join("src/index.js"), "// entry").unwrap();

        let staging = temp.path().join("tmp");
        fs::create_dir_all(&staging).unwrap();
        fs::write(staging.join("leftover.txt"), "old run").unwrap();

        fetch_template(&TemplateRef::Local(template), &staging)
            .await
            .unwrap();

        assert!(staging.join("package.json").is_file());
        assert!(staging.join("src/index.js").is_file());
        assert!(!staging.join("leftover.txt").exists());
    }

    #[tokio::test]
    async fn test_missing_local_template_is_fetch_error() {
        let temp = tempdir().unwrap();
        let staging = temp.path().join("tmp");

        let err = fetch_template(
            &TemplateRef::Local(PathBuf::from("/nonexistent/nail/template")),
            &staging,
        )
        .await
        .unwrap_err();

        assert!(is_fetch_error(&err));
        assert!(staging.is_dir(), "staging is reset before the copy is attempted");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let temp = tempdir().unwrap();
        let template = TemplateRef::Direct("http://127.0.0.1:9/template.tar.gz".into());

        let err = fetch_template(&template, &temp.path().join("tmp"))
            .await
            .unwrap_err();

        assert!(is_fetch_error(&err));
        assert_eq!(err.to_string().matches("Template download failed").count(), 1);
    }

    #[test]
    fn test_into_fetch_error_wraps_other_errors_once() {
        let wrapped = into_fetch_error(anyhow::anyhow!("disk full"));
        assert!(is_fetch_error(&wrapped));
        assert_eq!(wrapped.to_string(), "Template download failed: disk full");

        let rewrapped = into_fetch_error(wrapped);
        assert_eq!(rewrapped.to_string(), "Template download failed: disk full");
    }
}
