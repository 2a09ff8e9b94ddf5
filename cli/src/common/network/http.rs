//! # nail HTTP Downloads (`common::network::http`)
//!
//! File: cli/src/common/network/http.rs
//!
//! A single GET that returns the response body. There are deliberately no
//! retries, mirrors or explicit timeouts: a failed download is reported once
//! and the user reruns the command.
//!
use crate::core::error::{NailError, Result};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("nail/", env!("CARGO_PKG_VERSION"));

/// Downloads `url` into memory.
///
/// Transport errors and non-success HTTP statuses both map to `NailError::Fetch`.
pub async fn download(url: &str) -> Result<Vec<u8>> {
    info!("Downloading {}", url);
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| NailError::Fetch(format!("cannot build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| NailError::Fetch(format!("{}: {}", url, e)))?;

    let status = response.status();
    debug!("Response status for {}: {}", url, status);
    if !status.is_success() {
        anyhow::bail!(NailError::Fetch(format!("{} responded with {}", url, status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| NailError::Fetch(format!("{}: {}", url, e)))?;
    info!("Downloaded {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_download_connection_refused_is_fetch_error() {
        // Port 9 (discard) is closed on test machines; the connection is refused.
        let err = download("http://127.0.0.1:9/template.tar.gz")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NailError>(),
            Some(NailError::Fetch(_))
        ));
    }

    #[tokio::test]
    async fn test_download_invalid_url_is_fetch_error() {
        let err = download("not a url").await.unwrap_err();
        assert!(err.to_string().contains("Template download failed"));
    }
}
