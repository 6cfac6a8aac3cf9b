//! Snapshot transports: local run directories or a remote URL.

use anyhow::Result;
use reqwest::header;
use std::path::{Path, PathBuf};
use tokio::time::{timeout, Duration};
use tracing::{debug, info};
use url::Url;

use super::error::IssueLoadError;
use super::types::{SnapshotSelector, CURRENT_SNAPSHOT, META_FILE_NAME, REQUEST_TIMEOUT};
use crate::{TARGET_SNAPSHOT, TARGET_WEB_REQUEST};

#[derive(Debug, Clone)]
enum Transport {
    Local {
        base_dir: PathBuf,
        selector: SnapshotSelector,
    },
    Remote {
        url: Url,
        client: reqwest::Client,
    },
}

/// Where the issue snapshot is read from, plus the deadline for a single read.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    transport: Transport,
    timeout: Duration,
}

impl SnapshotSource {
    /// Read `<base_dir>/<run>/meta.json`, the run picked by `selector`.
    pub fn local(base_dir: impl Into<PathBuf>, selector: SnapshotSelector) -> Self {
        SnapshotSource {
            transport: Transport::Local {
                base_dir: base_dir.into(),
                selector,
            },
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Fetch the snapshot JSON from `url`. Works against the `/api/issues` route
    /// of another instance as well as a statically served `meta.json`.
    pub fn remote(url: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(SnapshotSource {
            transport: Transport::Remote { url, client },
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Human-readable location, used in logs and the console viewer.
    pub fn describe(&self) -> String {
        match &self.transport {
            Transport::Local { base_dir, selector } => {
                format!("{} [{}]", base_dir.display(), selector)
            }
            Transport::Remote { url, .. } => url.to_string(),
        }
    }

    /// Read the raw snapshot bytes. Fails with `SourceUnavailable` on any I/O or
    /// transport problem, including running past the configured timeout.
    pub async fn read(&self) -> Result<Vec<u8>, IssueLoadError> {
        let read = async {
            match &self.transport {
                Transport::Local { base_dir, selector } => read_local(base_dir, selector).await,
                Transport::Remote { url, client } => {
                    read_remote(client, url, self.timeout).await
                }
            }
        };

        match timeout(self.timeout, read).await {
            Ok(result) => result,
            Err(_) => Err(IssueLoadError::source_unavailable(
                self.describe(),
                format!("read timed out after {} seconds", self.timeout.as_secs()),
            )),
        }
    }
}

async fn read_local(base_dir: &Path, selector: &SnapshotSelector) -> Result<Vec<u8>, IssueLoadError> {
    let run_dir = resolve_run_dir(base_dir, selector).await?;
    let path = run_dir.join(META_FILE_NAME);

    debug!(target: TARGET_SNAPSHOT, "Reading snapshot from {}", path.display());

    tokio::fs::read(&path)
        .await
        .map_err(|e| IssueLoadError::source_unavailable(path.display(), e))
}

async fn resolve_run_dir(
    base_dir: &Path,
    selector: &SnapshotSelector,
) -> Result<PathBuf, IssueLoadError> {
    match selector {
        SnapshotSelector::Current => Ok(base_dir.join(CURRENT_SNAPSHOT)),
        SnapshotSelector::Named(name) => Ok(base_dir.join(name)),
        SnapshotSelector::Latest => latest_run_dir(base_dir).await,
    }
}

/// Pick the run directory with the greatest name under `base_dir`.
///
/// `current` is skipped: it mirrors one of the runs and would otherwise always
/// sort last against timestamp-named runs.
async fn latest_run_dir(base_dir: &Path) -> Result<PathBuf, IssueLoadError> {
    let unavailable = |e: std::io::Error| IssueLoadError::source_unavailable(base_dir.display(), e);

    let mut entries = tokio::fs::read_dir(base_dir).await.map_err(unavailable)?;
    let mut latest: Option<String> = None;

    while let Some(entry) = entries.next_entry().await.map_err(unavailable)? {
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name == CURRENT_SNAPSHOT {
            continue;
        }

        if latest.as_deref().map_or(true, |current| name.as_str() > current) {
            latest = Some(name);
        }
    }

    match latest {
        Some(name) => {
            debug!(target: TARGET_SNAPSHOT, "Latest snapshot run is {}", name);
            Ok(base_dir.join(name))
        }
        None => Err(IssueLoadError::source_unavailable(
            base_dir.display(),
            "no snapshot runs found",
        )),
    }
}

async fn read_remote(
    client: &reqwest::Client,
    url: &Url,
    request_timeout: Duration,
) -> Result<Vec<u8>, IssueLoadError> {
    info!(target: TARGET_WEB_REQUEST, "Fetching snapshot from {}", url);

    let response = client
        .get(url.clone())
        .header(header::ACCEPT, "application/json")
        .timeout(request_timeout)
        .send()
        .await
        .map_err(|e| IssueLoadError::source_unavailable(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IssueLoadError::source_unavailable(
            url,
            format!("HTTP status {}", status),
        ));
    }

    debug!(target: TARGET_WEB_REQUEST, "Request to {} succeeded with status {}", url, status);

    let body = response
        .bytes()
        .await
        .map_err(|e| IssueLoadError::source_unavailable(url, e))?;

    Ok(body.to_vec())
}
