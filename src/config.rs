//! Command-line and environment configuration for the snapshot location.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tokio::time::Duration;
use url::Url;

use crate::issues::{IssueProvider, SnapshotSelector, SnapshotSource};

#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs {
    /// Directory holding the snapshot runs (`<dir>/<run>/meta.json`)
    #[arg(
        long,
        env = "POLMAP_SNAPSHOT_DIR",
        default_value = "data/issue_clusters",
        global = true
    )]
    pub snapshot_dir: PathBuf,

    /// Run to read: `current`, `latest`, or a run directory name
    #[arg(long, env = "POLMAP_SNAPSHOT", default_value = "current", global = true)]
    pub snapshot: SnapshotSelector,

    /// Fetch the snapshot from this URL instead of the snapshot directory
    #[arg(long, env = "POLMAP_SNAPSHOT_URL", global = true)]
    pub snapshot_url: Option<Url>,

    /// Give up on a snapshot read after this many seconds
    #[arg(
        long,
        env = "POLMAP_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_secs: u64,
}

impl SnapshotArgs {
    /// A remote URL, when given, wins over the local directory settings.
    pub fn snapshot_source(&self) -> Result<SnapshotSource> {
        let source = match &self.snapshot_url {
            Some(url) => SnapshotSource::remote(url.clone())?,
            None => SnapshotSource::local(&self.snapshot_dir, self.snapshot.clone()),
        };
        Ok(source.with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    pub fn provider(&self) -> Result<IssueProvider> {
        Ok(IssueProvider::new(self.snapshot_source()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        source: SnapshotArgs,
    }

    #[test]
    fn test_explicit_local_settings() {
        let cli = TestCli::try_parse_from([
            "polmap",
            "--snapshot-dir",
            "/srv/issue_clusters",
            "--snapshot",
            "latest",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.source.snapshot_dir, PathBuf::from("/srv/issue_clusters"));
        assert_eq!(cli.source.snapshot, SnapshotSelector::Latest);

        let source = cli.source.snapshot_source().unwrap();
        assert_eq!(source.timeout(), Duration::from_secs(5));
        assert_eq!(source.describe(), "/srv/issue_clusters [latest]");
    }

    #[test]
    fn test_url_selects_remote_transport() {
        let cli = TestCli::try_parse_from([
            "polmap",
            "--snapshot-url",
            "http://localhost:3000/api/issues",
        ])
        .unwrap();

        let source = cli.source.snapshot_source().unwrap();
        assert_eq!(source.describe(), "http://localhost:3000/api/issues");
    }

    #[test]
    fn test_rejects_zero_timeout_and_bad_run_name() {
        assert!(TestCli::try_parse_from(["polmap", "--timeout-secs", "0"]).is_err());
        assert!(TestCli::try_parse_from(["polmap", "--snapshot", "../elsewhere"]).is_err());
    }
}
