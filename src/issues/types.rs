//! Type definitions for the issue snapshot.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tokio::time::Duration;

/// Label the upstream labeler assigns to clusters that must not be displayed.
pub const NOT_APPLICABLE_LABEL: &str = "[불가]";

pub const META_FILE_NAME: &str = "meta.json";
pub const CURRENT_SNAPSHOT: &str = "current";

// Constants
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One detected news-issue cluster, as written by the upstream batch job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueClusterRecord {
    pub issue_cluster_id: i64,
    pub issue_label: String,
    pub cluster_size: u64,
    /// Most representative headline first.
    pub representative_titles: Vec<String>,
}

impl IssueClusterRecord {
    /// Exact, case-sensitive match against the sentinel label. No trimming.
    pub fn is_not_applicable(&self) -> bool {
        self.issue_label == NOT_APPLICABLE_LABEL
    }
}

/// Which run directory under the snapshot base directory gets read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSelector {
    /// The fixed `current` directory.
    Current,
    /// The run directory with the greatest name. Runs are timestamp-named upstream.
    Latest,
    Named(String),
}

impl FromStr for SnapshotSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("snapshot name must not be empty".to_string()),
            CURRENT_SNAPSHOT => Ok(SnapshotSelector::Current),
            "latest" => Ok(SnapshotSelector::Latest),
            "." | ".." => Err(format!("invalid snapshot name: {}", s)),
            name if name.contains(['/', '\\']) => {
                Err(format!("snapshot name must not contain a path separator: {}", s))
            }
            name => Ok(SnapshotSelector::Named(name.to_string())),
        }
    }
}

impl std::fmt::Display for SnapshotSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSelector::Current => f.write_str(CURRENT_SNAPSHOT),
            SnapshotSelector::Latest => f.write_str("latest"),
            SnapshotSelector::Named(name) => f.write_str(name),
        }
    }
}
