use tracing::{debug, info};

use super::error::IssueLoadError;
use super::source::SnapshotSource;
use super::types::IssueClusterRecord;
use crate::TARGET_SNAPSHOT;

/// Loads the current issue snapshot and hands out the presentable records.
///
/// Every call performs an independent read; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct IssueProvider {
    source: SnapshotSource,
}

impl IssueProvider {
    pub fn new(source: SnapshotSource) -> Self {
        IssueProvider { source }
    }

    pub fn source(&self) -> &SnapshotSource {
        &self.source
    }

    /// Read, validate and filter the snapshot. Relative order of the remaining
    /// records is the order of the source array.
    pub async fn load_issues(&self) -> Result<Vec<IssueClusterRecord>, IssueLoadError> {
        let raw = self.source.read().await?;
        let records = parse_snapshot(&raw)?;
        let total = records.len();
        let issues = filter_presentable(records);

        info!(
            target: TARGET_SNAPSHOT,
            "Loaded {} issues from {} ({} excluded)",
            issues.len(),
            self.source.describe(),
            total - issues.len()
        );

        Ok(issues)
    }

    /// Look up a single presentable issue. Excluded records are never returned.
    pub async fn find_issue(&self, id: i64) -> Result<Option<IssueClusterRecord>, IssueLoadError> {
        let issue = self
            .load_issues()
            .await?
            .into_iter()
            .find(|issue| issue.issue_cluster_id == id);

        if issue.is_none() {
            debug!(target: TARGET_SNAPSHOT, "Issue {} not found in snapshot", id);
        }

        Ok(issue)
    }
}

/// Parse raw snapshot bytes as a JSON array of records. Every record must carry
/// all four fields with the expected types; extra fields are ignored.
pub fn parse_snapshot(raw: &[u8]) -> Result<Vec<IssueClusterRecord>, IssueLoadError> {
    serde_json::from_slice(raw).map_err(IssueLoadError::malformed)
}

/// Drop the records labeled `[불가]`, keeping everything else in order.
pub fn filter_presentable(records: Vec<IssueClusterRecord>) -> Vec<IssueClusterRecord> {
    records
        .into_iter()
        .filter(|record| !record.is_not_applicable())
        .collect()
}
