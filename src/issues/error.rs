use std::fmt::Display;
use thiserror::Error;

/// Failure modes of loading an issue snapshot.
#[derive(Debug, Error)]
pub enum IssueLoadError {
    /// File, run directory or remote resource could not be read.
    #[error("snapshot source {location} is unavailable: {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// Content was read but is not a JSON array of issue records.
    #[error("snapshot data is malformed: {reason}")]
    MalformedData { reason: String },
}

impl IssueLoadError {
    pub fn source_unavailable(location: impl Display, reason: impl Display) -> Self {
        IssueLoadError::SourceUnavailable {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl Display) -> Self {
        IssueLoadError::MalformedData {
            reason: reason.to_string(),
        }
    }
}
