//! Issue snapshot loading for polmap.
//!
//! The upstream batch job writes clustered political issues to
//! `<snapshot dir>/<run>/meta.json`. This module reads that artifact through a
//! configurable transport, validates its shape and removes the clusters the
//! labeler marked as not presentable.

mod error;
mod provider;
mod source;
mod types;


pub use self::error::IssueLoadError;
pub use self::provider::{filter_presentable, parse_snapshot, IssueProvider};
pub use self::source::SnapshotSource;
pub use self::types::*;
