pub mod azure;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::work_item::WorkItemsBatchResponse;

/// An issue tracker that can resolve work item metadata for a set of ids in
/// one round trip. Injected into the run so tests can substitute a mock.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    async fn fetch_work_items_batch(&self, ids: &[u64]) -> Result<WorkItemsBatchResponse>;
}
