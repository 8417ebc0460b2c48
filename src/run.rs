use anyhow::{bail, Result};

use crate::inputs::ActionInputs;
use crate::refs;
use crate::release::ReleaseStore;
use crate::rewrite;
use crate::tracker::IssueTracker;

/// Outcome of a successful run: the work item ids that were processed, in
/// the order they appear in the release notes (duplicates included).
#[derive(Debug, Default)]
pub struct RunReport {
    pub work_item_ids: Vec<u64>,
}

impl RunReport {
    pub fn joined(&self) -> String {
        self.work_item_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One linear pass over one release: fetch notes, extract references,
/// resolve them in a single batch, rewrite, write back.
pub async fn run(
    inputs: &ActionInputs,
    releases: &dyn ReleaseStore,
    tracker: &dyn IssueTracker,
) -> Result<RunReport> {
    let release = releases.get_release(inputs.release_id).await?;
    let body = release.body.unwrap_or_default();

    let ids = refs::extract_work_item_ids(&body);
    tracing::info!("Work item ids: {ids:?}");

    if ids.is_empty() {
        tracing::info!("No work items found in the release notes");
        return Ok(RunReport::default());
    }

    let batch = match tracker.fetch_work_items_batch(&ids).await {
        Ok(batch) => batch,
        Err(err) => {
            // Non-200, transport, and parse failures all land here.
            tracing::warn!("Work item batch lookup failed: {err:#}");
            bail!("Failed to get work item details");
        }
    };

    let new_body =
        rewrite::link_work_items(&body, &ids, &batch, &inputs.ado_org, &inputs.ado_project);
    releases.update_release(inputs.release_id, &new_body).await?;

    Ok(RunReport { work_item_ids: ids })
}
