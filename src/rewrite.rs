use crate::model::work_item::{WorkItem, WorkItemsBatchResponse};

/// Rewrite every extracted `AB#<id>` reference into a markdown link carrying
/// the work item's type, title, and state.
///
/// Ids with no matching work item in the batch are warned about and left
/// untouched. Everything outside the matched tokens is preserved exactly.
/// Re-running on already-rewritten text is a no-op: the generated link body
/// puts the token directly after `[`, which both the extractor and the
/// replacement below skip.
pub fn link_work_items(
    body: &str,
    ids: &[u64],
    batch: &WorkItemsBatchResponse,
    org: &str,
    project: &str,
) -> String {
    let mut out = body.to_string();

    for &id in ids {
        // Batches are small; a linear scan beats building a map.
        match batch.value.iter().find(|item| item.id == id) {
            Some(item) => {
                tracing::info!(
                    "Work item {id}: {} {} ({})",
                    item.fields.work_item_type,
                    item.fields.title,
                    item.fields.state
                );
                out = replace_unlinked(&out, id, &work_item_link(id, item, org, project));
            }
            None => tracing::warn!("Work item {id} not found"),
        }
    }

    out
}

fn work_item_link(id: u64, item: &WorkItem, org: &str, project: &str) -> String {
    format!(
        "[AB#{id} [{}] {} ({})](https://dev.azure.com/{org}/{project}/_workitems/edit/{id})",
        item.fields.work_item_type, item.fields.title, item.fields.state
    )
}

/// Replace each occurrence of `AB#<id>` that is not preceded by `[` and is
/// followed by a word boundary, so `AB#12` does not match inside `AB#123`.
fn replace_unlinked(body: &str, id: u64, replacement: &str) -> String {
    let token = format!("AB#{id}");
    let bytes = body.as_bytes();
    let mut out = String::with_capacity(body.len());
    let mut from = 0;

    while let Some(pos) = body[from..].find(&token) {
        let at = from + pos;
        let end = at + token.len();
        let linked = at > 0 && bytes[at - 1] == b'[';
        let bounded = end >= bytes.len() || !is_word_byte(bytes[end]);

        out.push_str(&body[from..at]);
        if !linked && bounded {
            out.push_str(replacement);
        } else {
            out.push_str(&token);
        }
        from = end;
    }

    out.push_str(&body[from..]);
    out
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
