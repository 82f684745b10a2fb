//! Drives a [`RecordSource`] across continuation tokens until exhaustion.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use ytpulse_core::Record;

use crate::error::IngestError;
use crate::source::RecordSource;

/// Fetches every page of `collection_id` from `source` and returns all
/// records in arrival order.
///
/// Starts with no token and follows `next_token` until a page reports none.
/// Pages are requested strictly one at a time.
///
/// **Fail-fast**: the first page failure aborts the collection; records from
/// earlier pages are discarded and the error is returned. No retries are made
/// here, so calling again is the retry.
///
/// # Errors
///
/// Propagates the first error from [`RecordSource::fetch_page`] (normally
/// [`IngestError::Upstream`]). Also returns [`IngestError::Upstream`] if the
/// server hands back a token that was already consumed.
pub async fn collect_all<S: RecordSource>(
    source: &S,
    collection_id: &str,
) -> Result<Vec<Record>, IngestError> {
    let never = AtomicBool::new(false);
    collect_all_with_cancel(source, collection_id, &never).await
}

/// [`collect_all`] with a cancellation flag checked before every page fetch.
///
/// # Errors
///
/// Everything [`collect_all`] returns, plus [`IngestError::Cancelled`] once
/// `cancel` is observed set. Partial results are discarded on cancellation.
pub async fn collect_all_with_cancel<S: RecordSource>(
    source: &S,
    collection_id: &str,
    cancel: &AtomicBool,
) -> Result<Vec<Record>, IngestError> {
    let kind = source.kind();
    let mut records: Vec<Record> = Vec::new();
    let mut token: Option<String> = None;
    let mut consumed: HashSet<String> = HashSet::new();
    let mut pages_fetched = 0usize;

    loop {
        if cancel.load(Ordering::Relaxed) {
            tracing::warn!(
                source = %kind,
                collection_id,
                pages_fetched,
                "collection cancelled; discarding partial results"
            );
            return Err(IngestError::Cancelled { pages_fetched });
        }

        let page = match source.fetch_page(collection_id, token.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    source = %kind,
                    collection_id,
                    pages_fetched,
                    discarded = records.len(),
                    error = %e,
                    "page fetch failed; aborting collection"
                );
                return Err(e);
            }
        };
        pages_fetched += 1;

        let page_len = page.records.len();
        tracing::debug!(
            source = %kind,
            collection_id,
            page = pages_fetched,
            records = page_len,
            has_next = page.next_token.is_some(),
            "fetched page"
        );
        records.extend(page.records);

        let Some(next) = page.next_token else {
            break;
        };

        if page_len == 0 && source.stops_on_empty_page() {
            tracing::debug!(source = %kind, collection_id, "empty page; source is caught up");
            break;
        }

        if !consumed.insert(next.clone()) {
            return Err(IngestError::Upstream {
                context: format!("{kind}({collection_id}) page {pages_fetched}"),
                status: None,
                body: format!("continuation token \"{next}\" was already consumed"),
            });
        }
        token = Some(next);
    }

    tracing::info!(
        source = %kind,
        collection_id,
        pages = pages_fetched,
        records = records.len(),
        "collection complete"
    );
    Ok(records)
}
