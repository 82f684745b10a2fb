//! Record sources: one remote paginated collection behind a uniform
//! page-fetch contract.
//!
//! Both sources share the request mechanics in
//! [`YoutubeClient::fetch_list_page`]; they differ only in the endpoint, the
//! id parameter, and where a record's text lives in a response item.

use std::future::Future;

use ytpulse_core::{Record, SourceKind};

use crate::client::YoutubeClient;
use crate::error::IngestError;
use crate::types::{CommentThread, ListResponse, LiveChatMessage};

/// One page of records plus the token for the next page.
///
/// `next_token` is `None` on the last page and never `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<Record>,
    pub next_token: Option<String>,
}

/// A remote collection that can be read one page at a time.
pub trait RecordSource {
    /// What kind of records this source yields.
    fn kind(&self) -> SourceKind;

    /// Fetches the page identified by `page_token` (the first page when
    /// `None`) with exactly one remote request.
    ///
    /// An empty but successful page is `Ok`, not an error.
    fn fetch_page(
        &self,
        collection_id: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<Page, IngestError>> + Send;

    /// Whether an empty page ends the collection even when the server still
    /// reports a continuation token.
    fn stops_on_empty_page(&self) -> bool {
        false
    }
}

/// Top-level comments on a video (`commentThreads`).
pub struct CommentSource<'a> {
    client: &'a YoutubeClient,
}

impl<'a> CommentSource<'a> {
    #[must_use]
    pub fn new(client: &'a YoutubeClient) -> Self {
        Self { client }
    }
}

impl RecordSource for CommentSource<'_> {
    fn kind(&self) -> SourceKind {
        SourceKind::Comments
    }

    async fn fetch_page(
        &self,
        collection_id: &str,
        page_token: Option<&str>,
    ) -> Result<Page, IngestError> {
        let response: ListResponse<CommentThread> = self
            .client
            .fetch_list_page("commentThreads", "videoId", collection_id, page_token)
            .await?;

        let records = response
            .items
            .into_iter()
            .map(|item| Record::new(item.snippet.top_level_comment.snippet.text_display))
            .collect();

        Ok(Page {
            records,
            next_token: normalize_token(response.next_page_token),
        })
    }
}

/// Messages in a live broadcast's chat (`liveChat/messages`).
///
/// A live chat always hands back a polling cursor, so an empty page means the
/// reader has caught up with the chat and the collection ends there.
pub struct LiveChatSource<'a> {
    client: &'a YoutubeClient,
}

impl<'a> LiveChatSource<'a> {
    #[must_use]
    pub fn new(client: &'a YoutubeClient) -> Self {
        Self { client }
    }
}

impl RecordSource for LiveChatSource<'_> {
    fn kind(&self) -> SourceKind {
        SourceKind::LiveChat
    }

    async fn fetch_page(
        &self,
        collection_id: &str,
        page_token: Option<&str>,
    ) -> Result<Page, IngestError> {
        let response: ListResponse<LiveChatMessage> = self
            .client
            .fetch_list_page("liveChat/messages", "liveChatId", collection_id, page_token)
            .await?;

        let mut records = Vec::with_capacity(response.items.len());
        for item in response.items {
            match item.snippet.display_message {
                Some(text) => records.push(Record::new(text)),
                None => {
                    tracing::debug!(
                        live_chat_id = collection_id,
                        event = item.snippet.kind.as_deref().unwrap_or("unknown"),
                        "skipping chat event without a display message"
                    );
                }
            }
        }

        Ok(Page {
            records,
            next_token: normalize_token(response.next_page_token),
        })
    }

    fn stops_on_empty_page(&self) -> bool {
        true
    }
}

/// An empty token means "no more pages", same as an absent one.
fn normalize_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}
