//! Wire types for the YouTube Data API v3 list endpoints.
//!
//! Only the fields the sources read are modelled; everything else in the
//! response is ignored by serde.

use serde::Deserialize;

/// Envelope shared by every `*.list` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

// commentThreads ------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: Comment,
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
}

// liveChat/messages ---------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LiveChatMessage {
    pub snippet: LiveChatMessageSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessageSnippet {
    /// Absent for non-text events such as message deletions or user bans.
    #[serde(default)]
    pub display_message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

// videos --------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamingDetails {
    #[serde(default)]
    pub active_live_chat_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_thread_page_parses_text_and_token() {
        let body = serde_json::json!({
            "kind": "youtube#commentThreadListResponse",
            "nextPageToken": "QURTSl9p",
            "items": [{
                "id": "Ugx1",
                "snippet": {
                    "videoId": "abc",
                    "topLevelComment": {
                        "snippet": { "textDisplay": "first!", "likeCount": 3 }
                    }
                }
            }]
        });
        let page: ListResponse<CommentThread> = serde_json::from_value(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].snippet.top_level_comment.snippet.text_display, "first!");
        assert_eq!(page.next_page_token.as_deref(), Some("QURTSl9p"));
    }

    #[test]
    fn missing_items_parses_as_empty() {
        let page: ListResponse<CommentThread> =
            serde_json::from_value(serde_json::json!({ "kind": "x" })).unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn live_chat_message_without_display_message_parses() {
        let body = serde_json::json!({
            "items": [
                { "snippet": { "type": "textMessageEvent", "displayMessage": "hi" } },
                { "snippet": { "type": "messageDeletedEvent" } }
            ],
            "nextPageToken": "GO4",
            "pollingIntervalMillis": 5000
        });
        let page: ListResponse<LiveChatMessage> = serde_json::from_value(body).unwrap();
        assert_eq!(page.items[0].snippet.display_message.as_deref(), Some("hi"));
        assert!(page.items[1].snippet.display_message.is_none());
        assert_eq!(page.items[1].snippet.kind.as_deref(), Some("messageDeletedEvent"));
    }

    #[test]
    fn video_without_live_details_parses() {
        let page: ListResponse<Video> =
            serde_json::from_value(serde_json::json!({ "items": [{ "id": "abc" }] })).unwrap();
        assert!(page.items[0].live_streaming_details.is_none());
    }
}
