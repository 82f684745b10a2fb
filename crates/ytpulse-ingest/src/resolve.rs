//! Turning user input into collection ids.
//!
//! A video URL resolves locally to a video id. A live chat additionally needs
//! the broadcast's active chat id, which only the `videos` endpoint knows.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::YoutubeClient;
use crate::error::IngestError;
use crate::types::{ListResponse, Video};

static WATCH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([A-Za-z0-9_-]+)").expect("valid watch regex"));

static PATH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/live/|/shorts/|/embed/)([A-Za-z0-9_-]+)").expect("valid path regex")
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid bare id regex"));

/// Extracts a video id from a YouTube URL or a bare 11-character id.
///
/// Accepts `watch?v=ID` (anywhere in the query), `youtu.be/ID`, `/live/ID`,
/// `/shorts/ID` and `/embed/ID`.
///
/// # Errors
///
/// Returns [`IngestError::Resolution`] when no id can be found.
pub fn extract_video_id(input: &str) -> Result<String, IngestError> {
    let input = input.trim();

    if BARE_ID.is_match(input) {
        return Ok(input.to_owned());
    }

    WATCH_PARAM
        .captures(input)
        .or_else(|| PATH_ID.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| {
            IngestError::Resolution(format!(
                "invalid YouTube URL \"{input}\": provide a valid YouTube video URL"
            ))
        })
}

impl YoutubeClient {
    /// Looks up the active live chat id for a broadcast.
    ///
    /// # Errors
    ///
    /// - [`IngestError::Resolution`] if the video does not exist, is not a
    ///   live stream, or has no active chat (the stream has ended).
    /// - [`IngestError::Upstream`] on any API failure.
    pub async fn resolve_live_chat_id(&self, video_id: &str) -> Result<String, IngestError> {
        let url = self.build_url(
            "videos",
            &[("part", "liveStreamingDetails"), ("id", video_id)],
        )?;
        let context = format!("videos(id={video_id})");
        let response: ListResponse<Video> = self.request_json(&url, &context).await?;

        let Some(video) = response.items.into_iter().next() else {
            return Err(IngestError::Resolution(format!(
                "video {video_id} was not found or is not a live stream"
            )));
        };

        let chat_id = video
            .live_streaming_details
            .ok_or_else(|| {
                IngestError::Resolution(format!("video {video_id} is not a live stream"))
            })?
            .active_live_chat_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                IngestError::Resolution(format!(
                    "video {video_id} has no active live chat (stream is not live)"
                ))
            })?;

        tracing::debug!(video_id, live_chat_id = %chat_id, "resolved live chat id");
        Ok(chat_id)
    }
}
