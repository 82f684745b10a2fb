//! Paginated ingestion of YouTube comment threads and live-chat messages.
//!
//! [`YoutubeClient`] performs single requests, the [`RecordSource`]
//! implementations turn one response page into [`ytpulse_core::Record`]s, and
//! [`collect_all`] walks continuation tokens until the collection is exhausted.

pub mod client;
pub mod error;
pub mod paginator;
pub mod resolve;
pub mod source;
pub mod types;

pub use client::{YoutubeClient, PAGE_SIZE};
pub use error::IngestError;
pub use paginator::{collect_all, collect_all_with_cancel};
pub use resolve::extract_video_id;
pub use source::{CommentSource, LiveChatSource, Page, RecordSource};
