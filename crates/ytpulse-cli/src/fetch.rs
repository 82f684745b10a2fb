//! `comments` / `live-chat` command handler.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use ytpulse_core::{AppConfig, SessionOrigin, SessionStore, SourceKind};
use ytpulse_ingest::{
    collect_all_with_cancel, extract_video_id, CommentSource, IngestError, LiveChatSource,
    YoutubeClient,
};

use crate::export;
use crate::FetchArgs;

/// Resolve, fetch, optionally classify, and export one collection.
///
/// # Errors
///
/// Returns an error if no API key is configured, the URL cannot be resolved,
/// any page fetch fails, or the CSV cannot be written. An empty collection is
/// reported and is not an error.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    api_key: Option<&str>,
    kind: SourceKind,
    args: &FetchArgs,
    cancel: &AtomicBool,
) -> anyhow::Result<()> {
    let Some(api_key) = api_key.filter(|k| !k.is_empty()) else {
        anyhow::bail!(
            "please provide both the API key (--api-key or YOUTUBE_API_KEY) and a valid YouTube video URL"
        );
    };
    let video_id = extract_video_id(&args.url)?;

    let client = YoutubeClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.api_base_url,
        &config.user_agent,
    )?;

    let mut session = SessionStore::new();
    fetch_into_session(&client, kind, &video_id, cancel, &mut session).await?;
    if session.is_empty() {
        eprintln!("No comments found.");
        return Ok(());
    }
    let (Some(records), Some(origin)) = (session.get(), session.get_origin()) else {
        return Ok(());
    };
    eprintln!(
        "Fetched {} {} successfully.",
        records.len(),
        noun(origin.kind)
    );

    let csv = if args.sentiment {
        let labeled = ytpulse_sentiment::classify(records);
        eprintln!("{}", ytpulse_sentiment::summarize(&labeled));
        export::labeled_to_csv(&labeled, args.scores)
    } else {
        export::records_to_csv(records)
    };

    let path = output_path(args, origin);
    export::write_output(path.as_deref(), &csv)
}

/// Fetches a full collection and stores it in `session`.
///
/// Returns the number of records stored. The session is only written when
/// the fetch succeeded with at least one record: a failure or an empty result
/// leaves whatever it held before untouched.
///
/// # Errors
///
/// Propagates resolution, upstream, and cancellation errors.
pub(crate) async fn fetch_into_session(
    client: &YoutubeClient,
    kind: SourceKind,
    video_id: &str,
    cancel: &AtomicBool,
    session: &mut SessionStore,
) -> Result<usize, IngestError> {
    let (collection_id, records) = match kind {
        SourceKind::Comments => {
            let source = CommentSource::new(client);
            let records = collect_all_with_cancel(&source, video_id, cancel).await?;
            (video_id.to_owned(), records)
        }
        SourceKind::LiveChat => {
            let chat_id = client.resolve_live_chat_id(video_id).await?;
            let source = LiveChatSource::new(client);
            let records = collect_all_with_cancel(&source, &chat_id, cancel).await?;
            (chat_id, records)
        }
    };

    if records.is_empty() {
        tracing::warn!(
            source = %kind,
            collection_id = collection_id.as_str(),
            "fetch succeeded with no records; session left unchanged"
        );
        return Ok(0);
    }

    let count = records.len();
    session.set(
        SessionOrigin {
            kind,
            collection_id,
        },
        records,
    );
    Ok(count)
}

/// Explicit `--output` wins; `--save` picks a default name from where the
/// stored records came from.
pub(crate) fn output_path(args: &FetchArgs, origin: &SessionOrigin) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }
    args.save
        .then(|| PathBuf::from(export::default_file_name(origin.kind, args.sentiment)))
}

fn noun(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Comments => "comments",
        SourceKind::LiveChat => "live chat messages",
    }
}
