use std::sync::atomic::AtomicBool;

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use ytpulse_core::{Record, SessionOrigin, SessionStore};
use ytpulse_ingest::{IngestError, YoutubeClient};

use super::*;
use crate::fetch::{fetch_into_session, output_path};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["ytpulse"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_comments_command_with_defaults() {
    let cli = Cli::try_parse_from(["ytpulse", "comments", "https://youtu.be/nBzrMw8hkmY"])
        .expect("expected valid cli args");
    let Some(Commands::Comments(args)) = cli.command else {
        panic!("expected comments command");
    };
    assert_eq!(args.url, "https://youtu.be/nBzrMw8hkmY");
    assert!(!args.sentiment);
    assert!(!args.scores);
    assert!(args.output.is_none());
    assert!(!args.save);
}

#[test]
fn parses_live_chat_with_sentiment_and_output() {
    let cli = Cli::try_parse_from([
        "ytpulse",
        "--api-key",
        "k",
        "live-chat",
        "nBzrMw8hkmY",
        "--sentiment",
        "--scores",
        "-o",
        "out.csv",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.api_key.as_deref(), Some("k"));
    let Some(Commands::LiveChat(args)) = cli.command else {
        panic!("expected live-chat command");
    };
    assert!(args.sentiment);
    assert!(args.scores);
    assert_eq!(args.output, Some(PathBuf::from("out.csv")));
}

#[test]
fn scores_requires_sentiment() {
    let result = Cli::try_parse_from(["ytpulse", "comments", "nBzrMw8hkmY", "--scores"]);
    assert!(result.is_err(), "--scores without --sentiment must be rejected");
}

#[test]
fn output_conflicts_with_save() {
    let result = Cli::try_parse_from([
        "ytpulse",
        "comments",
        "nBzrMw8hkmY",
        "--save",
        "--output",
        "x.csv",
    ]);
    assert!(result.is_err(), "--save and --output are mutually exclusive");
}

#[test]
fn comments_requires_url() {
    assert!(Cli::try_parse_from(["ytpulse", "comments"]).is_err());
}

#[test]
fn first_interrupt_cancels_and_second_requests_exit() {
    let flag = AtomicBool::new(false);
    assert!(request_stop(&flag), "first interrupt should only cancel");
    assert!(flag.load(std::sync::atomic::Ordering::Relaxed));
    assert!(!request_stop(&flag), "second interrupt should request exit");
}

// ---------------------------------------------------------------------------
// Session updates
// ---------------------------------------------------------------------------

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 5, base_url, "ytpulse-test/0.1")
        .expect("client construction should not fail")
}

fn seeded_session() -> SessionStore {
    let mut session = SessionStore::new();
    session.set(
        SessionOrigin {
            kind: SourceKind::Comments,
            collection_id: "older".to_owned(),
        },
        vec![Record::new("kept")],
    );
    session
}

fn comment_body(texts: &[&str]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = texts
        .iter()
        .map(|t| json!({ "snippet": { "topLevelComment": { "snippet": { "textDisplay": t } } } }))
        .collect();
    json!({ "items": items })
}

#[tokio::test]
async fn successful_fetch_overwrites_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "vid1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comment_body(&["new1", "new2"])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = seeded_session();
    let cancel = AtomicBool::new(false);

    let count = fetch_into_session(&client, SourceKind::Comments, "vid1", &cancel, &mut session)
        .await
        .expect("fetch should succeed");

    assert_eq!(count, 2);
    assert_eq!(
        session.get(),
        Some(&vec![Record::new("new1"), Record::new("new2")])
    );
    assert_eq!(
        session.get_origin().map(|o| o.collection_id.as_str()),
        Some("vid1")
    );
}

#[tokio::test]
async fn empty_fetch_leaves_session_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comment_body(&[])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = seeded_session();
    let cancel = AtomicBool::new(false);

    let count = fetch_into_session(&client, SourceKind::Comments, "vid1", &cancel, &mut session)
        .await
        .expect("empty result is not an error");

    assert_eq!(count, 0);
    assert_eq!(session.get(), Some(&vec![Record::new("kept")]));
}

#[tokio::test]
async fn failed_fetch_leaves_session_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":{"code":404}}"#))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = seeded_session();
    let cancel = AtomicBool::new(false);

    let err = fetch_into_session(&client, SourceKind::Comments, "vid1", &cancel, &mut session)
        .await
        .expect_err("404 must fail");

    assert!(err.is_upstream(), "expected upstream error, got {err:?}");
    assert_eq!(session.get(), Some(&vec![Record::new("kept")]));
}

#[tokio::test]
async fn live_chat_fetch_resolves_chat_id_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "stream1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "liveStreamingDetails": { "activeLiveChatId": "chat1" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/liveChat/messages"))
        .and(query_param("liveChatId", "chat1"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "snippet": { "displayMessage": "gg" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = SessionStore::new();
    let cancel = AtomicBool::new(false);

    let count = fetch_into_session(&client, SourceKind::LiveChat, "stream1", &cancel, &mut session)
        .await
        .expect("live chat fetch should succeed");

    assert_eq!(count, 1);
    let origin = session.get_origin().expect("session should be set");
    assert_eq!(origin.kind, SourceKind::LiveChat);
    assert_eq!(origin.collection_id, "chat1");
}

#[tokio::test]
async fn live_chat_on_regular_video_skips_message_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [{}] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/liveChat/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = SessionStore::new();
    let cancel = AtomicBool::new(false);

    let err = fetch_into_session(&client, SourceKind::LiveChat, "plain", &cancel, &mut session)
        .await
        .expect_err("regular video has no live chat");

    assert!(matches!(err, IngestError::Resolution(_)), "got {err:?}");
    assert!(session.is_empty());
}

// ---------------------------------------------------------------------------
// Output paths
// ---------------------------------------------------------------------------

fn fetch_args(extra: &[&str]) -> FetchArgs {
    let mut argv = vec!["ytpulse", "comments", "nBzrMw8hkmY"];
    argv.extend_from_slice(extra);
    let cli = Cli::try_parse_from(argv).expect("expected valid cli args");
    match cli.command {
        Some(Commands::Comments(args) | Commands::LiveChat(args)) => args,
        None => panic!("expected a fetch command"),
    }
}

#[test]
fn save_name_follows_stored_origin() {
    let mut session = seeded_session();
    let comments = session.get_origin().expect("seeded origin").clone();
    assert_eq!(
        output_path(&fetch_args(&["--save"]), &comments),
        Some(PathBuf::from("youtube_comments.csv"))
    );

    session.set(
        SessionOrigin {
            kind: SourceKind::LiveChat,
            collection_id: "chat1".to_owned(),
        },
        vec![Record::new("gg")],
    );
    let live = session.get_origin().expect("live origin");
    assert_eq!(
        output_path(&fetch_args(&["--save"]), live),
        Some(PathBuf::from("youtube_live_stream_comments.csv"))
    );
    assert_eq!(
        output_path(&fetch_args(&["--save", "--sentiment"]), live),
        Some(PathBuf::from("youtube_comments_sentiment.csv"))
    );
}

#[test]
fn explicit_output_wins_and_no_flag_means_stdout() {
    let session = seeded_session();
    let origin = session.get_origin().expect("seeded origin");
    assert_eq!(
        output_path(&fetch_args(&["-o", "mine.csv"]), origin),
        Some(PathBuf::from("mine.csv"))
    );
    assert_eq!(output_path(&fetch_args(&[]), origin), None);
}
