mod export;
mod fetch;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ytpulse_core::SourceKind;

#[derive(Debug, Parser)]
#[command(name = "ytpulse")]
#[command(about = "Fetch YouTube comments or live chat, classify sentiment, export CSV")]
struct Cli {
    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every top-level comment on a video
    Comments(FetchArgs),
    /// Fetch the current chat of a live broadcast
    LiveChat(FetchArgs),
}

#[derive(Debug, Args)]
struct FetchArgs {
    /// Video URL (watch, youtu.be, live or shorts link) or bare video id
    url: String,

    /// Classify each record as Positive, Negative or Neutral
    #[arg(long)]
    sentiment: bool,

    /// Include the raw polarity score column (requires --sentiment)
    #[arg(long, requires = "sentiment")]
    scores: bool,

    /// Write CSV to this path instead of stdout
    #[arg(short, long, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write CSV to the default file name in the current directory
    #[arg(long)]
    save: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ytpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_key = cli.api_key.or_else(|| config.api_key.clone());

    let (kind, args) = match cli.command {
        Some(Commands::Comments(args)) => (SourceKind::Comments, args),
        Some(Commands::LiveChat(args)) => (SourceKind::LiveChat, args),
        None => {
            println!("ytpulse: run `ytpulse comments <URL>` or `ytpulse live-chat <URL>` (see --help)");
            return Ok(());
        }
    };

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if request_stop(&flag) {
                tracing::warn!("interrupt received; stopping before the next page (Ctrl-C again to exit)");
            } else {
                tracing::warn!("second interrupt received; exiting");
                std::process::exit(130);
            }
        }
    });

    fetch::run_fetch(&config, api_key.as_deref(), kind, &args, &cancel).await
}

/// Raises the cancel flag. Returns `true` only for the interrupt that raised
/// it; a later interrupt finds it already set and gets `false`.
fn request_stop(flag: &AtomicBool) -> bool {
    !flag.swap(true, Ordering::Relaxed)
}

#[cfg(test)]
mod tests;
