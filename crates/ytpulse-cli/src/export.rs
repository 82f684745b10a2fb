//! CSV export for fetched and classified records.
//!
//! Header row plus one row per record, `\n` line endings. Fields containing a
//! comma, quote, or line break are quoted with inner quotes doubled. An empty
//! field is written as `""` so a one-column row never collapses into a blank
//! line that readers would skip.

use std::path::Path;

use anyhow::Context;
use ytpulse_core::{LabeledRecord, Record, SourceKind};

/// One-column CSV: `Comment`.
pub(crate) fn records_to_csv(records: &[Record]) -> String {
    let mut out = String::from("Comment\n");
    for record in records {
        push_field(&mut out, &record.text);
        out.push('\n');
    }
    out
}

/// Two-column CSV `Comment,Sentiment`, or three with `Score` when
/// `with_scores` is set.
pub(crate) fn labeled_to_csv(labeled: &[LabeledRecord], with_scores: bool) -> String {
    let mut out = String::from(if with_scores {
        "Comment,Sentiment,Score\n"
    } else {
        "Comment,Sentiment\n"
    });
    for record in labeled {
        push_field(&mut out, &record.text);
        out.push(',');
        out.push_str(record.sentiment.as_str());
        if with_scores {
            out.push(',');
            out.push_str(&format!("{:.4}", record.score));
        }
        out.push('\n');
    }
    out
}

fn push_field(out: &mut String, field: &str) {
    if field.is_empty() || field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

pub(crate) fn default_file_name(kind: SourceKind, labeled: bool) -> &'static str {
    match (kind, labeled) {
        (_, true) => "youtube_comments_sentiment.csv",
        (SourceKind::Comments, false) => "youtube_comments.csv",
        (SourceKind::LiveChat, false) => "youtube_live_stream_comments.csv",
    }
}

/// Writes `csv` to `path`, or to stdout when `path` is `None`.
pub(crate) fn write_output(path: Option<&Path>, csv: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, csv)
                .with_context(|| format!("failed to write CSV to {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = csv.len(), "wrote CSV");
        }
        None => print!("{csv}"),
    }
    Ok(())
}
