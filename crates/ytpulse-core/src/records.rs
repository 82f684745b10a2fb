use serde::Serialize;

/// One text record pulled from a remote collection.
///
/// Records have no identity beyond their position in the collection; two
/// records with the same text are still two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub text: String,
}

impl Record {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Categorical sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a polarity score to a label.
    ///
    /// `> 0` is positive, `< 0` is negative, everything else (including `0.0`,
    /// `-0.0` and NaN) is neutral.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record paired with the sentiment derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledRecord {
    pub text: String,
    pub sentiment: Sentiment,
    /// Polarity score in `[-1.0, 1.0]` the label was derived from.
    pub score: f32,
}

impl LabeledRecord {
    /// Labels `record` with `score`. The source record is left untouched.
    #[must_use]
    pub fn from_score(record: &Record, score: f32) -> Self {
        Self {
            text: record.text.clone(),
            sentiment: Sentiment::from_score(score),
            score,
        }
    }
}

/// Which kind of remote collection a set of records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceKind {
    /// Top-level comment threads on a video.
    Comments,
    /// Messages in a live broadcast's chat.
    LiveChat,
}

impl SourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comments => "comments",
            Self::LiveChat => "live_chat",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
