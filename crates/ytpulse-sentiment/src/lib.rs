//! Sentiment classification for fetched records.
//!
//! Scores each record's text with a [`PolarityScorer`] (the built-in
//! [`LexiconScorer`] by default) and labels it Positive, Negative or Neutral
//! by the sign of the score. Classification is pure and never fails.

pub mod classifier;
pub mod scorer;

pub use classifier::{classify, classify_with, summarize, SentimentSummary};
pub use scorer::{lexicon_score, LexiconScorer, PolarityScorer};
