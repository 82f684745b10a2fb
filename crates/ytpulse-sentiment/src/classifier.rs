//! Record-level sentiment classification.

use ytpulse_core::{LabeledRecord, Record, Sentiment};

use crate::scorer::{LexiconScorer, PolarityScorer};

/// Labels every record with the built-in [`LexiconScorer`].
///
/// Output has the same length and order as `records`.
#[must_use]
pub fn classify(records: &[Record]) -> Vec<LabeledRecord> {
    classify_with(&LexiconScorer::default(), records)
}

/// Labels every record with `scorer`.
///
/// Scores are clamped to `[-1.0, 1.0]`; a NaN score is treated as `0.0` so a
/// misbehaving scorer still yields a Neutral label instead of failing.
#[must_use]
pub fn classify_with<S: PolarityScorer + ?Sized>(
    scorer: &S,
    records: &[Record],
) -> Vec<LabeledRecord> {
    records
        .iter()
        .map(|record| {
            let raw = scorer.polarity(&record.text);
            let score = if raw.is_nan() {
                tracing::debug!(text = %record.text, "scorer returned NaN; treating as neutral");
                0.0
            } else {
                raw.clamp(-1.0, 1.0)
            };
            LabeledRecord::from_score(record, score)
        })
        .collect()
}

/// Label counts for a classified collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl std::fmt::Display for SentimentSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records: {} positive, {} negative, {} neutral",
            self.total(),
            self.positive,
            self.negative,
            self.neutral
        )
    }
}

#[must_use]
pub fn summarize(labeled: &[LabeledRecord]) -> SentimentSummary {
    labeled
        .iter()
        .fold(SentimentSummary::default(), |mut acc, record| {
            match record.sentiment {
                Sentiment::Positive => acc.positive += 1,
                Sentiment::Negative => acc.negative += 1,
                Sentiment::Neutral => acc.neutral += 1,
            }
            acc
        })
}
