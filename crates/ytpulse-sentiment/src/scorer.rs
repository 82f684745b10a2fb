//! Lexicon polarity scorer for short comment and chat text.

/// Word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("brilliant", 0.9),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("beautiful", 0.85),
    ("love", 0.5),
    ("loved", 0.7),
    ("loving", 0.6),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("cool", 0.35),
    ("fun", 0.3),
    ("funny", 0.25),
    ("happy", 0.8),
    ("glad", 0.5),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("interesting", 0.5),
    ("informative", 0.5),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("incredible", 0.9),
    ("impressive", 1.0),
    ("recommend", 0.4),
    ("legend", 0.5),
    ("goat", 0.5),
    ("wow", 0.1),
    ("lol", 0.8),
    ("lmao", 0.6),
    ("haha", 0.2),
    ("win", 0.8),
    ("fire", 0.3),
    ("hype", 0.3),
    ("respect", 0.4),
    ("underrated", 0.4),
    ("masterpiece", 1.0),
    ("clean", 0.37),
    ("smart", 0.21),
    ("sweet", 0.35),
    ("epic", 0.5),
    // Negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("hate", -0.8),
    ("hated", -0.9),
    ("boring", -1.0),
    ("stupid", -0.8),
    ("dumb", -0.4),
    ("ugly", -0.7),
    ("sad", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("poor", -0.4),
    ("wrong", -0.5),
    ("fake", -0.5),
    ("scam", -0.8),
    ("clickbait", -0.6),
    ("trash", -0.7),
    ("garbage", -0.7),
    ("cringe", -0.6),
    ("useless", -0.5),
    ("waste", -0.2),
    ("lag", -0.3),
    ("broken", -0.4),
    ("fail", -0.5),
    ("failed", -0.5),
    ("problem", -0.3),
    ("sucks", -0.3),
    ("pathetic", -1.0),
    ("ridiculous", -0.33),
    ("toxic", -0.5),
    ("unfair", -0.5),
    ("lame", -0.5),
    ("mid", -0.2),
    ("overrated", -0.4),
];

/// Words that flip the polarity of the next scored word (within two tokens).
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "hardly", "don't", "dont", "doesn't", "doesnt", "didn't",
    "didnt", "isn't", "isnt", "wasn't", "wasnt", "aren't", "arent", "can't", "cant", "cannot",
    "won't", "wont", "ain't", "aint",
];

/// Words that strengthen the next scored word.
const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "so",
    "extremely",
    "super",
    "totally",
    "absolutely",
    "incredibly",
    "insanely",
];

const INTENSIFIER_FACTOR: f32 = 1.3;
const NEGATION_FACTOR: f32 = -0.5;
const NEGATION_WINDOW: usize = 2;

/// A source of polarity scores in `[-1.0, 1.0]`.
///
/// Any implementation may be plugged into
/// [`classify_with`](crate::classifier::classify_with).
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> f32;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f32,
{
    fn polarity(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Word-lexicon scorer with negation and intensifier handling.
#[derive(Debug, Clone, Copy)]
pub struct LexiconScorer {
    lexicon: &'static [(&'static str, f32)],
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self { lexicon: LEXICON }
    }
}

impl LexiconScorer {
    /// Scorer over a custom word list. Weights outside `[-1.0, 1.0]` still
    /// produce a clamped final score.
    #[must_use]
    pub fn with_lexicon(lexicon: &'static [(&'static str, f32)]) -> Self {
        Self { lexicon }
    }

    fn weight(&self, word: &str) -> Option<f32> {
        self.lexicon
            .iter()
            .find(|(w, _)| *w == word)
            .map(|&(_, weight)| weight)
    }

    /// Scores `text`.
    ///
    /// Each lexicon hit contributes its weight, scaled by a preceding
    /// intensifier and flipped by a negator within the previous two tokens.
    /// The result is the mean of all hits clamped to `[-1.0, 1.0]`, and
    /// `0.0` when nothing matched.
    #[must_use]
    pub fn score(&self, text: &str) -> f32 {
        let mut hits: Vec<f32> = Vec::new();
        let mut negation_left = 0usize;
        let mut intensify = false;

        for raw in text.split_whitespace() {
            let word = normalize_word(raw);
            if word.is_empty() {
                continue;
            }

            if NEGATORS.contains(&word.as_str()) {
                negation_left = NEGATION_WINDOW;
                continue;
            }

            if INTENSIFIERS.contains(&word.as_str()) {
                intensify = true;
                negation_left = negation_left.saturating_sub(1);
                continue;
            }

            match self.weight(&word) {
                Some(weight) => {
                    let mut value = weight;
                    if intensify {
                        value *= INTENSIFIER_FACTOR;
                    }
                    if negation_left > 0 {
                        value *= NEGATION_FACTOR;
                    }
                    hits.push(value);
                    negation_left = 0;
                }
                None => {
                    negation_left = negation_left.saturating_sub(1);
                }
            }
            intensify = false;
        }

        if hits.is_empty() {
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let denom = hits.len() as f32;
        (hits.iter().sum::<f32>() / denom).clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f32 {
        self.score(text)
    }
}

/// Score a text string with the built-in lexicon.
///
/// Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    LexiconScorer::default().score(text)
}

/// Lowercases and strips surrounding non-alphabetic characters, keeping
/// inner apostrophes (`don't`). Typographic apostrophes become ASCII.
fn normalize_word(raw: &str) -> String {
    raw.replace('\u{2019}', "'")
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_lowercase()
}
