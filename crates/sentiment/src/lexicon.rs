//! Valence-lexicon sentiment scorer over a user-supplied word list.
//!
//! Each known word contributes its valence, adjusted by nearby intensity
//! modifiers, negations, capitalization and a contrastive "but". The summed
//! valence plus punctuation emphasis is squashed into a compound score in
//! [-1, 1]; `pos`/`neg`/`neu` are the shares of positive, negative and
//! neutral mass.

use std::collections::HashMap;
use std::path::Path;

use reviewlens_core::{ReviewError, Sentiment};
use tracing::info;

use crate::lexicon_data::{BOOSTERS, NEGATIONS};
use crate::traits::SentimentScorer;

const BOOST_STEP: f64 = 0.293;
const CAPS_EMPHASIS: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_STEP: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const NORMALIZE_ALPHA: f64 = 15.0;
/// Damping for modifiers one, two and three words before the scored word.
const WINDOW_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
}

impl LexiconScorer {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            lexicon: entries
                .into_iter()
                .map(|(word, valence)| (word.to_lowercase(), valence))
                .collect(),
        }
    }

    /// Load a tab-separated lexicon: `word<TAB>valence[<TAB>...]` per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self, ReviewError> {
        let raw = std::fs::read_to_string(path)?;
        let scorer = Self::parse_lexicon(&raw)?;
        info!("Loaded {} lexicon entries from {}", scorer.len(), path.display());
        Ok(scorer)
    }

    pub fn parse_lexicon(raw: &str) -> Result<Self, ReviewError> {
        let mut entries = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut cols = line.split('\t');
            let word = cols.next().unwrap_or_default().trim();
            let valence = cols
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .ok_or_else(|| ReviewError::Lexicon(format!("line {}: expected word<TAB>valence", idx + 1)))?;
            if word.is_empty() {
                return Err(ReviewError::Lexicon(format!("line {}: empty word", idx + 1)));
            }
            entries.push((word.to_string(), valence));
        }
        if entries.is_empty() {
            return Err(ReviewError::Lexicon("lexicon has no entries".into()));
        }
        Ok(Self::from_entries(entries))
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn valence_at(&self, tokens: &[Token], i: usize, caps_differ: bool) -> f64 {
        let token = &tokens[i];
        if booster_weight(&token.lower).is_some() {
            return 0.0;
        }
        if token.lower == "kind" && tokens.get(i + 1).is_some_and(|t| t.lower == "of") {
            return 0.0;
        }
        let Some(&base) = self.lexicon.get(&token.lower) else {
            return 0.0;
        };

        let mut valence = base;
        if caps_differ && token.all_caps {
            valence += CAPS_EMPHASIS.copysign(valence);
        }

        for (distance, damping) in WINDOW_DAMPING.iter().enumerate() {
            let Some(prev) = i.checked_sub(distance + 1).map(|j| &tokens[j]) else {
                break;
            };
            if self.lexicon.contains_key(&prev.lower) {
                continue;
            }
            if let Some(weight) = booster_weight(&prev.lower) {
                let mut scalar = BOOST_STEP * weight;
                if valence < 0.0 {
                    scalar = -scalar;
                }
                if caps_differ && prev.all_caps {
                    scalar += CAPS_EMPHASIS.copysign(valence);
                }
                valence += scalar * damping;
            }
        }

        for distance in 1..=WINDOW_DAMPING.len() {
            match i.checked_sub(distance) {
                Some(j) if is_negation(&tokens[j].lower) => valence *= NEGATION_SCALAR,
                Some(_) => {}
                None => break,
            }
        }

        valence
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> Sentiment {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Sentiment::default();
        }

        let caps_count = tokens.iter().filter(|t| t.all_caps).count();
        let caps_differ = caps_count > 0 && caps_count < tokens.len();

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| self.valence_at(&tokens, i, caps_differ))
            .collect();

        if let Some(but) = tokens.iter().position(|t| t.lower == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < but {
                    *v *= 0.5;
                } else if i > but {
                    *v *= 1.5;
                }
            }
        }

        let emphasis = punctuation_emphasis(text);
        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
        for v in &valences {
            if *v > 0.0 {
                pos_sum += v + 1.0;
            } else if *v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        Sentiment {
            neg: round_to((neg_sum / total).abs(), 3),
            neu: round_to((neu_count / total).abs(), 3),
            pos: round_to((pos_sum / total).abs(), 3),
            compound: round_to(normalize(sum), 4),
        }
    }
}

struct Token {
    lower: String,
    all_caps: bool,
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| word.chars().count() > 1)
        .map(|word| Token {
            lower: word.to_lowercase(),
            all_caps: word.chars().any(char::is_alphabetic)
                && word.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase),
        })
        .collect()
}

fn booster_weight(word: &str) -> Option<f64> {
    BOOSTERS.iter().find(|(w, _)| *w == word).map(|(_, weight)| *weight)
}

fn is_negation(word: &str) -> bool {
    if word.ends_with("n't") {
        return true;
    }
    let bare: String = word.chars().filter(|c| *c != '\'').collect();
    NEGATIONS.contains(&bare.as_str())
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = if questions > 1 {
        (questions as f64 * QUESTION_STEP).min(MAX_QUESTION_EMPHASIS)
    } else {
        0.0
    };
    exclamations as f64 * EXCLAMATION_STEP + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
