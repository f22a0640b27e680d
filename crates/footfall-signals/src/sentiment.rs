//! Rule-based polarity scoring for short social-media texts.
//!
//! A VADER-style model: lexicon valences adjusted by boosters, negation,
//! capitalisation, contrastive "but" and punctuation emphasis, then squashed
//! into a compound score in `[-1.0, 1.0]`. Scoring is deterministic; the same
//! text always produces the same scores.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::lexicon::{vader_lexicon, BOOSTERS, C_INCR, NEGATIONS, N_SCALAR};

/// Normalisation constant approximating the maximum expected raw sum.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

static DEFAULT_ANALYZER: LazyLock<SentimentAnalyzer> = LazyLock::new(SentimentAnalyzer::new);

/// Polarity scores for one text.
///
/// `neg`, `neu` and `pos` are proportions of the text's sentiment mass and sum
/// to roughly 1.0 for non-empty text. `compound` is the net polarity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Analyzer backed by the full VADER lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lexicon(vader_lexicon())
    }

    /// Analyzer backed by a caller-supplied lexicon. Keys are lowercased.
    pub fn with_lexicon<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            lexicon: entries
                .into_iter()
                .map(|(word, valence)| (word.to_lowercase(), valence))
                .collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Score a single text. Empty text scores all zeros.
    #[must_use]
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let is_cap_diff = allcap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lower[i].as_str();
            if self.boosters.contains_key(word) {
                sentiments.push(0.0);
                continue;
            }
            if word == "kind" && lower.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence(&tokens, &lower, i, is_cap_diff));
        }

        but_check(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    /// Score each text independently; absent entries score as empty text.
    pub fn score_texts<'a, I>(&self, texts: I) -> Vec<SentimentScores>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        texts
            .into_iter()
            .map(|text| self.polarity_scores(text.unwrap_or("")))
            .collect()
    }

    fn valence(&self, tokens: &[&str], lower: &[String], i: usize, is_cap_diff: bool) -> f64 {
        let Some(&base) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" ahead of another scored word acts as a negator, not a word.
        if lower[i] == "no"
            && lower
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains_key(next))
        {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(tokens[i]) && is_cap_diff {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let j = i - (start_i + 1);
            if self.lexicon.contains_key(&lower[j]) {
                continue;
            }
            let mut scalar = self.scalar_inc_dec(tokens[j], &lower[j], valence, is_cap_diff);
            if start_i == 1 && scalar != 0.0 {
                scalar *= 0.95;
            }
            if start_i == 2 && scalar != 0.0 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = self.negation_check(valence, lower, start_i, i);
        }

        self.least_check(valence, lower, i)
    }

    fn scalar_inc_dec(&self, token: &str, lower: &str, valence: f64, is_cap_diff: bool) -> f64 {
        let Some(&boost) = self.boosters.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if is_upper(token) && is_cap_diff {
            scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        scalar
    }

    fn is_negated(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't")
    }

    fn negation_check(&self, valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
        let never_so = |w: &str| w == "so" || w == "this";
        match start_i {
            0 => {
                if self.is_negated(&lower[i - 1]) {
                    return valence * N_SCALAR;
                }
            }
            1 => {
                if lower[i - 2] == "never" && never_so(lower[i - 1].as_str()) {
                    return valence * 1.25;
                } else if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                    return valence;
                } else if self.is_negated(&lower[i - 2]) {
                    return valence * N_SCALAR;
                }
            }
            _ => {
                if lower[i - 3] == "never"
                    && (never_so(lower[i - 2].as_str()) || never_so(lower[i - 1].as_str()))
                {
                    return valence * 1.25;
                } else if lower[i - 3] == "without"
                    && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt")
                {
                    return valence;
                } else if self.is_negated(&lower[i - 3]) {
                    return valence * N_SCALAR;
                }
            }
        }
        valence
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 0 && lower[i - 1] == "least" && !self.lexicon.contains_key(&lower[i - 1]) {
            if i > 1 && matches!(lower[i - 2].as_str(), "at" | "very") {
                return valence;
            }
            return valence * N_SCALAR;
        }
        valence
    }
}

/// Shared analyzer over the built-in lexicon.
pub(crate) fn default_analyzer() -> &'static SentimentAnalyzer {
    &DEFAULT_ANALYZER
}

/// Score one text with the built-in lexicon.
#[must_use]
pub fn polarity_scores(text: &str) -> SentimentScores {
    DEFAULT_ANALYZER.polarity_scores(text)
}

/// Score each text with the built-in lexicon; `None` entries score as `""`.
pub fn score_texts<'a, I>(texts: I) -> Vec<SentimentScores>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    DEFAULT_ANALYZER.score_texts(texts)
}

/// Split on whitespace, trimming surrounding punctuation from words but not
/// from short tokens such as emoticons. Single-character tokens are dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

/// True if the token has a cased character and no lowercase ones.
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are written in ALL CAPS.
fn allcap_differential(tokens: &[&str]) -> bool {
    let allcaps = tokens.iter().filter(|t| is_upper(t)).count();
    let differential = tokens.len() - allcaps;
    differential > 0 && differential < tokens.len()
}

/// Words before "but" are dampened, words after it emphasised.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but_index {
            *sentiment *= 0.5;
        } else if i > but_index {
            *sentiment *= 1.5;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[allow(clippy::cast_precision_loss)]
fn score_valence(sentiments: &[f64], text: &str) -> SentimentScores {
    if sentiments.is_empty() {
        return SentimentScores::default();
    }

    let amp = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += amp;
    } else if sum < 0.0 {
        sum -= amp;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0_usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += amp;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= amp;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    SentimentScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
#[path = "sentiment_test.rs"]
mod tests;
