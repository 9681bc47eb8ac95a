//! Entropy estimation, composite scoring and labelling.

use std::fmt;

use crate::charset::class_size;
use crate::config::PolicyConfig;
use crate::sections::{
    char_length, has_dominant_char, longest_repeat_run, observed_classes, pattern_found,
};

pub const MAX_SCORE: u8 = 10;

/// Categorical strength derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        f.write_str(label)
    }
}

/// Score in `0..=10` and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub label: Strength,
}

impl ScoreResult {
    /// Scores above [`MAX_SCORE`] saturate.
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            score,
            label: label_score(score),
        }
    }
}

/// Maps a score to its label: `< 4` weak, `4..7` medium, `>= 7` strong.
pub fn label_score(score: u8) -> Strength {
    match score {
        0..=3 => Strength::Weak,
        4..=6 => Strength::Medium,
        _ => Strength::Strong,
    }
}

/// Estimates entropy in bits as `len * log2(charset_size)`.
///
/// `charset_size` sums the alphabet sizes of the classes observed in the
/// password. Characters outside every class count toward the length but add
/// nothing to the charset. Returns `0.0` for an empty password or a charset
/// of at most one character.
pub fn estimate_entropy(password: &str, policy: &PolicyConfig) -> f64 {
    let length = char_length(password);
    let charset_size: usize = observed_classes(password, policy)
        .into_iter()
        .map(|class| class_size(class, policy))
        .sum();

    if length == 0 || charset_size <= 1 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

fn raw_score(password: &str, policy: &PolicyConfig) -> f64 {
    let weights = policy.weights();
    let rules = policy.penalties();

    let length = char_length(password).min(weights.length_saturation) as f64
        / weights.length_saturation as f64;
    let variety = observed_classes(password, policy).len() as f64;
    let entropy =
        (estimate_entropy(password, policy) / weights.entropy_saturation_bits).min(1.0);

    let mut score = weights.length * length + weights.variety * variety + weights.entropy * entropy;

    if longest_repeat_run(password) > rules.max_repeat_run {
        score -= rules.repeat_penalty;
    }
    if has_dominant_char(password) {
        score -= rules.dominant_char_penalty;
    }
    if pattern_found(password, rules) {
        score -= rules.pattern_penalty;
    }
    score
}

/// Composite score of length, class variety and entropy, minus penalties,
/// clamped to `0..=10` and rounded half to even.
pub fn score_password(password: &str, policy: &PolicyConfig) -> u8 {
    let raw = raw_score(password, policy);
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, f64::from(MAX_SCORE)).round_ties_even() as u8
}

/// Scores and labels `password`.
pub fn score_result(password: &str, policy: &PolicyConfig) -> ScoreResult {
    ScoreResult::from_score(score_password(password, policy))
}
