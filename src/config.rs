//! Policy configuration
//!
//! [`PolicyConfig`] is an immutable value built once by the caller and passed
//! by reference into every core operation. It can be built in code through
//! [`PolicyConfig::builder`] or loaded from the environment.
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`, `PWD_DEFAULT_LENGTH`: length bounds
//! - `PWD_SYMBOLS`: symbol alphabet (default: ASCII punctuation)
//! - `PWD_PATTERNS_PATH`: file with extra weak patterns, one per line

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::charset::check_symbol_alphabet;
use crate::error::{ConfigLoadError, PolicyEngineError};

pub const DEFAULT_MIN_LENGTH: usize = 12;
pub const DEFAULT_MAX_LENGTH: usize = 128;
pub const DEFAULT_GENERATE_LENGTH: usize = 16;

/// ASCII punctuation.
pub const DEFAULT_SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Sequential and keyboard patterns penalised by the scorer.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "0123", "1234", "2345", "3456", "4567", "5678", "6789", "7890", "abcd", "qwerty", "asdfgh",
    "zxcvbn", "qazwsx", "1qaz", "password", "letmein", "admin",
];

const MIN_LENGTH_VAR: &str = "PWD_MIN_LENGTH";
const MAX_LENGTH_VAR: &str = "PWD_MAX_LENGTH";
const DEFAULT_LENGTH_VAR: &str = "PWD_DEFAULT_LENGTH";
const SYMBOLS_VAR: &str = "PWD_SYMBOLS";
const PATTERNS_PATH_VAR: &str = "PWD_PATTERNS_PATH";

/// Weights of the three score contributions.
///
/// Length and entropy are normalised to `0.0..=1.0` against their saturation
/// points before weighting; variety is the raw count of classes present (0-4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub length: f64,
    pub variety: f64,
    pub entropy: f64,
    /// Length (in characters) at which the length contribution saturates.
    pub length_saturation: usize,
    /// Entropy (in bits) at which the entropy contribution saturates.
    pub entropy_saturation_bits: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length: 4.0,
            variety: 1.5,
            entropy: 4.0,
            length_saturation: 20,
            entropy_saturation_bits: 40.0,
        }
    }
}

/// Score deductions for weak structure.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyRules {
    /// Longest tolerated run of one repeated character.
    pub max_repeat_run: usize,
    pub repeat_penalty: f64,
    /// Applied when one character makes up more than half the password.
    pub dominant_char_penalty: f64,
    pub pattern_penalty: f64,
    /// Minimum length of an ascending/descending code-point run counted as a pattern.
    pub sequential_run: usize,
    /// Lowercase substrings matched case-insensitively.
    pub known_patterns: Vec<String>,
}

impl Default for PenaltyRules {
    fn default() -> Self {
        Self {
            max_repeat_run: 2,
            repeat_penalty: 2.0,
            dominant_char_penalty: 2.0,
            pattern_penalty: 2.0,
            sequential_run: 4,
            known_patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Immutable password policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    min_length: usize,
    max_length: usize,
    default_generate_length: usize,
    symbol_alphabet: Vec<char>,
    weights: ScoringWeights,
    penalties: PenaltyRules,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            default_generate_length: DEFAULT_GENERATE_LENGTH,
            symbol_alphabet: DEFAULT_SYMBOLS.chars().collect(),
            weights: ScoringWeights::default(),
            penalties: PenaltyRules::default(),
        }
    }
}

impl PolicyConfig {
    pub fn builder() -> PolicyConfigBuilder {
        PolicyConfigBuilder::default()
    }

    /// Loads a policy from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A length variable is not an unsigned integer
    /// - The pattern file is missing, unreadable or empty
    /// - The resulting policy is inconsistent
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let mut builder = Self::builder();

        if let Some(min) = read_usize_var(MIN_LENGTH_VAR)? {
            builder = builder.min_length(min);
        }
        if let Some(max) = read_usize_var(MAX_LENGTH_VAR)? {
            builder = builder.max_length(max);
        }
        if let Some(default_length) = read_usize_var(DEFAULT_LENGTH_VAR)? {
            builder = builder.default_generate_length(default_length);
        }
        if let Ok(symbols) = std::env::var(SYMBOLS_VAR) {
            builder = builder.symbols(symbols.trim());
        }
        if let Some(path) = get_patterns_path() {
            builder = builder.extra_patterns(load_patterns_from_path(&path)?);
        }

        let policy = builder.build()?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password policy loaded: length {}..={}, default {}, {} symbols, {} patterns",
            policy.min_length,
            policy.max_length,
            policy.default_generate_length,
            policy.symbol_alphabet.len(),
            policy.penalties.known_patterns.len()
        );

        Ok(policy)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn default_generate_length(&self) -> usize {
        self.default_generate_length
    }

    pub fn symbol_alphabet(&self) -> &[char] {
        &self.symbol_alphabet
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn penalties(&self) -> &PenaltyRules {
        &self.penalties
    }
}

/// Builder for [`PolicyConfig`]. Every value is checked in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PolicyConfigBuilder {
    min_length: usize,
    max_length: usize,
    default_generate_length: Option<usize>,
    symbols: String,
    weights: ScoringWeights,
    penalties: PenaltyRules,
}

impl Default for PolicyConfigBuilder {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            default_generate_length: None,
            symbols: DEFAULT_SYMBOLS.to_string(),
            weights: ScoringWeights::default(),
            penalties: PenaltyRules::default(),
        }
    }
}

impl PolicyConfigBuilder {
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// When not set, the default (16) is clamped into `min_length..=max_length`.
    pub fn default_generate_length(mut self, length: usize) -> Self {
        self.default_generate_length = Some(length);
        self
    }

    /// Sets the symbol alphabet. Duplicates are dropped, first occurrence wins.
    pub fn symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = symbols.into();
        self
    }

    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn penalties(mut self, penalties: PenaltyRules) -> Self {
        self.penalties = penalties;
        self
    }

    /// Appends patterns to the known pattern list.
    pub fn extra_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.penalties
            .known_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<PolicyConfig, PolicyEngineError> {
        if self.min_length == 0 {
            return Err(PolicyEngineError::Config(
                "min_length must be at least 1".to_string(),
            ));
        }
        if self.max_length < self.min_length {
            return Err(PolicyEngineError::Config(format!(
                "max_length {} is smaller than min_length {}",
                self.max_length, self.min_length
            )));
        }

        let default_generate_length = match self.default_generate_length {
            Some(length) if !(self.min_length..=self.max_length).contains(&length) => {
                return Err(PolicyEngineError::Config(format!(
                    "default length {} is outside {}..={}",
                    length, self.min_length, self.max_length
                )));
            }
            Some(length) => length,
            None => DEFAULT_GENERATE_LENGTH.clamp(self.min_length, self.max_length),
        };

        let mut seen = HashSet::new();
        let symbol_alphabet: Vec<char> = self.symbols.chars().filter(|c| seen.insert(*c)).collect();
        check_symbol_alphabet(&symbol_alphabet)?;

        check_weights(&self.weights)?;

        let mut penalties = self.penalties;
        check_penalties(&penalties)?;
        let mut seen = HashSet::new();
        penalties.known_patterns = penalties
            .known_patterns
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty() && seen.insert(p.clone()))
            .collect();

        Ok(PolicyConfig {
            min_length: self.min_length,
            max_length: self.max_length,
            default_generate_length,
            symbol_alphabet,
            weights: self.weights,
            penalties,
        })
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), PolicyEngineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PolicyEngineError::Config(format!(
            "{} must be a finite, non-negative number (got {})",
            name, value
        )));
    }
    Ok(())
}

fn check_weights(weights: &ScoringWeights) -> Result<(), PolicyEngineError> {
    check_non_negative("length weight", weights.length)?;
    check_non_negative("variety weight", weights.variety)?;
    check_non_negative("entropy weight", weights.entropy)?;
    check_non_negative("entropy saturation", weights.entropy_saturation_bits)?;

    if weights.length_saturation == 0 || weights.entropy_saturation_bits == 0.0 {
        return Err(PolicyEngineError::Config(
            "saturation points must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn check_penalties(penalties: &PenaltyRules) -> Result<(), PolicyEngineError> {
    check_non_negative("repeat penalty", penalties.repeat_penalty)?;
    check_non_negative("dominant character penalty", penalties.dominant_char_penalty)?;
    check_non_negative("pattern penalty", penalties.pattern_penalty)?;

    if penalties.sequential_run < 2 {
        return Err(PolicyEngineError::Config(
            "sequential_run must be at least 2".to_string(),
        ));
    }
    Ok(())
}

fn read_usize_var(name: &'static str) -> Result<Option<usize>, ConfigLoadError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(None);
    };
    match value.trim().parse::<usize>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigLoadError::InvalidVar { name, value }),
    }
}

/// Returns the pattern file path from `PWD_PATTERNS_PATH`, if set.
pub fn get_patterns_path() -> Option<PathBuf> {
    std::env::var_os(PATTERNS_PATH_VAR).map(PathBuf::from)
}

/// Reads weak patterns from a file, one per line.
///
/// Lines are trimmed and lowercased; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File holds no patterns
pub fn load_patterns_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigLoadError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern file loading FAILED: FileNotFound {:?}", path);
        return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let patterns: Vec<String> = content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.to_lowercase())
        .collect();

    if patterns.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern file loading FAILED: Empty file {:?}", path);
        return Err(ConfigLoadError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Loaded {} patterns from {:?}", patterns.len(), path);

    Ok(patterns)
}
