//! Password policy engine
//!
//! This library generates cryptographically strong passwords, validates
//! passwords against a character-class policy and scores them on a 0-10
//! scale with a weak/medium/strong label.
//!
//! Every operation takes the [`PolicyConfig`] explicitly; there is no global
//! state, so the functions can be called concurrently without locking.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`PolicyConfig::from_env`]:
//!
//! - `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`, `PWD_DEFAULT_LENGTH`
//! - `PWD_SYMBOLS`: symbol alphabet (default: ASCII punctuation)
//! - `PWD_PATTERNS_PATH`: file with extra weak patterns, one per line
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PolicyConfig, full_analysis, generate, score, validate};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let policy = PolicyConfig::default();
//!
//! let password = generate(Some(20), &policy).expect("20 is within the default bounds");
//! assert_eq!(password.expose_secret().chars().count(), 20);
//! assert!(validate(&password, &policy).overall_result);
//!
//! let candidate = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = score(&candidate, &policy);
//! println!("Score: {} ({})", result.score, result.label);
//!
//! let analysis = full_analysis(None, Some(24), &policy).expect("valid length");
//! assert!(analysis.generated);
//! ```

// Internal modules
mod analysis;
mod charset;
mod config;
mod error;
mod generator;
mod random;
mod scoring;
mod sections;
mod validator;

// Public API
pub use analysis::{FullAnalysis, full_analysis, generate, score, validate};
pub use charset::{CharacterClass, CharacterClasses};
pub use config::{
    DEFAULT_PATTERNS, DEFAULT_SYMBOLS, PenaltyRules, PolicyConfig, PolicyConfigBuilder,
    ScoringWeights, get_patterns_path, load_patterns_from_path,
};
pub use error::{ConfigLoadError, PolicyEngineError};
pub use generator::generate_with;
pub use random::{OsRandom, SecureRandomSource};
pub use scoring::{MAX_SCORE, ScoreResult, Strength, estimate_entropy, label_score, score_password};
pub use validator::{Rule, ValidationResult, validate_password};

/// Individual rule predicates.
pub mod rules {
    pub use crate::sections::{
        char_length, contains_known_pattern, digit_ok, has_dominant_char, has_sequential_run,
        length_ok, longest_repeat_run, lower_ok, observed_classes, pattern_found, symbol_ok,
        upper_ok,
    };
}
