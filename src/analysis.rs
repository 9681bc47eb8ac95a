//! Public operations consumed by the serving layer.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::error::PolicyEngineError;
use crate::scoring::{ScoreResult, score_result};
use crate::validator::{ValidationResult, validate_password};

/// Password plus its validation and score.
#[derive(Debug)]
pub struct FullAnalysis {
    pub password: SecretString,
    /// `true` when the password was generated rather than supplied.
    pub generated: bool,
    pub validation: ValidationResult,
    pub score: ScoreResult,
}

/// Validates `password` against `policy`.
pub fn validate(password: &SecretString, policy: &PolicyConfig) -> ValidationResult {
    validate_password(password.expose_secret(), policy)
}

/// Generates a password; see [`crate::generator::generate`].
pub fn generate(length: Option<usize>, policy: &PolicyConfig) -> Result<SecretString, PolicyEngineError> {
    crate::generator::generate(length, policy)
}

/// Scores and labels `password`.
pub fn score(password: &SecretString, policy: &PolicyConfig) -> ScoreResult {
    score_result(password.expose_secret(), policy)
}

/// Validates and scores `password`, generating one of `length` characters
/// first if none is given.
///
/// # Errors
///
/// Only generation can fail; a supplied password is always analysed.
pub fn full_analysis(
    password: Option<&SecretString>,
    length: Option<usize>,
    policy: &PolicyConfig,
) -> Result<FullAnalysis, PolicyEngineError> {
    let (password, generated) = match password {
        Some(password) => (SecretString::new(password.expose_secret().into()), false),
        None => (generate(length, policy)?, true),
    };

    let validation = validate(&password, policy);
    let score = score(&password, policy);

    Ok(FullAnalysis {
        password,
        generated,
        validation,
        score,
    })
}
