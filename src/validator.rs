//! Policy validation - runs every rule and reports the outcome per rule.

use std::fmt;

use crate::charset::CharacterClass;
use crate::config::PolicyConfig;
use crate::sections::{digit_ok, length_ok, lower_ok, symbol_ok, upper_ok};

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Class(CharacterClass),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => f.write_str("length"),
            Self::Class(class) => write!(f, "{}", class),
        }
    }
}

/// Outcome of every rule for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub length_ok: bool,
    pub upper_ok: bool,
    pub lower_ok: bool,
    pub digit_ok: bool,
    pub symbol_ok: bool,
    /// Conjunction of the five rules.
    pub overall_result: bool,
}

impl ValidationResult {
    /// Rules that did not pass, length first.
    pub fn failed_rules(&self) -> Vec<Rule> {
        [
            (self.length_ok, Rule::Length),
            (self.upper_ok, Rule::Class(CharacterClass::Upper)),
            (self.lower_ok, Rule::Class(CharacterClass::Lower)),
            (self.digit_ok, Rule::Class(CharacterClass::Digit)),
            (self.symbol_ok, Rule::Class(CharacterClass::Symbol)),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, rule)| rule)
        .collect()
    }

    /// Human-readable reasons for the failed rules. Never includes the password.
    pub fn reasons(&self, policy: &PolicyConfig) -> Vec<String> {
        let mut reasons = Vec::new();
        if !self.length_ok {
            reasons.push(format!(
                "Password must be between {} and {} characters",
                policy.min_length(),
                policy.max_length()
            ));
        }

        let missing: Vec<String> = self
            .failed_rules()
            .into_iter()
            .filter(|rule| matches!(rule, Rule::Class(_)))
            .map(|rule| rule.to_string())
            .collect();
        if !missing.is_empty() {
            reasons.push(format!("Missing: {}", missing.join(", ")));
        }
        reasons
    }
}

/// Evaluates every rule of `policy` against `password`.
///
/// Total over all strings; an empty password fails every rule.
pub fn validate_password(password: &str, policy: &PolicyConfig) -> ValidationResult {
    let length_ok = length_ok(password, policy);
    let upper_ok = upper_ok(password);
    let lower_ok = lower_ok(password);
    let digit_ok = digit_ok(password);
    let symbol_ok = symbol_ok(password, policy);

    ValidationResult {
        length_ok,
        upper_ok,
        lower_ok,
        digit_ok,
        symbol_ok,
        overall_result: length_ok && upper_ok && lower_ok && digit_ok && symbol_ok,
    }
}
