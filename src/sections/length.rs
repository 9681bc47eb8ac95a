//! Length section - checks password length against the policy bounds.

use crate::config::PolicyConfig;

/// Number of characters (Unicode scalar values) in `password`.
pub fn char_length(password: &str) -> usize {
    password.chars().count()
}

/// Returns `true` if `min_length <= len(password) <= max_length`.
pub fn length_ok(password: &str, policy: &PolicyConfig) -> bool {
    (policy.min_length()..=policy.max_length()).contains(&char_length(password))
}
