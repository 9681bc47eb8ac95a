//! Password generator - class coverage by construction.
//!
//! One character is drawn from each character class, the rest from the full
//! alphabet, and the result is shuffled. The number of random draws always
//! equals the requested length; nothing is ever rejected or retried.

use secrecy::SecretString;
use secrecy::zeroize::Zeroize;

use crate::charset::{CharacterClass, CharacterClasses};
use crate::config::PolicyConfig;
use crate::error::PolicyEngineError;
use crate::random::{OsRandom, SecureRandomSource};

/// Generates a password with the operating-system CSPRNG.
///
/// `None` uses the policy's default generation length.
///
/// # Errors
///
/// - [`PolicyEngineError::InvalidLength`] if the length is outside the policy bounds
/// - [`PolicyEngineError::Policy`] if the length cannot hold one character per class
pub fn generate(length: Option<usize>, policy: &PolicyConfig) -> Result<SecretString, PolicyEngineError> {
    generate_with(&OsRandom, length, policy)
}

/// Same as [`generate`] with an injected random source.
pub fn generate_with<R>(
    rng: &R,
    length: Option<usize>,
    policy: &PolicyConfig,
) -> Result<SecretString, PolicyEngineError>
where
    R: SecureRandomSource,
{
    let length = length.unwrap_or(policy.default_generate_length());

    if !(policy.min_length()..=policy.max_length()).contains(&length) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Password generation rejected: length {} outside {}..={}",
            length,
            policy.min_length(),
            policy.max_length()
        );
        return Err(PolicyEngineError::InvalidLength {
            requested: length,
            min: policy.min_length(),
            max: policy.max_length(),
        });
    }

    let required = CharacterClass::ALL.len();
    if length < required {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Password generation rejected: length {} below {} required classes",
            length,
            required
        );
        return Err(PolicyEngineError::Policy(format!(
            "length {} cannot hold one character from each of the {} required classes",
            length, required
        )));
    }

    let classes = CharacterClasses::for_policy(policy)?;
    let mut chars = Vec::with_capacity(length);

    for class in CharacterClass::ALL {
        chars.push(pick(rng, classes.set(class))?);
    }
    for _ in required..length {
        chars.push(pick(rng, classes.alphabet())?);
    }
    rng.shuffle(&mut chars);

    let password: String = chars.iter().collect();
    chars.zeroize();

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of length {}", length);

    Ok(SecretString::new(password.into()))
}

fn pick<R>(rng: &R, set: &[char]) -> Result<char, PolicyEngineError>
where
    R: SecureRandomSource,
{
    rng.choose_one(set)
        .copied()
        .ok_or_else(|| PolicyEngineError::Config("character set is empty".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_password;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    /// Always picks the first element and never shuffles.
    struct FirstElement;

    impl SecureRandomSource for FirstElement {
        fn choose_one<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
            items.first()
        }

        fn shuffle<T>(&self, _items: &mut [T]) {}
    }

    fn small_policy() -> PolicyConfig {
        PolicyConfig::builder()
            .min_length(1)
            .max_length(64)
            .default_generate_length(10)
            .build()
            .unwrap()
    }

    #[test]
    fn test_generate_default_length() {
        let policy = PolicyConfig::default();
        let password = generate(None, &policy).unwrap();
        assert_eq!(password.expose_secret().chars().count(), 16);
    }

    #[test]
    fn test_generate_satisfies_policy_for_every_length() {
        let policy = small_policy();
        for length in 4..=64 {
            for _ in 0..20 {
                let password = generate(Some(length), &policy).unwrap();
                let pwd = password.expose_secret();
                assert_eq!(pwd.chars().count(), length);
                assert!(
                    validate_password(pwd, &policy).overall_result,
                    "generated password of length {} fails policy",
                    length
                );
            }
        }
    }

    #[test]
    fn test_generate_minimum_class_length() {
        let policy = small_policy();
        let password = generate(Some(4), &policy).unwrap();
        let pwd = password.expose_secret();
        assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_digit()));
        assert!(pwd.chars().any(|c| policy.symbol_alphabet().contains(&c)));
    }

    #[test]
    fn test_generate_below_min_length() {
        let policy = PolicyConfig::default();
        let result = generate(Some(11), &policy);
        assert_eq!(
            result.err(),
            Some(PolicyEngineError::InvalidLength {
                requested: 11,
                min: 12,
                max: 128
            })
        );
    }

    #[test]
    fn test_generate_above_max_length() {
        let policy = PolicyConfig::default();
        let result = generate(Some(129), &policy);
        assert!(matches!(
            result,
            Err(PolicyEngineError::InvalidLength { requested: 129, .. })
        ));
    }

    #[test]
    fn test_generate_length_below_class_count() {
        let policy = small_policy();
        for length in 1..4 {
            let result = generate(Some(length), &policy);
            assert!(matches!(result, Err(PolicyEngineError::Policy(_))));
        }
    }

    #[test]
    fn test_generate_uses_policy_symbols_only() {
        let policy = PolicyConfig::builder()
            .min_length(4)
            .symbols("-_")
            .build()
            .unwrap();
        for _ in 0..50 {
            let password = generate(Some(32), &policy).unwrap();
            assert!(password
                .expose_secret()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn test_generate_randomness_non_repetition() {
        let policy = PolicyConfig::default();
        let outputs: HashSet<String> = (0..1000)
            .map(|_| generate(Some(16), &policy).unwrap().expose_secret().to_string())
            .collect();
        assert!(outputs.len() >= 990, "only {} distinct outputs", outputs.len());
    }

    #[test]
    fn test_degenerate_source_is_detected() {
        let policy = PolicyConfig::default();
        let outputs: HashSet<String> = (0..1000)
            .map(|_| {
                generate_with(&FirstElement, Some(16), &policy)
                    .unwrap()
                    .expose_secret()
                    .to_string()
            })
            .collect();
        assert_eq!(outputs.len(), 1);
    }

    #[test]
    fn test_generate_with_injected_source_draws_classes_first() {
        let policy = PolicyConfig::default();
        let password = generate_with(&FirstElement, Some(12), &policy).unwrap();
        // class draws then fill draws from the start of the alphabet, unshuffled
        assert_eq!(password.expose_secret(), "Aa0!AAAAAAAA");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_generate_concurrently() {
        let policy = std::sync::Arc::new(PolicyConfig::default());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let policy = policy.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                (0..100)
                    .map(|_| generate(Some(20), &policy).unwrap().expose_secret().to_string())
                    .collect::<Vec<_>>()
            }));
        }

        let mut all = HashSet::new();
        for handle in handles {
            for pwd in handle.await.expect("generation task panicked") {
                assert!(validate_password(&pwd, &policy).overall_result);
                all.insert(pwd);
            }
        }
        assert_eq!(all.len(), 800);
    }
}
