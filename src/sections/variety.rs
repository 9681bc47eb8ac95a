//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use crate::charset::CharacterClass;
use crate::config::PolicyConfig;

fn has_class(password: &str, class: CharacterClass, policy: &PolicyConfig) -> bool {
    let symbols = policy.symbol_alphabet();
    password.chars().any(|c| class.contains(c, symbols))
}

/// At least one `A-Z`.
pub fn upper_ok(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// At least one `a-z`.
pub fn lower_ok(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// At least one `0-9`.
pub fn digit_ok(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// At least one character from the policy's symbol alphabet.
pub fn symbol_ok(password: &str, policy: &PolicyConfig) -> bool {
    has_class(password, CharacterClass::Symbol, policy)
}

/// Classes actually present in `password`, in [`CharacterClass::ALL`] order.
pub fn observed_classes(password: &str, policy: &PolicyConfig) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| has_class(password, *class, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        assert!(!upper_ok("lowercase123!"));
        assert!(upper_ok("lowerCase123!"));
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        assert!(!lower_ok("UPPERCASE123!"));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        assert!(!digit_ok("NoNumbers!"));
    }

    #[test]
    fn test_variety_section_missing_special() {
        assert!(!symbol_ok("NoSpecial123", &PolicyConfig::default()));
    }

    #[test]
    fn test_variety_section_non_ascii_letters_do_not_count() {
        assert!(!upper_ok("ÉÀÜ"));
        assert!(!lower_ok("éàü"));
        assert!(!digit_ok("٣٤٥"));
    }

    #[test]
    fn test_symbol_follows_policy_alphabet() {
        let policy = PolicyConfig::builder().symbols("!?").build().unwrap();
        assert!(symbol_ok("abc?", &policy));
        assert!(!symbol_ok("abc#", &policy));
        assert!(!symbol_ok("abc def", &policy));
    }

    #[test]
    fn test_observed_classes() {
        let policy = PolicyConfig::default();
        assert_eq!(
            observed_classes("HasAll123!@#", &policy),
            CharacterClass::ALL.to_vec()
        );
        assert_eq!(
            observed_classes("abc123", &policy),
            vec![CharacterClass::Lower, CharacterClass::Digit]
        );
        assert!(observed_classes("", &policy).is_empty());
    }
}
