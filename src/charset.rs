//! Character classes and the generation alphabet.

use std::fmt;

use crate::config::PolicyConfig;
use crate::error::PolicyEngineError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// One of the four character classes a policy requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Returns the class of `ch`, or `None` if it belongs to none of them
    /// (whitespace, non-ASCII letters, characters outside the symbol alphabet).
    pub fn classify(ch: char, symbols: &[char]) -> Option<Self> {
        match ch {
            'A'..='Z' => Some(Self::Upper),
            'a'..='z' => Some(Self::Lower),
            '0'..='9' => Some(Self::Digit),
            _ if symbols.contains(&ch) => Some(Self::Symbol),
            _ => None,
        }
    }

    /// Returns `true` if `ch` is a member of this class under `symbols`.
    pub fn contains(self, ch: char, symbols: &[char]) -> bool {
        Self::classify(ch, symbols) == Some(self)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upper => "uppercase",
            Self::Lower => "lowercase",
            Self::Digit => "numbers",
            Self::Symbol => "special characters",
        };
        f.write_str(name)
    }
}

/// Checks that a symbol alphabet is usable as the fourth character class.
pub(crate) fn check_symbol_alphabet(symbols: &[char]) -> Result<(), PolicyEngineError> {
    if symbols.is_empty() {
        return Err(PolicyEngineError::Config(
            "symbol alphabet must not be empty".to_string(),
        ));
    }
    if let Some(ch) = symbols.iter().find(|c| c.is_ascii_alphanumeric()) {
        return Err(PolicyEngineError::Config(format!(
            "symbol alphabet overlaps letters or digits at {:?}",
            ch
        )));
    }
    Ok(())
}

/// The four disjoint character sets of a policy and their union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClasses {
    upper: Vec<char>,
    lower: Vec<char>,
    digit: Vec<char>,
    symbol: Vec<char>,
    alphabet: Vec<char>,
}

impl CharacterClasses {
    pub fn for_policy(policy: &PolicyConfig) -> Result<Self, PolicyEngineError> {
        let symbol = policy.symbol_alphabet().to_vec();
        check_symbol_alphabet(&symbol)?;

        let upper: Vec<char> = UPPERCASE.chars().collect();
        let lower: Vec<char> = LOWERCASE.chars().collect();
        let digit: Vec<char> = DIGITS.chars().collect();
        let alphabet = [&upper, &lower, &digit, &symbol]
            .into_iter()
            .flatten()
            .copied()
            .collect();

        Ok(Self {
            upper,
            lower,
            digit,
            symbol,
            alphabet,
        })
    }

    pub fn set(&self, class: CharacterClass) -> &[char] {
        match class {
            CharacterClass::Upper => &self.upper,
            CharacterClass::Lower => &self.lower,
            CharacterClass::Digit => &self.digit,
            CharacterClass::Symbol => &self.symbol,
        }
    }

    /// Union of the four sets.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

/// Size of a class's alphabet without materialising the registry.
pub(crate) fn class_size(class: CharacterClass, policy: &PolicyConfig) -> usize {
    match class {
        CharacterClass::Upper | CharacterClass::Lower => 26,
        CharacterClass::Digit => 10,
        CharacterClass::Symbol => policy.symbol_alphabet().len(),
    }
}
