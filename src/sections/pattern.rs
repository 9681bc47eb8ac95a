//! Pattern analysis section - detects repetitive and sequential patterns.

use crate::config::PenaltyRules;

/// Length of the longest run of one repeated character.
pub fn longest_repeat_run(password: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for ch in password.chars() {
        if Some(ch) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(ch);
        }
        longest = longest.max(current);
    }
    longest
}

/// Returns `true` if one character makes up more than half of `password`.
pub fn has_dominant_char(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let mut sorted = chars.clone();
    sorted.sort_unstable();

    sorted
        .chunk_by(|a, b| a == b)
        .any(|group| group.len() * 2 > chars.len())
}

/// Returns `true` if any known pattern occurs in `password`, ignoring case.
pub fn contains_known_pattern(password: &str, patterns: &[String]) -> bool {
    let lowered = password.to_lowercase();
    patterns.iter().any(|p| lowered.contains(p.as_str()))
}

/// Returns `true` if `password` holds `run` or more consecutive characters
/// whose code points step by exactly +1 (or exactly -1), ignoring case.
pub fn has_sequential_run(password: &str, run: usize) -> bool {
    let chars: Vec<u32> = password
        .to_lowercase()
        .chars()
        .map(|c| c as u32)
        .collect();
    if run < 2 || chars.len() < run {
        return false;
    }

    chars.windows(run).any(|window| {
        let ascending = window.windows(2).all(|w| w[1] == w[0] + 1);
        let descending = window.windows(2).all(|w| w[0] == w[1] + 1);
        ascending || descending
    })
}

/// Returns `true` if `password` matches a known or sequential pattern.
pub fn pattern_found(password: &str, rules: &PenaltyRules) -> bool {
    contains_known_pattern(password, &rules.known_patterns)
        || has_sequential_run(password, rules.sequential_run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_section_repetitive_chars() {
        assert_eq!(longest_repeat_run("aaaaBBBB1111"), 4);
        assert_eq!(longest_repeat_run("abAB"), 1);
        assert_eq!(longest_repeat_run("xyyz"), 2);
        assert_eq!(longest_repeat_run(""), 0);
    }

    #[test]
    fn test_dominant_char() {
        assert!(has_dominant_char("aaab"));
        assert!(!has_dominant_char("aabb"));
        assert!(has_dominant_char("a"));
        assert!(!has_dominant_char(""));
        assert!(has_dominant_char("xaxbxcx"));
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        assert!(has_sequential_run("test1234abcd", 4));
        assert!(has_sequential_run("x9876y", 4));
    }

    #[test]
    fn test_pattern_section_sequential_letters() {
        assert!(has_sequential_run("aBcDTest", 4));
        assert!(!has_sequential_run("abab", 4));
        assert!(!has_sequential_run("abc", 4));
    }

    #[test]
    fn test_known_pattern_case_insensitive() {
        let rules = PenaltyRules::default();
        assert!(contains_known_pattern("xxQWERTYxx", &rules.known_patterns));
        assert!(contains_known_pattern("MyPassword!", &rules.known_patterns));
        assert!(!contains_known_pattern("Zk#9mP2$", &rules.known_patterns));
    }

    #[test]
    fn test_pattern_section_strong_password() {
        let rules = PenaltyRules::default();
        assert!(!pattern_found("RandomPass!@#Word", &rules));
    }

    #[test]
    fn test_pattern_section_too_short() {
        let rules = PenaltyRules::default();
        assert!(!pattern_found("ab", &rules));
        assert!(!pattern_found("", &rules));
    }
}
