//! Heuristic password strength scoring.
//!
//! Produces a 0-4 score from length, character-class diversity, and
//! guessability penalties (repeated runs, sequential runs, common
//! passwords). The acceptance floor used by the evaluator is
//! [`StrengthScore::Strong`].

use std::fmt;

use crate::password::Password;
use crate::rules::{has_run_longer_than, MAX_RUN, MIN_LENGTH};

/// Sequential runs of this length or longer ("abcd", "4321") are penalized.
const SEQUENTIAL_RUN: usize = 4;

/// Frequently-guessed passwords that score zero outright.
const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "123456789",
    "12345678",
    "1234567890",
    "abc123",
    "password",
    "password1",
    "password123",
    "contrasena",
    "qwerty",
    "qwerty123",
    "111111",
    "123123",
    "654321",
    "iloveyou",
    "admin",
    "welcome",
    "monkey",
    "dragon",
    "letmein",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthScore {
    VeryWeak = 0,
    Weak = 1,
    Fair = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl StrengthScore {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Qualitative label shown next to the strength meter.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthScore::VeryWeak => "Very weak",
            StrengthScore::Weak => "Weak",
            StrengthScore::Fair => "Fair",
            StrengthScore::Strong => "Strong",
            StrengthScore::VeryStrong => "Very strong",
        }
    }

    fn from_points(points: u8) -> Self {
        match points {
            0 => StrengthScore::VeryWeak,
            1 => StrengthScore::Weak,
            2 => StrengthScore::Fair,
            3 => StrengthScore::Strong,
            _ => StrengthScore::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score the candidate on the 0-4 scale.
pub fn score(password: &Password) -> StrengthScore {
    let value = password.as_str();
    let length = value.chars().count();

    if length == 0 || COMMON_PASSWORDS.contains(&value.to_ascii_lowercase().as_str()) {
        return StrengthScore::VeryWeak;
    }

    let mut points: i32 = match length {
        0..=7 => 0,
        8..=11 => 1,
        12..=15 => 2,
        _ => 3,
    };
    points += (character_classes(value) as i32 - 1).max(0);

    if has_run_longer_than(value, MAX_RUN) {
        points -= 1;
    }
    if has_sequential_run(value, SEQUENTIAL_RUN) {
        points -= 1;
    }
    // A short password is never better than Weak regardless of diversity.
    if length < MIN_LENGTH {
        points = points.min(1);
    }

    StrengthScore::from_points(points.clamp(0, 4) as u8)
}

fn character_classes(value: &str) -> usize {
    let classes = [
        value.chars().any(|c| c.is_ascii_lowercase()),
        value.chars().any(|c| c.is_ascii_uppercase()),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    classes.iter().filter(|present| **present).count()
}

/// Ascending or descending runs of consecutive code points, e.g. "abcd"
/// or "4321".
fn has_sequential_run(value: &str, min_len: usize) -> bool {
    let codepoints: Vec<u32> = value.chars().map(u32::from).collect();

    for direction in [1i64, -1i64] {
        let mut run = 1usize;
        for pair in codepoints.windows(2) {
            if i64::from(pair[1]) - i64::from(pair[0]) == direction {
                run += 1;
                if run >= min_len {
                    return true;
                }
            } else {
                run = 1;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(value: &str) -> StrengthScore {
        score(&Password::new(value))
    }

    #[test]
    fn test_common_passwords_score_zero() {
        assert_eq!(score_of("password"), StrengthScore::VeryWeak);
        assert_eq!(score_of("Qwerty123"), StrengthScore::VeryWeak);
    }

    #[test]
    fn test_short_passwords_cap_at_weak() {
        assert_eq!(score_of("Ab1!"), StrengthScore::Weak);
    }

    #[test]
    fn test_diverse_medium_length_is_strong() {
        assert!(score_of("abcdef1A!") >= StrengthScore::Strong);
    }

    #[test]
    fn test_long_diverse_passphrase_is_very_strong() {
        assert_eq!(score_of("Tr3eHouse!Garden"), StrengthScore::VeryStrong);
    }

    #[test]
    fn test_runs_are_penalized() {
        assert_eq!(score_of("zzzzzzzz"), StrengthScore::VeryWeak);
    }

    #[test]
    fn test_sequential_run_detection() {
        assert!(has_sequential_run("xx1234xx", 4));
        assert!(has_sequential_run("dcba", 4));
        assert!(!has_sequential_run("a1b2c3d4", 4));
    }

    #[test]
    fn test_score_ordering_matches_labels() {
        assert!(StrengthScore::Strong > StrengthScore::Fair);
        assert_eq!(StrengthScore::Strong.value(), 3);
        assert_eq!(StrengthScore::VeryStrong.label(), "Very strong");
    }
}
