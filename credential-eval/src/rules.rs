//! Local password rules.
//!
//! Every rule is evaluated independently so the user sees the complete
//! remediation list in one pass, never just the first failure.

use std::fmt;

use crate::password::Password;

/// Characters accepted as "special" by the clinic's password policy.
pub const SPECIAL_CHARACTERS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub const MIN_LENGTH: usize = 8;

/// Longest permitted run of identical consecutive characters.
pub const MAX_RUN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    MissingUppercase,
    MissingDigit,
    MissingSpecial,
    TooShort,
    RepeatedRun,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::MissingUppercase => {
                write!(f, "Must contain at least one uppercase letter")
            }
            RuleViolation::MissingDigit => write!(f, "Must contain at least one digit"),
            RuleViolation::MissingSpecial => {
                write!(f, "Must contain at least one special character")
            }
            RuleViolation::TooShort => {
                write!(f, "Must be at least {} characters long", MIN_LENGTH)
            }
            RuleViolation::RepeatedRun => write!(
                f,
                "Must not repeat the same character more than {} times in a row",
                MAX_RUN
            ),
        }
    }
}

/// Evaluate every rule against the candidate and return all violations.
pub fn check_rules(password: &Password) -> Vec<RuleViolation> {
    let value = password.as_str();
    let mut violations = Vec::new();

    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(RuleViolation::MissingUppercase);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        violations.push(RuleViolation::MissingDigit);
    }
    if !value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        violations.push(RuleViolation::MissingSpecial);
    }
    if value.chars().count() < MIN_LENGTH {
        violations.push(RuleViolation::TooShort);
    }
    if has_run_longer_than(value, MAX_RUN) {
        violations.push(RuleViolation::RepeatedRun);
    }

    violations
}

pub(crate) fn has_run_longer_than(value: &str, max: usize) -> bool {
    let mut run = 0usize;
    let mut previous = None;

    for c in value.chars() {
        if Some(c) == previous {
            run += 1;
            if run > max {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_violations_reported_at_once() {
        let violations = check_rules(&Password::new("ab"));

        assert_eq!(
            violations,
            vec![
                RuleViolation::MissingUppercase,
                RuleViolation::MissingDigit,
                RuleViolation::MissingSpecial,
                RuleViolation::TooShort,
            ]
        );
    }

    #[test]
    fn test_compliant_password_has_no_violations() {
        assert!(check_rules(&Password::new("Str0ng!Pass")).is_empty());
    }

    #[test]
    fn test_repeated_run_boundary() {
        // Three in a row is allowed, four is not.
        assert!(check_rules(&Password::new("Gooo0d!Pass")).is_empty());
        assert!(check_rules(&Password::new("Goooo0d!Pass")).contains(&RuleViolation::RepeatedRun));
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(check_rules(&Password::new("A1!bcde")).contains(&RuleViolation::TooShort));
        assert!(!check_rules(&Password::new("A1!bcdef")).contains(&RuleViolation::TooShort));
    }
}
