//! Combined credential evaluation.
//!
//! The three checks are independent; a password is acceptable only when the
//! rule set is clean, the strength score reaches the floor, and the breach
//! verdict is definitively safe.

use std::sync::atomic::{AtomicU64, Ordering};

use clinic_core::error::ClientError;

use crate::breach::{BreachClient, BreachVerdict};
use crate::password::Password;
use crate::rules::{check_rules, RuleViolation};
use crate::strength::{score, StrengthScore};

/// Minimum strength score accepted for account creation or reset.
pub const STRENGTH_FLOOR: StrengthScore = StrengthScore::Strong;

/// Result of evaluating one candidate password. Ephemeral, never persisted.
#[derive(Debug, Clone)]
pub struct PasswordEvaluation {
    pub strength: StrengthScore,
    pub violations: Vec<RuleViolation>,
    pub breach: BreachVerdict,
}

impl PasswordEvaluation {
    pub fn is_acceptable(&self) -> bool {
        self.violations.is_empty() && self.strength >= STRENGTH_FLOOR && self.breach.is_safe()
    }

    /// Remediation summary for an unacceptable evaluation, one reason per
    /// line in the order the checks ran.
    pub fn rejection_reasons(&self) -> Vec<String> {
        let mut reasons: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();

        if self.strength < STRENGTH_FLOOR {
            reasons.push(format!(
                "Password strength is {}, must be at least {}",
                self.strength.label(),
                STRENGTH_FLOOR.label()
            ));
        }
        match self.breach {
            BreachVerdict::Breached { .. } => {
                reasons.push("This password appears in known data breaches".to_string());
            }
            BreachVerdict::Unverified => {
                reasons.push("The password could not be verified yet, please retry".to_string());
            }
            BreachVerdict::Safe => {}
        }
        reasons
    }
}

/// Stateless evaluator shared by the registration, password-change, and
/// recovery forms. The only state it carries is the generation counter used
/// to discard stale breach-check responses.
pub struct CredentialEvaluator {
    breach: BreachClient,
    generation: AtomicU64,
}

impl CredentialEvaluator {
    pub fn new(breach: BreachClient) -> Self {
        Self {
            breach,
            generation: AtomicU64::new(0),
        }
    }

    /// Rules and strength only, no network. Advisory feedback for each
    /// keystroke while the breach check is still in flight.
    pub fn evaluate_local(&self, password: &Password) -> PasswordEvaluation {
        PasswordEvaluation {
            strength: score(password),
            violations: check_rules(password),
            breach: BreachVerdict::Unverified,
        }
    }

    /// Full keystroke-time evaluation with stale-response suppression.
    ///
    /// Returns `Ok(None)` when a newer evaluation started while this one's
    /// breach check was in flight; the caller must keep whatever it is
    /// currently showing instead of overwriting it with a stale result.
    pub async fn evaluate(
        &self,
        password: &Password,
    ) -> Result<Option<PasswordEvaluation>, ClientError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let evaluation = self.run_checks(password).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding superseded evaluation");
            return Ok(None);
        }
        Ok(Some(evaluation))
    }

    /// Definitive submit-time evaluation. This is the check that gates the
    /// account-mutation request; it ignores the generation counter because
    /// the candidate it is given is by definition the current one.
    pub async fn assess(&self, password: &Password) -> PasswordEvaluation {
        self.run_checks(password).await
    }

    async fn run_checks(&self, password: &Password) -> PasswordEvaluation {
        let violations = check_rules(password);
        let strength = score(password);
        // An unreachable breach API is not an error here: the evaluation is
        // still produced, with the verdict left unverified so acceptance
        // stays false.
        let breach = match self.breach.check(password).await {
            Ok(verdict) => verdict,
            Err(_) => BreachVerdict::Unverified,
        };

        PasswordEvaluation {
            strength,
            violations,
            breach,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_requires_all_three_checks() {
        let clean = PasswordEvaluation {
            strength: StrengthScore::Strong,
            violations: vec![],
            breach: BreachVerdict::Safe,
        };
        assert!(clean.is_acceptable());

        let weak = PasswordEvaluation {
            strength: StrengthScore::Fair,
            ..clean.clone()
        };
        assert!(!weak.is_acceptable());

        let violated = PasswordEvaluation {
            violations: vec![RuleViolation::MissingDigit],
            ..clean.clone()
        };
        assert!(!violated.is_acceptable());

        let breached = PasswordEvaluation {
            breach: BreachVerdict::Breached { count: 12 },
            ..clean.clone()
        };
        assert!(!breached.is_acceptable());

        let unverified = PasswordEvaluation {
            breach: BreachVerdict::Unverified,
            ..clean
        };
        assert!(!unverified.is_acceptable());
    }

    #[test]
    fn test_rejection_reasons_cover_every_failing_check() {
        let evaluation = PasswordEvaluation {
            strength: StrengthScore::Weak,
            violations: vec![RuleViolation::MissingDigit, RuleViolation::TooShort],
            breach: BreachVerdict::Breached { count: 3 },
        };

        let reasons = evaluation.rejection_reasons();
        assert_eq!(reasons.len(), 4);
        assert!(reasons.iter().any(|r| r.contains("data breaches")));
        assert!(reasons.iter().any(|r| r.contains("Weak")));
    }
}
