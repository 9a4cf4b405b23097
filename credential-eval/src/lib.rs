//! Credential security pipeline for the clinic front end.
//!
//! Decides whether a candidate password is acceptable for registration or
//! reset by combining three independent checks: a local rule set, a 0-4
//! strength score, and a k-anonymity lookup against the public breach
//! corpus. Only the first five characters of the SHA-1 hash ever leave the
//! process; the plaintext never does.

pub mod breach;
pub mod evaluator;
pub mod password;
pub mod recovery;
pub mod rules;
pub mod strength;
pub mod verification;

pub use breach::{BreachClient, BreachVerdict};
pub use clinic_core::error::ClientError;
pub use evaluator::{CredentialEvaluator, PasswordEvaluation};
pub use password::Password;
pub use recovery::RecoveryClient;
pub use rules::{check_rules, RuleViolation};
pub use strength::{score, StrengthScore};
pub use verification::EmailVerification;
