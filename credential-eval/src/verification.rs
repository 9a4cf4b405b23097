//! Email-verification state for the registration flow.
//!
//! One explicit state replaces the independently-toggled booleans the flow
//! otherwise accumulates; illegal transitions are errors instead of
//! impossible flag combinations.

use chrono::{DateTime, Utc};

use clinic_core::error::ClientError;

/// `Unverified -> CodeSent -> Verified`, with re-send allowed from
/// `CodeSent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailVerification {
    Unverified,
    CodeSent { sent_at: DateTime<Utc> },
    Verified,
}

impl EmailVerification {
    pub fn new() -> Self {
        EmailVerification::Unverified
    }

    /// Record that a verification code was emailed. Allowed from
    /// `Unverified` and, as a re-send, from `CodeSent`.
    pub fn code_sent(&self, at: DateTime<Utc>) -> Result<Self, ClientError> {
        match self {
            EmailVerification::Unverified | EmailVerification::CodeSent { .. } => {
                Ok(EmailVerification::CodeSent { sent_at: at })
            }
            EmailVerification::Verified => Err(ClientError::Validation(
                "The email address is already verified".to_string(),
            )),
        }
    }

    /// Record a successful code confirmation. Only legal while a code is
    /// outstanding.
    pub fn confirmed(&self) -> Result<Self, ClientError> {
        match self {
            EmailVerification::CodeSent { .. } => Ok(EmailVerification::Verified),
            EmailVerification::Unverified => Err(ClientError::Validation(
                "No verification code has been sent".to_string(),
            )),
            EmailVerification::Verified => Err(ClientError::Validation(
                "The email address is already verified".to_string(),
            )),
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, EmailVerification::Verified)
    }
}

impl Default for EmailVerification {
    fn default() -> Self {
        Self::new()
    }
}
