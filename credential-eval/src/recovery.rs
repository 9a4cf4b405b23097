//! Account-recovery (password reset) client.
//!
//! The reset request carries the only documented timeout in the system
//! (5000 ms); when it elapses the user is told the request expired and to
//! retry, not shown a generic failure. Confirming a reset is gated on a
//! definitive credential evaluation before any network call.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use clinic_core::config::CoreConfig;
use clinic_core::error::ClientError;
use clinic_core::http::expect_ok;

use crate::breach::BreachVerdict;
use crate::evaluator::{CredentialEvaluator, STRENGTH_FLOOR};
use crate::password::Password;

#[derive(Debug, Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetConfirm<'a> {
    token: &'a str,
    password: &'a str,
}

#[derive(Clone)]
pub struct RecoveryClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RecoveryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.backend_url.clone(), config.recovery_timeout())
    }

    /// Ask the backend to email a reset link.
    ///
    /// A client-side timeout maps to [`ClientError::RequestExpired`] so the
    /// screen can prompt an immediate retry.
    pub async fn request_reset(&self, email: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(format!("{}/auth/password-reset/request", self.base_url))
            .timeout(self.timeout)
            .json(&ResetRequest { email })
            .send()
            .await?;
        expect_ok(response).await?;

        tracing::info!("Password reset requested");
        Ok(())
    }

    /// Set the new password using the emailed token.
    ///
    /// The submit-time evaluation runs first and gates the network call:
    /// nothing is sent unless the new password is acceptable. An unverified
    /// breach check blocks submission rather than letting it through.
    pub async fn confirm_reset(
        &self,
        token: &str,
        new_password: &Password,
        evaluator: &CredentialEvaluator,
    ) -> Result<(), ClientError> {
        let evaluation = evaluator.assess(new_password).await;
        if !evaluation.is_acceptable() {
            let locally_clean =
                evaluation.violations.is_empty() && evaluation.strength >= STRENGTH_FLOOR;
            // Only report the outage when the outage is the sole blocker;
            // otherwise the user gets the actionable remediation list.
            if locally_clean && evaluation.breach == BreachVerdict::Unverified {
                return Err(ClientError::BreachServiceUnavailable);
            }
            return Err(ClientError::Validation(
                evaluation.rejection_reasons().join("; "),
            ));
        }

        let response = self
            .client
            .post(format!("{}/auth/password-reset/confirm", self.base_url))
            .timeout(self.timeout)
            .json(&ResetConfirm {
                token,
                password: new_password.as_str(),
            })
            .send()
            .await?;
        expect_ok(response).await?;

        tracing::info!("Password reset confirmed");
        Ok(())
    }
}
