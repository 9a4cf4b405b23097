//! K-anonymity breach lookup.
//!
//! Queries the public range API with the first five characters of the
//! candidate's SHA-1 hash and compares the remaining 35 locally against the
//! returned suffix set. Neither the plaintext nor the full hash ever leaves
//! the process.

use reqwest::Client;

use clinic_core::error::ClientError;

use crate::password::Password;

/// Outcome of the breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachVerdict {
    /// The suffix did not appear in the returned range.
    Safe,
    /// The candidate is known-breached; `count` is the corpus occurrence
    /// count reported by the API.
    Breached { count: u64 },
    /// The range API could not be reached; the candidate stays unverified
    /// and submission stays blocked (fail-closed).
    Unverified,
}

impl BreachVerdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, BreachVerdict::Safe)
    }
}

/// Client for the breach-password range API.
#[derive(Clone)]
pub struct BreachClient {
    client: Client,
    base_url: String,
}

impl BreachClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the public corpus.
    pub fn public_api() -> Self {
        Self::new(clinic_core::config::DEFAULT_BREACH_API_URL)
    }

    /// Look the candidate up in the breach corpus.
    ///
    /// Any transport or protocol failure maps to
    /// [`ClientError::BreachServiceUnavailable`]; the caller must treat the
    /// password as not yet verified rather than safe or unsafe.
    pub async fn check(&self, password: &Password) -> Result<BreachVerdict, ClientError> {
        let (prefix, suffix) = password.breach_prefix_suffix();
        let url = format!("{}/range/{}", self.base_url, prefix);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(&prefix, &e))?;

        if !response.status().is_success() {
            tracing::warn!(prefix = %prefix, status = %response.status(), "Breach range lookup failed");
            return Err(ClientError::BreachServiceUnavailable);
        }

        let body = response.text().await.map_err(|e| unavailable(&prefix, &e))?;

        for line in body.lines() {
            let Some((candidate, count)) = line.split_once(':') else {
                continue;
            };
            if candidate.trim().eq_ignore_ascii_case(&suffix) {
                let count = count.trim().parse().unwrap_or(0);
                tracing::info!(prefix = %prefix, count, "Candidate password found in breach corpus");
                return Ok(BreachVerdict::Breached { count });
            }
        }

        Ok(BreachVerdict::Safe)
    }
}

fn unavailable(prefix: &str, error: &reqwest::Error) -> ClientError {
    tracing::warn!(prefix = %prefix, error = %error, "Breach range lookup unreachable");
    ClientError::BreachServiceUnavailable
}
