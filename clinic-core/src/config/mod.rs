use serde::Deserialize;
use std::env;
use std::time::Duration;

use dotenvy::dotenv;

/// Default base URL of the public breach-password range API.
pub const DEFAULT_BREACH_API_URL: &str = "https://api.pwnedpasswords.com";

/// Timeout applied to the password-recovery submission.
const DEFAULT_RECOVERY_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Deserialize, Clone)]
pub struct CoreConfig {
    /// Base URL of the clinic backend.
    pub backend_url: String,
    /// Base URL of the breach-password range API.
    pub breach_api_url: String,
    /// Timeout for the password-recovery submission, in milliseconds.
    pub recovery_timeout_ms: u64,
}

impl CoreConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let backend_url =
            env::var("CLINIC_BACKEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let breach_api_url =
            env::var("BREACH_API_URL").unwrap_or_else(|_| DEFAULT_BREACH_API_URL.to_string());
        let recovery_timeout_ms = env::var("RECOVERY_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RECOVERY_TIMEOUT_MS);

        Self {
            backend_url,
            breach_api_url,
            recovery_timeout_ms,
        }
    }

    pub fn recovery_timeout(&self) -> Duration {
        Duration::from_millis(self.recovery_timeout_ms)
    }
}
