//! Response handling shared by the outbound HTTP clients.
//!
//! Reads the status and body first, then parses, so a failed parse of an
//! error body can still fall back to a generic message.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;

/// Fallback shown when the backend rejects a request without a usable body.
const GENERIC_REJECTION: &str = "The server could not process the request";

/// Deserialize a 2xx response body, or convert the failure.
///
/// A 404 becomes `ClientError::NotFound` so callers that treat "not found"
/// as a valid domain state can match on it; any other non-2xx status becomes
/// `ClientError::Backend` carrying the backend's own message when present.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        Ok(serde_json::from_str(&body)?)
    } else {
        Err(status_error(status, &body))
    }
}

/// Discard the body of a response that only signals success or failure.
pub async fn expect_ok(response: Response) -> Result<(), ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        Ok(())
    } else {
        Err(status_error(status, &body))
    }
}

fn status_error(status: StatusCode, body: &str) -> ClientError {
    if status == StatusCode::NOT_FOUND {
        return ClientError::NotFound;
    }

    ClientError::Backend {
        status: status.as_u16(),
        message: backend_message(body).unwrap_or_else(|| GENERIC_REJECTION.to_string()),
    }
}

/// Extract the structured message from a backend error body, if any.
pub fn backend_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.error.or(parsed.message).filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_prefers_error_field() {
        let body = r#"{"error": "Title is required", "message": "ignored"}"#;
        assert_eq!(backend_message(body), Some("Title is required".to_string()));
    }

    #[test]
    fn test_backend_message_falls_back_to_message_field() {
        let body = r#"{"message": "Session expired"}"#;
        assert_eq!(backend_message(body), Some("Session expired".to_string()));
    }

    #[test]
    fn test_backend_message_none_for_unstructured_body() {
        assert_eq!(backend_message("<html>502</html>"), None);
        assert_eq!(backend_message(r#"{"error": ""}"#), None);
    }
}
