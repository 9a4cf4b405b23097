use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::DocumentStatus;

/// Editable fields of a legal document, as entered in the admin form.
///
/// Both fields are mandatory; validation runs against the trimmed values so
/// whitespace-only input is rejected before any network call.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DocumentDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
}

impl DocumentDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Copy with both fields trimmed, the form the validator and the wire
    /// payloads both see.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDocumentRequest {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

#[derive(Debug, Serialize)]
pub struct UpdateDocumentRequest {
    pub title: String,
    pub body: String,
}

/// Body of the deactivation PUT, always `{"status":"inactive"}`.
#[derive(Debug, Serialize)]
pub struct DeactivateRequest {
    pub status: DocumentStatus,
}

impl DeactivateRequest {
    pub fn inactive() -> Self {
        Self {
            status: DocumentStatus::Inactive,
        }
    }
}
