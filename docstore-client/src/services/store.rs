//! Versioned document store client.
//!
//! One instance serves one legal-document family. Mutations keep the
//! family's invariant: at most one active document at any time, with the
//! retire/promote step sequenced according to the family's configuration.

use futures::future;
use reqwest::Client;
use validator::Validate;

use clinic_core::error::ClientError;
use clinic_core::http::{expect_ok, read_json};

use crate::config::{CreateStrategy, FamilyConfig, UpdateStrategy, VersionPolicy};
use crate::dtos::{DeactivateRequest, DocumentDraft, InsertDocumentRequest, UpdateDocumentRequest};
use crate::models::{by_version_desc, bump_tenth, next_major, DocumentStatus, LegalDocument};

/// Result of publishing a new document.
#[derive(Debug)]
pub struct CreatedDocument {
    pub document: LegalDocument,
    /// Ids of active peers the client could not retire before the insert.
    /// Empty on the happy path. When non-empty the family may still show a
    /// second active record and the screen must warn the administrator
    /// instead of silently logging.
    pub failed_deactivations: Vec<String>,
}

/// Client for one legal-document family.
#[derive(Clone)]
pub struct DocumentStoreClient {
    client: Client,
    base_url: String,
    config: FamilyConfig,
}

impl DocumentStoreClient {
    pub fn new(base_url: impl Into<String>, config: FamilyConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            config,
        }
    }

    pub fn family_config(&self) -> &FamilyConfig {
        &self.config
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.config.path_prefix, operation)
    }

    /// All retired versions of the family, newest first.
    ///
    /// A failure here is a non-fatal "could not load history" condition;
    /// the caller shows an empty state and the editor stays usable.
    pub async fn list_retired(&self) -> Result<Vec<LegalDocument>, ClientError> {
        let mut retired: Vec<LegalDocument> = self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|d| d.status == DocumentStatus::Inactive)
            .collect();
        retired.sort_by(by_version_desc);
        Ok(retired)
    }

    /// The currently active document, if the family has one.
    ///
    /// A backend 404 means "no active document yet" and is a valid state,
    /// not an error.
    pub async fn get_active(&self) -> Result<Option<LegalDocument>, ClientError> {
        let response = self.client.get(self.url("getActive")).send().await?;

        match read_json(response).await {
            Ok(document) => Ok(Some(document)),
            Err(ClientError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fetch a single document to pre-populate an edit form.
    pub async fn get_for_edit(&self, id: &str) -> Result<LegalDocument, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("get/{}", id)))
            .send()
            .await?;
        read_json(response).await
    }

    /// Publish a new document for the family.
    ///
    /// Peer deactivations that fail do not stop the insert (the ordering
    /// guarantee is "answered, success or not"), but their ids come back on
    /// the result so the screen can tell the administrator the at-most-one-
    /// active invariant may be dirty.
    pub async fn create(&self, draft: &DocumentDraft) -> Result<CreatedDocument, ClientError> {
        let draft = draft.trimmed();
        draft.validate()?;

        let (document, failed_deactivations) = match self.config.create_strategy {
            CreateStrategy::InsertInactive => {
                // The server assigns the real sequence number and promotes
                // the record during its own versioning step.
                let document = self
                    .insert(InsertDocumentRequest {
                        title: draft.title,
                        body: draft.body,
                        sequence_number: Some(0),
                        version: None,
                        status: None,
                    })
                    .await?;
                (document, Vec::new())
            }
            CreateStrategy::DeactivateActiveThenInsert => {
                let documents = self.fetch_all().await?;
                let failed = self.deactivate_active_peers(&documents).await;

                let version = next_major(documents.iter().map(|d| d.version.as_str()));
                let document = self
                    .insert(InsertDocumentRequest {
                        title: draft.title,
                        body: draft.body,
                        sequence_number: None,
                        version: Some(version),
                        status: Some(DocumentStatus::Active),
                    })
                    .await?;
                (document, failed)
            }
        };

        tracing::info!(
            family = %self.config.family,
            id = %document.id,
            version = %document.version,
            "Document created"
        );
        Ok(CreatedDocument {
            document,
            failed_deactivations,
        })
    }

    /// Replace the content of the document identified by `id`.
    ///
    /// After this resolves, exactly one document in the family is active
    /// and it reflects the new title and body; which record carries it
    /// depends on the family's update strategy.
    pub async fn update(&self, id: &str, draft: &DocumentDraft) -> Result<LegalDocument, ClientError> {
        let draft = draft.trimmed();
        draft.validate()?;

        let updated = match self.config.update_strategy {
            UpdateStrategy::InPlace => {
                let response = self
                    .client
                    .put(self.url(&format!("update/{}", id)))
                    .json(&UpdateDocumentRequest {
                        title: draft.title,
                        body: draft.body,
                    })
                    .send()
                    .await?;
                read_json(response).await?
            }
            UpdateStrategy::DeactivateAndReinsert => {
                let documents = self.fetch_all().await?;
                let previous = documents
                    .iter()
                    .find(|d| d.id == id)
                    .ok_or(ClientError::NotFound)?;
                let version = self.next_version(&previous.version, &documents);

                self.deactivate(id).await?;
                self.insert(InsertDocumentRequest {
                    title: draft.title,
                    body: draft.body,
                    sequence_number: previous.sequence_number,
                    version: Some(version),
                    status: Some(DocumentStatus::Active),
                })
                .await?
            }
        };

        tracing::info!(
            family = %self.config.family,
            id = %updated.id,
            version = %updated.version,
            "Document updated"
        );
        Ok(updated)
    }

    /// Retire a single document. This is the only user-facing delete; if it
    /// was the active one the family has no active document until the next
    /// create or update.
    pub async fn deactivate(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.url(&format!("deactivate/{}", id)))
            .json(&DeactivateRequest::inactive())
            .send()
            .await?;
        expect_ok(response).await?;

        tracing::info!(family = %self.config.family, id = %id, "Document deactivated");
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<LegalDocument>, ClientError> {
        let response = self.client.get(self.url("getAll")).send().await?;
        read_json(response).await
    }

    /// Retire every active peer and wait for all of those calls to settle,
    /// returning the ids of the ones that failed.
    ///
    /// The insert that follows must not be issued until each deactivation
    /// has been answered, success or not, so the barrier here is a strict
    /// happens-before edge rather than fire-and-forget.
    async fn deactivate_active_peers(&self, documents: &[LegalDocument]) -> Vec<String> {
        let active: Vec<&LegalDocument> = documents.iter().filter(|d| d.is_active()).collect();
        let deactivations = active.iter().map(|d| self.deactivate(&d.id));

        let mut failed = Vec::new();
        for (peer, result) in active.iter().zip(future::join_all(deactivations).await) {
            if let Err(e) = result {
                tracing::warn!(
                    family = %self.config.family,
                    id = %peer.id,
                    error = %e,
                    "Failed to deactivate active peer before insert"
                );
                failed.push(peer.id.clone());
            }
        }
        failed
    }

    async fn insert(&self, request: InsertDocumentRequest) -> Result<LegalDocument, ClientError> {
        let response = self
            .client
            .post(self.url("insert"))
            .json(&request)
            .send()
            .await?;
        read_json(response).await
    }

    fn next_version(&self, superseded: &str, documents: &[LegalDocument]) -> String {
        match self.config.version_policy {
            VersionPolicy::IncrementTenth => bump_tenth(superseded),
            VersionPolicy::MaxPlusOne => next_major(documents.iter().map(|d| d.version.as_str())),
        }
    }
}
