//! Client for the clinic's versioned legal-document store.
//!
//! A legal-document family (privacy policy, legal disclaimer, terms and
//! conditions) holds at most one active document at a time; editing creates
//! a new version and retires the previous one. Which side performs the
//! retire/promote step differs per family and is carried as configuration,
//! see [`config::FamilyConfig`].

pub mod config;
pub mod dtos;
pub mod models;
pub mod services;

pub use clinic_core::error::ClientError;
pub use config::{CreateStrategy, FamilyConfig, UpdateStrategy, VersionPolicy};
pub use dtos::DocumentDraft;
pub use models::{DocumentFamily, DocumentStatus, LegalDocument};
pub use services::{CreatedDocument, DocumentStoreClient};
