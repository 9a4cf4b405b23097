use crate::models::DocumentFamily;

/// How `create` brings a new document into the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStrategy {
    /// POST the record with sequence number 0; the server assigns the real
    /// number and promotes it to active during its own versioning step.
    InsertInactive,
    /// Deactivate every currently-active peer first, await all of those
    /// calls, then issue a single insert carrying the next version.
    DeactivateActiveThenInsert,
}

/// How `update` replaces the content of an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// PUT to the same id; the server bumps the version by 0.1 and keeps
    /// the status.
    InPlace,
    /// Retire the old id, then insert a fresh record with a bumped version
    /// which becomes the new active document.
    DeactivateAndReinsert,
}

/// How the client computes a version when it has to supply one itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPolicy {
    /// `"1.0"` -> `"1.1"`, based on the superseded document.
    IncrementTenth,
    /// Highest existing floor plus one: `2.x` present -> `"3.0"`.
    MaxPlusOne,
}

/// Per-family wiring: endpoint prefix plus the create/update/version
/// strategies. The strategies genuinely differ between families in the
/// backing system, so they are configuration to be confirmed with the
/// system owner rather than a single global rule.
#[derive(Debug, Clone)]
pub struct FamilyConfig {
    pub family: DocumentFamily,
    /// Path segment in front of every endpoint, e.g. `"privacy-policy"`.
    pub path_prefix: String,
    pub create_strategy: CreateStrategy,
    pub update_strategy: UpdateStrategy,
    pub version_policy: VersionPolicy,
}

impl FamilyConfig {
    pub fn privacy_policy() -> Self {
        Self {
            family: DocumentFamily::PrivacyPolicy,
            path_prefix: "privacy-policy".to_string(),
            create_strategy: CreateStrategy::InsertInactive,
            update_strategy: UpdateStrategy::InPlace,
            version_policy: VersionPolicy::IncrementTenth,
        }
    }

    pub fn legal_disclaimer() -> Self {
        Self {
            family: DocumentFamily::LegalDisclaimer,
            path_prefix: "legal-disclaimer".to_string(),
            create_strategy: CreateStrategy::InsertInactive,
            update_strategy: UpdateStrategy::InPlace,
            version_policy: VersionPolicy::IncrementTenth,
        }
    }

    pub fn terms_and_conditions() -> Self {
        Self {
            family: DocumentFamily::TermsAndConditions,
            path_prefix: "terms-and-conditions".to_string(),
            create_strategy: CreateStrategy::DeactivateActiveThenInsert,
            update_strategy: UpdateStrategy::DeactivateAndReinsert,
            version_policy: VersionPolicy::MaxPlusOne,
        }
    }

    pub fn for_family(family: DocumentFamily) -> Self {
        match family {
            DocumentFamily::PrivacyPolicy => Self::privacy_policy(),
            DocumentFamily::LegalDisclaimer => Self::legal_disclaimer(),
            DocumentFamily::TermsAndConditions => Self::terms_and_conditions(),
        }
    }
}
