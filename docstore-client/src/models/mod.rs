use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The three legal-document collections managed by the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFamily {
    PrivacyPolicy,
    LegalDisclaimer,
    TermsAndConditions,
}

impl fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFamily::PrivacyPolicy => write!(f, "privacy policy"),
            DocumentFamily::LegalDisclaimer => write!(f, "legal disclaimer"),
            DocumentFamily::TermsAndConditions => write!(f, "terms and conditions"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Active,
    Inactive,
}

/// One version of a legal document. "Deletion" is a soft transition to
/// `Inactive`; retired versions stay readable as history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
    pub title: String,
    pub body: String,
    pub version: String,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LegalDocument {
    pub fn is_active(&self) -> bool {
        self.status == DocumentStatus::Active
    }
}

/// Numeric value of a one-dot decimal version string such as `"1.1"`.
///
/// Parse-as-float keeps `"10.0"` above `"9.0"`, which lexicographic
/// comparison gets wrong. It does not extend to major.minor.patch versions;
/// the backend only ever emits one-dot decimals. Unparseable input sorts
/// lowest instead of failing the whole listing.
pub fn version_value(version: &str) -> f64 {
    version.trim().parse().unwrap_or(0.0)
}

/// Descending order by numeric version, newest first.
pub fn by_version_desc(a: &LegalDocument, b: &LegalDocument) -> Ordering {
    version_value(&b.version)
        .partial_cmp(&version_value(&a.version))
        .unwrap_or(Ordering::Equal)
}

/// Version one tenth above the given one: `"1.0"` becomes `"1.1"`.
pub fn bump_tenth(version: &str) -> String {
    format!("{:.1}", version_value(version) + 0.1)
}

/// Next whole version above every existing one: highest floor `2.x`
/// yields `"3.0"`. An empty family starts at `"1.0"`.
pub fn next_major<'a>(versions: impl IntoIterator<Item = &'a str>) -> String {
    let highest = versions
        .into_iter()
        .map(|v| version_value(v).floor())
        .fold(0.0_f64, f64::max);
    format!("{:.1}", highest + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_value_is_numeric_not_lexicographic() {
        assert!(version_value("10.0") > version_value("9.0"));
        assert!(version_value("1.1") > version_value("1.0"));
        assert_eq!(version_value("garbage"), 0.0);
    }

    #[test]
    fn test_bump_tenth() {
        assert_eq!(bump_tenth("1.0"), "1.1");
        assert_eq!(bump_tenth("1.9"), "2.0");
        assert_eq!(bump_tenth("10.0"), "10.1");
    }

    #[test]
    fn test_next_major() {
        assert_eq!(next_major(["2.0", "2.1", "1.0"]), "3.0");
        assert_eq!(next_major(["10.3"]), "11.0");
        assert_eq!(next_major(Vec::<&str>::new()), "1.0");
    }
}
