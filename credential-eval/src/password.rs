use sha1::{Digest, Sha1};
use std::fmt;

/// Length of the hash prefix sent to the breach range API.
pub const BREACH_PREFIX_LEN: usize = 5;

/// Newtype for a candidate password to prevent accidental logging.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase hex SHA-1 of the candidate, the form the breach corpus
    /// indexes by.
    pub fn sha1_hex_upper(&self) -> String {
        hex::encode_upper(Sha1::digest(self.0.as_bytes()))
    }

    /// Split the hash for the k-anonymity lookup: the 5-character prefix is
    /// the only part that may leave the process, the suffix is compared
    /// locally.
    pub fn breach_prefix_suffix(&self) -> (String, String) {
        let digest = self.sha1_hex_upper();
        let (prefix, suffix) = digest.split_at(BREACH_PREFIX_LEN);
        (prefix.to_string(), suffix.to_string())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_matches_known_digest() {
        // Well-known SHA-1 of "password".
        let password = Password::new("password");
        assert_eq!(
            password.sha1_hex_upper(),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
    }

    #[test]
    fn test_prefix_suffix_split() {
        let password = Password::new("password");
        let (prefix, suffix) = password.breach_prefix_suffix();

        assert_eq!(prefix, "5BAA6");
        assert_eq!(suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(prefix.len() + suffix.len(), 40);
    }

    #[test]
    fn test_debug_never_prints_the_value() {
        let password = Password::new("hunter2");
        assert_eq!(format!("{:?}", password), "Password(<redacted>)");
    }
}
