//! Bounded, zeroized storage for the reference secret.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum number of bytes of a caller-supplied secret that are retained.
///
/// Longer secrets are silently truncated at capture time. Guesses are never
/// truncated, so a guess equal to the untruncated original cannot match.
pub const MAX_SECRET_LEN: usize = 32;

/// The immutable reference value guesses are checked against.
///
/// Captured once at construction and compared per byte (UTF-8 code units,
/// case-sensitive). This type intentionally implements neither `Debug`,
/// `Clone`, `Serialize` nor `Deserialize` to prevent accidental exposure;
/// the buffer is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct StoredSecret(Vec<u8>);

impl StoredSecret {
    /// Capture a secret, keeping at most the first [`MAX_SECRET_LEN`] bytes.
    ///
    /// The empty string is a valid secret.
    pub fn capture(secret: &str) -> Self {
        let mut bytes = secret.as_bytes().to_vec();
        bytes.truncate(MAX_SECRET_LEN);
        Self(bytes)
    }

    /// The retained secret bytes.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of retained bytes (always `<= MAX_SECRET_LEN`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secret_kept_verbatim() {
        let s = StoredSecret::capture("Secret");
        assert_eq!(s.as_bytes(), b"Secret");
        assert_eq!(s.len(), 6);
    }

    #[test]
    fn empty_secret_is_valid() {
        let s = StoredSecret::capture("");
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn long_secret_truncated_to_first_32_bytes() {
        let s = StoredSecret::capture("SecretSecretSecretSecretSecretSecret");
        assert_eq!(s.len(), MAX_SECRET_LEN);
        assert_eq!(s.as_bytes(), b"SecretSecretSecretSecretSecretSe");
    }

    #[test]
    fn exactly_32_bytes_not_truncated() {
        let exact = "a".repeat(MAX_SECRET_LEN);
        let s = StoredSecret::capture(&exact);
        assert_eq!(s.len(), MAX_SECRET_LEN);
        assert_eq!(s.as_bytes(), exact.as_bytes());
    }

    #[test]
    fn truncation_counts_bytes_not_chars() {
        // 'é' is two bytes in UTF-8; 20 of them exceed the bound.
        let secret = "é".repeat(20);
        let s = StoredSecret::capture(&secret);
        assert_eq!(s.len(), MAX_SECRET_LEN);
    }
}
