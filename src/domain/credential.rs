//! Credential handling - one-way password digests.
//!
//! Digests are SHA-256 over the UTF-8 bytes of the raw password, encoded as
//! 64 uppercase hexadecimal characters. No salt is applied: identical
//! passwords produce identical digests, and stored records depend on that
//! exact format.

use sha2::{Digest, Sha256};

/// Width of an encoded digest in characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Hash a raw password into its hex digest.
pub fn hash(raw: &str) -> String {
    let digest = Sha256::digest(raw.as_bytes());
    hex::encode_upper(digest)
}

/// Check a raw password against a stored digest.
pub fn verify(raw: &str, digest: &str) -> bool {
    hash(raw) == digest
}

/// Stored password digest.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

// Don't expose the digest in debug output
impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PasswordHash").field(&"[REDACTED]").finish()
    }
}

impl PasswordHash {
    /// Digest a raw password.
    pub fn from_raw(raw: &str) -> Self {
        Self(hash(raw))
    }

    /// Wrap a digest loaded from storage.
    pub(crate) fn from_digest(digest: String) -> Self {
        Self(digest)
    }

    /// Check a candidate password against this digest.
    pub fn matches(&self, candidate: &str) -> bool {
        verify(candidate, &self.0)
    }

    /// Get the digest string for storage.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
