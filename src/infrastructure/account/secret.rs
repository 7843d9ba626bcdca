//! Secret hashing utilities
//!
//! Secrets are retained only as a deterministic one-way hash; verification
//! recomputes the digest from the presented secret and compares in
//! constant time so a mismatch position cannot leak through timing.

use sha2::{Digest, Sha256};
use std::fmt::Debug;

/// Trait for secret hashing operations
pub trait SecretHasher: Send + Sync + Debug {
    /// Hash a secret for storage
    fn hash(&self, secret: &str) -> String;

    /// Verify a presented secret against a stored hash
    fn verify(&self, secret: &str, hash: &str) -> bool;
}

/// SHA-256 based secret hasher producing lowercase hex digests
#[derive(Debug, Clone, Default)]
pub struct Sha256SecretHasher;

impl Sha256SecretHasher {
    /// Create a new SHA-256 hasher
    pub fn new() -> Self {
        Self
    }
}

impl SecretHasher for Sha256SecretHasher {
    fn hash(&self, secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn verify(&self, secret: &str, hash: &str) -> bool {
        let computed = self.hash(secret);
        constant_time_compare(&computed, hash)
    }
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut result = 0u8;

    for i in 0..a.len() {
        result |= a_bytes[i] ^ b_bytes[i];
    }

    result == 0
}
