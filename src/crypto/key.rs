//! Munge key material and generation.
//!
//! A munge key is an opaque secret shared by every node in the cluster.
//! Freshly generated keys are [`KEY_LENGTH`] bytes; keys read from disk or
//! decoded from text keep whatever length they arrive with.

use crate::error::{MungeError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length in bytes of a newly generated key.
pub const KEY_LENGTH: usize = 1024;

/// Raw munge key bytes. Zeroized when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MungeKey(Vec<u8>);

impl MungeKey {
    /// Wrap existing key bytes. No length check is made.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the key as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of key bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key has no bytes, e.g. one decoded from empty text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for MungeKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for MungeKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// Never print key material.
impl fmt::Debug for MungeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MungeKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// Generate a new munge key from the operating system's secure random source.
///
/// # Example
///
/// ```
/// use mungectl::crypto::key::{generate_key, KEY_LENGTH};
///
/// let key = generate_key().unwrap();
/// assert_eq!(key.len(), KEY_LENGTH);
/// ```
pub fn generate_key() -> Result<MungeKey> {
    generate_key_with(&mut OsRng)
}

/// Generate a new munge key from the given cryptographic random source.
///
/// Fails with [`MungeError::RandomSourceError`] if the source cannot fill the
/// buffer. Nothing is returned on failure.
pub fn generate_key_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<MungeKey> {
    let mut bytes = vec![0u8; KEY_LENGTH];

    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        bytes.zeroize();
        return Err(MungeError::RandomSourceError(e.to_string()));
    }

    debug!(len = bytes.len(), "generated munge key");
    Ok(MungeKey(bytes))
}
