//! Key material module.
//!
//! This module provides the munge key type and its operations:
//!
//! - Secure random key generation
//! - Base64 encoding for transfer over text channels
//!
//! # Example
//!
//! ```rust
//! use mungectl::crypto::encoding::{decode_key, encode_key};
//! use mungectl::crypto::key::generate_key;
//!
//! # fn example() -> mungectl::error::Result<()> {
//! let key = generate_key()?;
//!
//! let text = encode_key(&key);
//! let decoded = decode_key(&text)?;
//! assert_eq!(key, decoded);
//! # Ok(())
//! # }
//! ```

pub mod encoding;
pub mod key;
