//! mungectl: manage the MUNGE shared-secret key file
//!
//! MUNGE authenticates processes across a cluster with a secret key that
//! every node holds. This library provides the operations needed to manage
//! that key:
//!
//! - Generate 1024 bytes of key material from the OS random source
//! - Read and write the key file with owner-only permissions
//! - Encode the key as base64 for transfer between nodes, and decode it back
//! - Scan an encoded key from piped standard input
//!
//! # Architecture
//!
//! Operations are free functions over plain values with no shared state.
//! Every fallible operation returns [`Result`]; the `mungectl` binary maps
//! the errors to messages and exit statuses.
//!
//! # Example
//!
//! ```rust,no_run
//! use mungectl::config::KeyConfig;
//! use mungectl::crypto::encoding::encode_key;
//! use mungectl::crypto::key::generate_key;
//! use mungectl::error::Result;
//!
//! fn example() -> Result<()> {
//!     let key_file = KeyConfig::from_snap_common("/var/snap/slurm/common").key_file();
//!
//!     key_file.write(&generate_key()?)?;
//!     println!("{}", encode_key(&key_file.read()?));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod input;
pub mod storage;

// Re-export commonly used types
pub use crypto::key::{MungeKey, KEY_LENGTH};
pub use error::{MungeError, Result};
pub use storage::keyfile::KeyFile;
