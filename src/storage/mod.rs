//! Key storage module.
//!
//! This module reads and writes the munge key file with owner-only permissions.

pub mod keyfile;
