//! crxid-core: Chrome-style extension-id derivation
//!
//! Pipeline: base64 public key → DER bytes → SHA-256 → first 16 digest
//! bytes → one letter per nibble over the `a`–`p` alphabet.
//!
//! The mapping is the one Chrome applies to the hex digest: digits
//! `0`–`9` become `a`–`j` and `a`–`f` become `k`–`p` (nibble value added
//! to `'a'`). Character order follows digest order, so id positions line
//! up with hash-digit positions.

pub mod derive;
pub mod error;
pub mod id;

pub use derive::derive_id;
pub use error::{CrxidResult, DeriveError};
pub use id::{map_hex_digit, ExtensionId};

/// Length of an extension id in characters (one per hash nibble)
pub const ID_LEN: usize = 32;

/// Number of digest bytes consumed (first half of a SHA-256 digest)
pub const DIGEST_PREFIX_LEN: usize = ID_LEN / 2;
