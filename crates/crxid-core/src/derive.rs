//! Identifier derivation: base64 public key → SHA-256 → alphabet id

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::CrxidResult;
use crate::id::ExtensionId;
use crate::DIGEST_PREFIX_LEN;

/// Derive the extension id for a base64-encoded (DER) public key.
///
/// The key is decoded with the standard padded base64 alphabet; a
/// malformed key is the only failure mode (hashing bytes cannot fail).
/// Deterministic: the same key always yields the same id.
pub fn derive_id(encoded_key: &str) -> CrxidResult<ExtensionId> {
    let der = STANDARD.decode(encoded_key)?;
    let digest = Sha256::digest(&der);
    debug!(decoded_len = der.len(), "hashed decoded key");

    let mut prefix = [0u8; DIGEST_PREFIX_LEN];
    prefix.copy_from_slice(&digest[..DIGEST_PREFIX_LEN]);
    Ok(ExtensionId::from_digest_prefix(&prefix))
}
