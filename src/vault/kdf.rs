//! PIN key derivation.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Length of a derived symmetric key in bytes.
pub const KEY_LEN: usize = 32;

/// Derive the AES-256 key for a PIN: SHA-256 over its UTF-8 bytes.
///
/// This is a single unsalted hash, not a password-hardening function; a
/// 6-digit PIN has only 10^6 candidates, so the at-rest protection assumes
/// the blob itself stays private. Changing the derivation would break every
/// existing key file, so the scheme is kept as-is.
///
/// The returned key is wiped on drop.
pub fn derive_key(pin: &str) -> Zeroizing<[u8; KEY_LEN]> {
    let digest = Sha256::digest(pin.as_bytes());
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&digest);
    key
}
