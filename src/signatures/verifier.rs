//! Signature verification.

use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPublicKey};
use sha2::Sha256;

use super::signer::{max_salt_len, message_hash};
use crate::error::{Error, Result};

/// Verify an RSA-PSS signature over document content.
///
/// Mirrors [`sign`](super::sign): double SHA-256 message hash, MGF1(SHA-256),
/// maximal salt. Succeeds only on exact cryptographic validity; wrong key,
/// tampered content, tampered signature, and wrong signature length all
/// surface as the same [`Error::VerificationFailed`].
pub fn verify(content: &[u8], signature: &[u8], public_key: &RsaPublicKey) -> Result<()> {
    let padding = Pss::new_with_salt::<Sha256>(max_salt_len(public_key.size()));
    public_key
        .verify(padding, &message_hash(content), signature)
        .map_err(|_| Error::VerificationFailed)
}
