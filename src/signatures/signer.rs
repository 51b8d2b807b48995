//! Document signing with RSA-PSS.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPrivateKey};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// The largest PSS salt that fits the modulus with SHA-256:
/// `modulus_bytes - hash_len - 2`. 478 bytes for a 4096-bit key.
pub(crate) fn max_salt_len(modulus_bytes: usize) -> usize {
    modulus_bytes - Sha256::output_size() - 2
}

/// Shared by sign and verify: the content digest is itself fed through the
/// PSS message hash, so the value passed to the PSS primitive is
/// SHA-256(SHA-256(content)). Wire-compatible with signers that hand the
/// content digest to a hashing sign API.
pub(crate) fn message_hash(content: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(content)).into()
}

/// Sign document content with RSA-PSS, MGF1(SHA-256), maximal salt.
///
/// PSS is randomized: signing the same content twice yields different
/// signatures, each independently valid. The signature length equals the
/// modulus size in bytes.
pub fn sign(content: &[u8], private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let padding = Pss::new_with_salt::<Sha256>(max_salt_len(private_key.size()));
    private_key
        .sign_with_rng(&mut OsRng, padding, &message_hash(content))
        .map_err(|e| Error::EntropyFailure(e.to_string()))
}
