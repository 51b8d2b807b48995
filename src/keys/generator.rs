//! RSA key pair generation.

use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{Error, Result};

/// Modulus size in bits for every generated key.
pub const MODULUS_BITS: usize = 4096;

/// Length in bytes of an RSA-PSS signature produced by a generated key.
///
/// Equal to the modulus size in bytes; signed containers carry the raw
/// signature with no length prefix, so this is also the trailer size.
pub const SIGNATURE_LEN: usize = MODULUS_BITS / 8;

/// An RSA signing key pair.
///
/// The public half is derived from the private half at generation time and is
/// never independently mutated.
pub struct KeyPair {
    /// The private (signing) key.
    pub private: RsaPrivateKey,
    /// The public (verifying) key.
    pub public: RsaPublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair: 4096-bit modulus, public exponent 65537,
    /// from the operating system's CSPRNG.
    ///
    /// Fails only if the entropy source fails; such a failure is fatal and
    /// not retriable in-process.
    pub fn generate() -> Result<Self> {
        // The rsa crate fixes the public exponent at 65537.
        let private = RsaPrivateKey::new(&mut OsRng, MODULUS_BITS)
            .map_err(|e| Error::EntropyFailure(e.to_string()))?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { private, public })
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}
