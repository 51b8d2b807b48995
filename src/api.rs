//! High-level entry points for application shells.
//!
//! These functions tie the key, vault, and signature layers together for a
//! GUI or CLI front end. The shell owns all path selection and user-facing
//! message presentation; everything here takes explicit arguments and
//! returns typed results.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{Error, Result};
use crate::keys::{codec, KeyPair, MODULUS_BITS};
use crate::signatures;
use crate::vault;

/// Required PIN length: exactly this many ASCII digits.
pub const PIN_LEN: usize = 6;

/// A freshly generated key pair, ready to persist.
///
/// The private half is already encrypted under the generation PIN; the
/// public half is plain SubjectPublicKeyInfo PEM.
#[derive(Debug, Clone)]
pub struct ProtectedKeyPair {
    /// Encrypted private key blob (`iv ‖ AES-256-CBC ciphertext`), the
    /// contents of the `.bin` key file.
    pub private_key_blob: Vec<u8>,
    /// Public key PEM, the contents of the `.pem` key file.
    pub public_key_pem: Vec<u8>,
}

/// Check the PIN policy: exactly [`PIN_LEN`] ASCII digits.
///
/// Enforced at key-generation time only; signing accepts whatever PIN the
/// caller supplies and simply fails to decrypt when it is wrong.
pub fn validate_pin(pin: &str) -> Result<()> {
    if pin.is_empty() {
        return Err(Error::Validation("PIN must not be empty".to_string()));
    }
    if !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Validation(
            "PIN must not contain anything other than digits".to_string(),
        ));
    }
    if pin.len() != PIN_LEN {
        return Err(Error::Validation(format!(
            "PIN must be {PIN_LEN} digits long"
        )));
    }
    Ok(())
}

/// Generate a key pair and protect its private half under `pin`.
///
/// Validates the PIN policy before any cryptographic work. The plaintext
/// private key PEM exists only transiently inside this call.
pub fn generate_protected_key_pair(pin: &str) -> Result<ProtectedKeyPair> {
    validate_pin(pin)?;

    let pair = KeyPair::generate()?;
    let private_pem = codec::encode_private(&pair.private)?;
    let public_key_pem = codec::encode_public(&pair.public)?;
    let private_key_blob = vault::protect(&private_pem, pin)?;

    info!("generated a protected {MODULUS_BITS}-bit key pair");
    Ok(ProtectedKeyPair {
        private_key_blob,
        public_key_pem,
    })
}

impl ProtectedKeyPair {
    /// Write `<prefix>_private.bin` and `<prefix>_public.pem`.
    ///
    /// Both buffers are complete before anything touches the filesystem, and
    /// a failure writing the public key removes the already-written private
    /// key file, so a failed save never leaves a partial key set behind.
    pub fn save(&self, prefix: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
        let prefix = prefix.as_ref();
        if prefix.as_os_str().is_empty() {
            return Err(Error::Validation("file name must not be empty".to_string()));
        }
        let private_path = path_with_suffix(prefix, "_private.bin");
        let public_path = path_with_suffix(prefix, "_public.pem");

        fs::write(&private_path, &self.private_key_blob)?;
        if let Err(e) = fs::write(&public_path, &self.public_key_pem) {
            if let Err(cleanup) = fs::remove_file(&private_path) {
                warn!(
                    "could not remove {} after failed save: {cleanup}",
                    private_path.display()
                );
            }
            return Err(e.into());
        }

        info!(
            "saved key pair to {} and {}",
            private_path.display(),
            public_path.display()
        );
        Ok((private_path, public_path))
    }
}

fn path_with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Sign a document: returns the full signed container bytes.
///
/// Decrypts the protected private key with `pin`, signs `document`, and
/// appends the marker and signature. Never writes files; the caller decides
/// where the container goes, and only ever receives a complete container.
pub fn sign_document(document: &[u8], protected_key_blob: &[u8], pin: &str) -> Result<Vec<u8>> {
    if pin.is_empty() {
        return Err(Error::Validation("PIN must not be empty".to_string()));
    }

    let private_pem = vault::unprotect(protected_key_blob, pin)?;
    // A wrong PIN can survive the padding check by chance; a blob that
    // decrypts to a non-key is still just a wrong PIN to the caller.
    let private_key = codec::decode_private(&private_pem).map_err(|_| Error::IncorrectPin)?;

    let signature = signatures::sign(document, &private_key)?;
    info!("signed {} bytes of document content", document.len());
    Ok(signatures::build_container(document, &signature))
}

/// Verify a signed container against a public key PEM.
///
/// Returns `Ok(true)` on cryptographic validity and `Ok(false)` on any
/// signature mismatch. A container without the marker is [`Error::NotSigned`]
/// and an unparsable key is [`Error::MalformedKey`]; neither is a mismatch.
pub fn verify_document(signed_container: &[u8], public_key_pem: &[u8]) -> Result<bool> {
    let (content, signature) = signatures::split_container(signed_container)?;
    let public_key = codec::decode_public(public_key_pem)?;

    match signatures::verify(content, signature, &public_key) {
        Ok(()) => Ok(true),
        Err(Error::VerificationFailed) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_policy() {
        validate_pin("123456").unwrap();
        validate_pin("000000").unwrap();

        for bad in ["", "12345", "1234567", "12345a", "abcdef", "12 456", "12345\u{0660}"] {
            let err = validate_pin(bad).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_generate_rejects_bad_pin_before_keygen() {
        // Returns immediately; a 4096-bit generation would be noticeably slow.
        let err = generate_protected_key_pair("hunter2").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_sign_document_rejects_empty_pin() {
        let err = sign_document(b"doc", &[0u8; 48], "").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_sign_document_rejects_garbage_blob() {
        let err = sign_document(b"doc", &[0u8; 48], "123456").unwrap_err();
        assert!(matches!(err, Error::IncorrectPin));
    }

    #[test]
    fn test_verify_document_requires_marker() {
        let err = verify_document(b"plain bytes", b"irrelevant").unwrap_err();
        assert!(matches!(err, Error::NotSigned));
    }

    #[test]
    fn test_verify_document_rejects_malformed_key() {
        let container = signatures::build_container(b"doc", &[0u8; 512]);
        let err = verify_document(&container, b"not a pem").unwrap_err();
        assert!(matches!(err, Error::MalformedKey(_)));
    }

    #[test]
    fn test_path_with_suffix() {
        let p = path_with_suffix(Path::new("keys/alice"), "_private.bin");
        assert_eq!(p, PathBuf::from("keys/alice_private.bin"));
    }

    #[test]
    fn test_save_rejects_empty_prefix() {
        let pair = ProtectedKeyPair {
            private_key_blob: vec![0u8; 48],
            public_key_pem: b"-----BEGIN PUBLIC KEY-----\n".to_vec(),
        };
        assert!(matches!(pair.save(""), Err(Error::Validation(_))));
    }
}
