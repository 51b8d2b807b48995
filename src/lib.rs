//! # pades_oxide
//!
//! PIN-protected RSA signing keys and marker-delimited document signatures.
//!
//! The crate covers three concerns:
//!
//! - **Keys**: 4096-bit RSA key pair generation (public exponent 65537) and
//!   PKCS#8 / SubjectPublicKeyInfo PEM serialization.
//! - **Vault**: the private key at rest, encrypted with AES-256-CBC under a
//!   key derived from a 6-digit PIN (`iv ‖ ciphertext`, no header or MAC).
//! - **Signatures**: SHA-256 + RSA-PSS detached-style signatures appended to
//!   the document behind a fixed `\n%%PAdES_SIGNATURE%%\n` marker. The
//!   document itself is treated as an opaque byte stream.
//!
//! The on-disk formats are fixed for interoperability with existing key and
//! container files; see the module docs for the exact layouts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pades_oxide::{generate_protected_key_pair, sign_document, verify_document};
//!
//! # fn main() -> pades_oxide::Result<()> {
//! let keys = generate_protected_key_pair("123456")?;
//! keys.save("alice")?; // alice_private.bin + alice_public.pem
//!
//! let signed = sign_document(b"document bytes", &keys.private_key_blob, "123456")?;
//! assert!(verify_document(&signed, &keys.public_key_pem)?);
//! # Ok(())
//! # }
//! ```
//!
//! All operations are synchronous, bounded, in-memory computations with no
//! shared state; they are freely callable from multiple threads. Secret
//! material (decrypted key PEM, PIN-derived keys) lives in zeroizing buffers
//! scoped to each call.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod keys;
pub mod signatures;
pub mod vault;

pub use api::{
    generate_protected_key_pair, sign_document, validate_pin, verify_document, ProtectedKeyPair,
    PIN_LEN,
};
pub use error::{Error, Result};
pub use keys::{KeyPair, MODULUS_BITS, SIGNATURE_LEN};
pub use signatures::SIGNATURE_MARKER;
