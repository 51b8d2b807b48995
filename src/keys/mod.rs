//! RSA key pairs and their serialized forms.
//!
//! Key generation uses fixed parameters (4096-bit modulus, public exponent
//! 65537). Private keys serialize to unencrypted PKCS#8 PEM, public keys to
//! SubjectPublicKeyInfo PEM; both encodings round-trip losslessly.

pub mod codec;
mod generator;

pub use generator::{KeyPair, MODULUS_BITS, SIGNATURE_LEN};
