//! Document signing, verification, and the signed-container format.
//!
//! A signed document is the original content followed by a fixed textual
//! marker and a raw RSA-PSS signature:
//!
//! ```text
//! content ‖ \n%%PAdES_SIGNATURE%%\n ‖ signature (modulus-size bytes)
//! ```
//!
//! Signatures cover the SHA-256 digest of the content, produced and checked
//! with RSA-PSS using MGF1(SHA-256) and the maximal salt length that fits
//! the modulus. The signature has no length prefix; its size is implied by
//! the key and must match exactly for verification to succeed.

mod container;
mod signer;
mod verifier;

pub use container::{build_container, split_container, SIGNATURE_MARKER};
pub use signer::sign;
pub use verifier::verify;
