//! Error types for the signing library.
//!
//! This module defines all error types that can occur during key generation,
//! key protection, and document signing/verification.

/// Result type alias for signing library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during key handling and document signing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key encoding could not be parsed
    #[error("Malformed key encoding: {0}")]
    MalformedKey(String),

    /// Wrong PIN, or a truncated/corrupted protected key blob.
    ///
    /// The two cases are intentionally indistinguishable: the message carries
    /// no detail, so a caller cannot probe whether a blob was tampered with or
    /// a PIN guess merely failed.
    #[error("Incorrect PIN")]
    IncorrectPin,

    /// Container has no signature marker
    #[error("Document is not signed")]
    NotSigned,

    /// A signature is present but cryptographically invalid.
    ///
    /// Covers wrong key, tampered content, tampered signature, and wrong
    /// signature length, without distinguishing between them.
    #[error("Signature verification failed")]
    VerificationFailed,

    /// PIN policy violation or missing required input, detected before any
    /// cryptographic operation runs
    #[error("Validation error: {0}")]
    Validation(String),

    /// The system entropy source failed; fatal and non-retriable in-process
    #[error("Key generation failed: {0}")]
    EntropyFailure(String),

    /// IO error while saving key files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
