//! AES-256-CBC with PKCS#7 padding.
//!
//! Raw cipher layer for the key vault. Padding validity is the only
//! integrity signal the blob format carries, so a decrypt failure here says
//! nothing about whether the key or the data was wrong.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

use crate::error::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes; ciphertexts are always a multiple of this.
pub(crate) const BLOCK_LEN: usize = 16;

/// Encrypt `plaintext` under AES-256-CBC, applying PKCS#7 padding.
///
/// The output is always a non-zero multiple of the block size, one block
/// longer than the plaintext rounded down (a full padding block is appended
/// when the plaintext is already block-aligned).
pub(crate) fn encrypt(key: &[u8; 32], iv: &[u8; BLOCK_LEN], plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt AES-256-CBC `ciphertext` and strip PKCS#7 padding.
///
/// Fails when the ciphertext length is not a positive multiple of the block
/// size or when the recovered padding is invalid, which is the overwhelmingly
/// likely outcome of decrypting under the wrong key. Both cases surface as
/// the same generic error.
pub(crate) fn decrypt(
    key: &[u8; 32],
    iv: &[u8; BLOCK_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(Error::IncorrectPin);
    }
    Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::IncorrectPin)
}
