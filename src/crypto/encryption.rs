//! XChaCha20-Poly1305 encryption/decryption
//!
//! Password-based authenticated encryption of a single in-memory message.
//! Every call draws a fresh salt and nonce, derives its own key and drops
//! that key before returning.

use chacha20poly1305::aead::rand_core::RngCore;
use chacha20poly1305::aead::{Aead, KeyInit, OsRng, Payload};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};
use zeroize::Zeroize;

use crate::error::{SealError, SealResult};

use super::blob::{FormatVersion, SealedBlob, NONCE_LEN};
use super::key_derivation::{derive_key, DerivedKey, SALT_LEN};

/// Associated data bound into every tag (empty for format version 1)
const ASSOCIATED_DATA: &[u8] = b"";

fn cipher_for(key: &DerivedKey) -> XChaCha20Poly1305 {
    XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()))
}

fn fill_random(buf: &mut [u8]) -> SealResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| SealError::Encryption(format!("Random source failed: {}", e)))
}

/// Encrypt plaintext under a password, returning the encoded blob
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> SealResult<String> {
    let version = FormatVersion::CURRENT;

    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    fill_random(&mut salt)?;
    fill_random(&mut nonce)?;

    let key = derive_key(password, &salt, &version.kdf_params())?;
    let sealed = cipher_for(&key)
        .encrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: ASSOCIATED_DATA,
            },
        )
        .map_err(|_| SealError::Encryption("AEAD seal failed".to_string()));
    drop(key);
    let sealed = sealed?;

    tracing::debug!(
        version = version.as_byte(),
        plaintext_len = plaintext.len(),
        "sealed message"
    );

    Ok(SealedBlob::new(version, salt, nonce, sealed).encode())
}

/// Decrypt an encoded blob with a password.
///
/// Every failure, from bad base64 to a tag mismatch, is reported as
/// [`SealError::Decryption`].
pub fn decrypt(encoded: &str, password: &[u8]) -> SealResult<Vec<u8>> {
    open(encoded, password).inspect_err(|e| {
        tracing::debug!(kind = e.kind(), "decrypt rejected");
    })
}

fn open(encoded: &str, password: &[u8]) -> SealResult<Vec<u8>> {
    let blob = SealedBlob::decode(encoded)?;

    let key = derive_key(password, blob.salt(), &blob.version().kdf_params())
        .map_err(|_| SealError::Decryption)?;
    let plaintext = cipher_for(&key)
        .decrypt(
            XNonce::from_slice(blob.nonce()),
            Payload {
                msg: blob.sealed(),
                aad: ASSOCIATED_DATA,
            },
        )
        .map_err(|_| SealError::Decryption);
    drop(key);
    let plaintext = plaintext?;

    tracing::debug!(
        version = blob.version().as_byte(),
        plaintext_len = plaintext.len(),
        "opened message"
    );

    Ok(plaintext)
}

/// Encrypt a string
pub fn encrypt_string(plaintext: &str, password: &str) -> SealResult<String> {
    encrypt(plaintext.as_bytes(), password.as_bytes())
}

/// Decrypt to a string. A plaintext that is not UTF-8 is a decryption failure.
pub fn decrypt_string(encoded: &str, password: &str) -> SealResult<String> {
    let plaintext = decrypt(encoded, password.as_bytes())?;
    String::from_utf8(plaintext).map_err(|e| {
        e.into_bytes().zeroize();
        SealError::Decryption
    })
}
