//! Cryptographic functions for xseal
//!
//! Provides XChaCha20-Poly1305 encryption with Argon2id key derivation,
//! packaged as a versioned, base64-encoded blob.

pub mod blob;
pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use blob::{FormatVersion, SealedBlob, NONCE_LEN, OVERHEAD, TAG_LEN};
pub use encryption::{decrypt, decrypt_string, encrypt, encrypt_string};
pub use key_derivation::{derive_key, DerivedKey, KeyDerivationParams, KEY_LEN, SALT_LEN};
pub use secure_memory::{SecureBytes, SecureString};
