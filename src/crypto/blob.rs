//! Sealed blob layout
//!
//! A blob is `version || salt || nonce || ciphertext || tag`, base64 encoded
//! (standard alphabet, padded) for transport as text.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SealError, SealResult};

use super::key_derivation::{KeyDerivationParams, SALT_LEN};

/// XChaCha20 extended nonce length in bytes
pub const NONCE_LEN: usize = 24;

/// Poly1305 tag length in bytes
pub const TAG_LEN: usize = 16;

/// Bytes preceding the ciphertext
pub const HEADER_LEN: usize = 1 + SALT_LEN + NONCE_LEN;

/// Fixed overhead added to every plaintext before text encoding
pub const OVERHEAD: usize = HEADER_LEN + TAG_LEN;

/// Blob format versions understood by this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    /// Argon2id (19 MiB, t=2, p=1) + XChaCha20-Poly1305, empty associated data
    V1,
}

impl FormatVersion {
    /// Version written by `encrypt`
    pub const CURRENT: Self = Self::V1;

    /// Parse a version byte, `None` if unknown
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::V1),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::V1 => 1,
        }
    }

    /// Key derivation parameters bound to this version
    pub fn kdf_params(self) -> KeyDerivationParams {
        match self {
            Self::V1 => KeyDerivationParams::V1,
        }
    }
}

/// A parsed blob. `sealed` holds the ciphertext with its tag appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBlob {
    version: FormatVersion,
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    sealed: Vec<u8>,
}

impl SealedBlob {
    pub fn new(
        version: FormatVersion,
        salt: [u8; SALT_LEN],
        nonce: [u8; NONCE_LEN],
        sealed: Vec<u8>,
    ) -> Self {
        Self {
            version,
            salt,
            nonce,
            sealed,
        }
    }

    pub fn version(&self) -> FormatVersion {
        self.version
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext followed by the authentication tag
    pub fn sealed(&self) -> &[u8] {
        &self.sealed
    }

    /// Length of the plaintext this blob decrypts to
    pub fn plaintext_len(&self) -> usize {
        self.sealed.len().saturating_sub(TAG_LEN)
    }

    /// Serialize to raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.sealed.len());
        bytes.push(self.version.as_byte());
        bytes.extend_from_slice(&self.salt);
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.sealed);
        bytes
    }

    /// Parse raw bytes.
    ///
    /// The version byte is checked before the length, so an unknown version
    /// is rejected whatever follows it.
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        let (&version_byte, rest) = bytes.split_first().ok_or(SealError::Decryption)?;
        let version = FormatVersion::from_byte(version_byte).ok_or(SealError::Decryption)?;

        if bytes.len() < OVERHEAD {
            return Err(SealError::Decryption);
        }

        let (salt, rest) = rest.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);

        let mut salt_bytes = [0u8; SALT_LEN];
        salt_bytes.copy_from_slice(salt);
        let mut nonce_bytes = [0u8; NONCE_LEN];
        nonce_bytes.copy_from_slice(nonce);

        Ok(Self::new(version, salt_bytes, nonce_bytes, sealed.to_vec()))
    }

    /// Encode as base64 text
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decode from base64 text
    pub fn decode(text: &str) -> SealResult<Self> {
        let bytes = STANDARD.decode(text).map_err(|_| SealError::Decryption)?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SealedBlob {
        SealedBlob::new(
            FormatVersion::V1,
            [1u8; SALT_LEN],
            [2u8; NONCE_LEN],
            vec![3u8; 5 + TAG_LEN],
        )
    }

    #[test]
    fn test_layout_offsets() {
        let bytes = sample().to_bytes();
        assert_eq!(bytes.len(), OVERHEAD + 5);
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[1..1 + SALT_LEN], &[1u8; SALT_LEN]);
        assert_eq!(&bytes[1 + SALT_LEN..HEADER_LEN], &[2u8; NONCE_LEN]);
        assert_eq!(&bytes[HEADER_LEN..], &[3u8; 5 + TAG_LEN][..]);
    }

    #[test]
    fn test_overhead_constant() {
        assert_eq!(OVERHEAD, 57);
    }

    #[test]
    fn test_encode_decode() {
        let blob = sample();
        let decoded = SealedBlob::decode(&blob.encode()).unwrap();
        assert_eq!(decoded, blob);
        assert_eq!(decoded.plaintext_len(), 5);
    }

    #[test]
    fn test_minimum_length_blob_parses() {
        let empty = SealedBlob::new(
            FormatVersion::V1,
            [0; SALT_LEN],
            [0; NONCE_LEN],
            vec![0; TAG_LEN],
        );
        let bytes = empty.to_bytes();
        let blob = SealedBlob::from_bytes(&bytes).unwrap();
        assert_eq!(blob.plaintext_len(), 0);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut bytes = sample().to_bytes();
        bytes[0] = 0;
        assert!(SealedBlob::from_bytes(&bytes).unwrap_err().is_decryption());
        bytes[0] = 2;
        assert!(SealedBlob::from_bytes(&bytes).unwrap_err().is_decryption());
        bytes[0] = 0xFF;
        assert!(SealedBlob::from_bytes(&bytes).unwrap_err().is_decryption());
    }

    #[test]
    fn test_truncated_rejected() {
        let bytes = sample().to_bytes();
        for len in [0, 1, HEADER_LEN, OVERHEAD - 1] {
            let result = SealedBlob::from_bytes(&bytes[..len]);
            assert!(result.unwrap_err().is_decryption(), "length {}", len);
        }
    }

    #[test]
    fn test_invalid_base64_rejected() {
        assert!(SealedBlob::decode("not-a-valid-blob").unwrap_err().is_decryption());
        assert!(SealedBlob::decode("").unwrap_err().is_decryption());
    }

    #[test]
    fn test_version_byte_round_trip() {
        let v = FormatVersion::CURRENT;
        assert_eq!(FormatVersion::from_byte(v.as_byte()), Some(v));
        assert_eq!(v.kdf_params(), KeyDerivationParams::V1);
    }
}
