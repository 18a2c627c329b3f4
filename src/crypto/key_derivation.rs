//! Key derivation using Argon2id
//!
//! Derives encryption keys from passwords using Argon2id, a memory-hard key
//! derivation function resistant to GPU/ASIC attacks. The work parameters are
//! fixed per blob format version so old blobs keep opening.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SealError, SealResult};

/// Length of the per-message salt in bytes
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (XChaCha20 key size)
pub const KEY_LEN: usize = 32;

/// Argon2id work parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDerivationParams {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Time cost (iterations)
    pub time_cost: u32,
    /// Parallelism degree
    pub parallelism: u32,
}

impl KeyDerivationParams {
    /// Parameters used by format version 1: 19 MiB, 2 passes, 1 lane
    pub const V1: Self = Self {
        memory_cost: 19_456,
        time_cost: 2,
        parallelism: 1,
    };
}

/// A derived encryption key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

/// Derive an encryption key from a password and salt
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    params: &KeyDerivationParams,
) -> SealResult<DerivedKey> {
    if salt.len() != SALT_LEN {
        return Err(SealError::KeyDerivation(format!(
            "Invalid salt length: expected {}, got {}",
            SALT_LEN,
            salt.len()
        )));
    }

    let argon2_params = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| SealError::KeyDerivation(format!("Invalid Argon2 parameters: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = DerivedKey { key: [0u8; KEY_LEN] };
    argon2
        .hash_password_into(password, salt, &mut key.key)
        .map_err(|e| SealError::KeyDerivation(format!("Key derivation failed: {}", e)))?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT_A: [u8; SALT_LEN] = [7u8; SALT_LEN];
    const SALT_B: [u8; SALT_LEN] = [9u8; SALT_LEN];

    #[test]
    fn test_same_inputs_same_key() {
        let key1 = derive_key(b"test_password", &SALT_A, &KeyDerivationParams::V1).unwrap();
        let key2 = derive_key(b"test_password", &SALT_A, &KeyDerivationParams::V1).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let key1 = derive_key(b"password1", &SALT_A, &KeyDerivationParams::V1).unwrap();
        let key2 = derive_key(b"password2", &SALT_A, &KeyDerivationParams::V1).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key(b"same_password", &SALT_A, &KeyDerivationParams::V1).unwrap();
        let key2 = derive_key(b"same_password", &SALT_B, &KeyDerivationParams::V1).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_allowed() {
        let key = derive_key(b"", &SALT_A, &KeyDerivationParams::V1).unwrap();
        assert_ne!(key.as_bytes(), &[0u8; KEY_LEN]);
    }

    #[test]
    fn test_wrong_salt_length_rejected() {
        let result = derive_key(b"pw", &[0u8; 8], &KeyDerivationParams::V1);
        assert!(matches!(result, Err(SealError::KeyDerivation(_))));

        let result = derive_key(b"pw", &[0u8; SALT_LEN + 1], &KeyDerivationParams::V1);
        assert!(matches!(result, Err(SealError::KeyDerivation(_))));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = KeyDerivationParams {
            memory_cost: 1,
            time_cost: 0,
            parallelism: 0,
        };
        let result = derive_key(b"pw", &SALT_A, &params);
        assert!(matches!(result, Err(SealError::KeyDerivation(_))));
    }

    #[test]
    fn test_key_zeroize() {
        let mut key = derive_key(b"pw", &SALT_A, &KeyDerivationParams::V1).unwrap();
        key.zeroize();
        assert_eq!(key.as_bytes(), &[0u8; KEY_LEN]);
    }
}
