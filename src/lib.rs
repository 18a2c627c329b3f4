//! xseal - password-based XChaCha20-Poly1305 encryption
//!
//! Seals a message under a password and returns a self-describing,
//! base64-encoded blob; opening the blob requires the same password.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, blob layout and the encrypt/decrypt pair
//! - `config`: config directory and settings
//! - `telemetry`: logging setup
//! - `cli`: command handlers for the `xseal` binary
//! - `error`: error types
//!
//! # Example
//!
//! ```rust
//! let blob = xseal::encrypt_string("my message", "my_password")?;
//! let message = xseal::decrypt_string(&blob, "my_password")?;
//! assert_eq!(message, "my message");
//! # Ok::<(), xseal::SealError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod telemetry;

pub use crypto::{decrypt, decrypt_string, encrypt, encrypt_string};
pub use error::{SealError, SealResult};
