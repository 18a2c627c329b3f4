//! CLI command handlers
//!
//! Bridges the clap argument parsing with the crypto layer.

pub mod encrypt;

pub use encrypt::{
    handle_decrypt_command, handle_demo_command, handle_encrypt_command, DecryptArgs, EncryptArgs,
};
