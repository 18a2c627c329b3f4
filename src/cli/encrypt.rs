//! Encryption CLI commands
//!
//! Provides the `encrypt`, `decrypt` and `demo` commands.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::crypto::{decrypt, decrypt_string, encrypt, encrypt_string, SecureBytes, SecureString};
use crate::error::{SealError, SealResult};

/// Passwords shorter than this trigger a warning
const RECOMMENDED_PASSWORD_LEN: usize = 8;

/// Arguments for `xseal encrypt`
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Message to encrypt (reads stdin when neither --text nor --input is given)
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the message from a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the blob to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Environment variable holding the password
    #[arg(long)]
    pub password_env: Option<String>,
}

/// Arguments for `xseal decrypt`
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Encoded blob (reads stdin when neither BLOB nor --input is given)
    #[arg(conflicts_with = "input")]
    pub blob: Option<String>,

    /// Read the blob from a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the plaintext to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Environment variable holding the password
    #[arg(long)]
    pub password_env: Option<String>,
}

/// Handle `xseal encrypt`
pub fn handle_encrypt_command(settings: &Settings, args: EncryptArgs) -> SealResult<()> {
    let plaintext = match args.text {
        Some(text) => SecureBytes::from(text),
        None => read_input(args.input.as_deref())?,
    };
    let password = resolve_password(settings, args.password_env.as_deref(), true)?;

    let mut blob = encrypt(&plaintext, password.as_bytes())?;
    if settings.trailing_newline {
        blob.push('\n');
    }

    write_output(blob.as_bytes(), args.output.as_deref())
}

/// Handle `xseal decrypt`
pub fn handle_decrypt_command(settings: &Settings, args: DecryptArgs) -> SealResult<()> {
    let encoded = match args.blob {
        Some(blob) => blob,
        None => {
            let raw = read_input(args.input.as_deref())?;
            String::from_utf8(raw.to_vec()).map_err(|_| SealError::Decryption)?
        }
    };
    let password = resolve_password(settings, args.password_env.as_deref(), false)?;

    let plaintext = SecureBytes::from(decrypt(encoded.trim(), password.as_bytes())?);

    write_output(&plaintext, args.output.as_deref())
}

/// Handle `xseal demo`: seal and open a fixed message, printing both steps
pub fn handle_demo_command() -> SealResult<()> {
    let encrypted = encrypt_string("my message", "my_password")?;
    println!("encrypted: {}", encrypted);
    let decrypted = decrypt_string(&encrypted, "my_password")?;
    println!("decrypted: {}", decrypted);
    Ok(())
}

fn read_input(path: Option<&Path>) -> SealResult<SecureBytes> {
    match path {
        Some(path) => std::fs::read(path)
            .map(SecureBytes::from)
            .map_err(|e| SealError::Io(format!("Failed to read {}: {}", path.display(), e))),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| SealError::Input(format!("Failed to read stdin: {}", e)))?;
            Ok(SecureBytes::from(buf))
        }
    }
}

fn write_output(bytes: &[u8], path: Option<&Path>) -> SealResult<()> {
    match path {
        Some(path) => std::fs::write(path, bytes)
            .map_err(|e| SealError::Io(format!("Failed to write {}: {}", path.display(), e))),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Take the password from the environment, falling back to a hidden prompt
fn resolve_password(
    settings: &Settings,
    env_override: Option<&str>,
    confirm: bool,
) -> SealResult<SecureString> {
    let env_name = env_override.unwrap_or(settings.password_env.as_str());

    let password = match std::env::var(env_name) {
        Ok(value) => {
            tracing::debug!(source = "env", var = env_name, "password resolved");
            SecureString::new(value)
        }
        Err(_) if confirm => prompt_new_password()?,
        Err(_) => prompt_password("Password: ")?,
    };

    if password.len() < RECOMMENDED_PASSWORD_LEN {
        tracing::warn!(
            recommended = RECOMMENDED_PASSWORD_LEN,
            "password is shorter than recommended"
        );
    }

    Ok(password)
}

/// Prompt for a new password with confirmation
fn prompt_new_password() -> SealResult<SecureString> {
    let first = prompt_password("Password: ")?;
    let second = prompt_password("Confirm password: ")?;

    if first != second {
        return Err(SealError::Input("Passwords do not match".to_string()));
    }

    Ok(first)
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> SealResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| SealError::Input(format!("Failed to read password: {}", e)))
}
