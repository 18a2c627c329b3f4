use anyhow::Result;
use clap::{Parser, Subcommand};

use xseal::cli::{
    handle_decrypt_command, handle_demo_command, handle_encrypt_command, DecryptArgs, EncryptArgs,
};
use xseal::config::{paths::SealPaths, settings::Settings};
use xseal::crypto::{FormatVersion, OVERHEAD};

#[derive(Parser)]
#[command(
    name = "xseal",
    version,
    about = "Password-based XChaCha20-Poly1305 encryption",
    long_about = "xseal encrypts messages under a password using Argon2id key \
                  derivation and XChaCha20-Poly1305, producing a base64 blob \
                  that only the same password can open."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    #[command(alias = "seal")]
    Encrypt(EncryptArgs),

    /// Decrypt a blob
    #[command(alias = "open")]
    Decrypt(DecryptArgs),

    /// Encrypt and decrypt a sample message
    Demo,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SealPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    xseal::telemetry::init(&settings.log_level, settings.log_format)?;

    match cli.command {
        Some(Commands::Encrypt(args)) => handle_encrypt_command(&settings, args)?,
        Some(Commands::Decrypt(args)) => handle_decrypt_command(&settings, args)?,
        Some(Commands::Demo) => handle_demo_command()?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            let version = FormatVersion::CURRENT;
            let kdf = version.kdf_params();
            println!("xseal Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Log level:        {}", settings.log_level);
            println!("  Log format:       {:?}", settings.log_format);
            println!("  Password env var: {}", settings.password_env);
            println!("  Trailing newline: {}", settings.trailing_newline);
            println!();
            println!("Blob format v{}:", version.as_byte());
            println!("  Cipher:      XChaCha20-Poly1305");
            println!("  KDF:         Argon2id");
            println!("  Memory Cost: {} KiB", kdf.memory_cost);
            println!("  Time Cost:   {} iterations", kdf.time_cost);
            println!("  Parallelism: {} lanes", kdf.parallelism);
            println!("  Overhead:    {} bytes", OVERHEAD);
        }
        None => {
            println!("xseal - password-based XChaCha20-Poly1305 encryption");
            println!();
            println!("Run 'xseal --help' for usage information.");
            println!("Run 'xseal demo' to see a round trip.");
        }
    }

    Ok(())
}
