//! CLI commands and argument parsing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::engine::{self, Options};
use crate::file::operations::get_output_path;
use crate::secret::SecretString;
use crate::types::ProcessorMode;
use crate::ui::prompt::{get_decryption_password, get_encryption_password};

/// SweetByte - Multi-layered file encryption with error correction.
#[derive(Parser)]
#[command(name = "sweetbyte")]
#[command(version = "1.0")]
#[command(
    about = "Encrypt files using AES-256-GCM and XChaCha20-Poly1305 with Reed-Solomon error correction. Run without arguments for interactive mode."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file with multi-layered encryption.
    Encrypt {
        /// Input file path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (optional).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password for encryption (optional, will prompt if not provided).
        #[arg(short, long)]
        password: Option<String>,

        /// Remove the source file after a successful encryption.
        #[arg(long)]
        delete_source: bool,

        /// Overwrite the source file's contents before removing it.
        #[arg(long)]
        secure_delete: bool,
    },

    /// Decrypt a file with error correction.
    Decrypt {
        /// Input file path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (optional).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password for decryption (optional, will prompt if not provided).
        #[arg(short, long)]
        password: Option<String>,

        /// Remove the source file after a successful decryption.
        #[arg(long)]
        delete_source: bool,

        /// Overwrite the source file's contents before removing it.
        #[arg(long)]
        secure_delete: bool,
    },

    /// Start interactive mode.
    Interactive,
}

/// Parses CLI arguments.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Runs the parsed CLI, entering interactive mode if no subcommand was given.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(cmd) => run_command(cmd),
        None => crate::interactive::run(),
    }
}

/// Runs a CLI command.
///
/// # Arguments
/// * `cmd` - The command to run
fn run_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Encrypt {
            input,
            output,
            password,
            delete_source,
            secure_delete,
        } => encrypt_file(&input, output, password, delete_source, secure_delete),

        Commands::Decrypt {
            input,
            output,
            password,
            delete_source,
            secure_delete,
        } => decrypt_file(&input, output, password, delete_source, secure_delete),

        Commands::Interactive => crate::interactive::run(),
    }
}

fn encrypt_file(
    input: &std::path::Path,
    output: Option<PathBuf>,
    password: Option<String>,
    delete_source: bool,
    secure_delete: bool,
) -> Result<()> {
    let output = output.unwrap_or_else(|| get_output_path(input, ProcessorMode::Encrypt));

    let password = match password {
        Some(p) => SecretString::from_str(&p),
        None => SecretString::from_str(&get_encryption_password()?),
    };

    let options = Options { delete_source, secure_delete, ..Options::default() };
    engine::encrypt(input, &output, &password, &options)
        .with_context(|| format!("encryption failed for {}", input.display()))?;

    println!("✓ Encrypted: {} -> {}", input.display(), output.display());

    Ok(())
}

fn decrypt_file(
    input: &std::path::Path,
    output: Option<PathBuf>,
    password: Option<String>,
    delete_source: bool,
    secure_delete: bool,
) -> Result<()> {
    let output = output.unwrap_or_else(|| get_output_path(input, ProcessorMode::Decrypt));

    let password = match password {
        Some(p) => SecretString::from_str(&p),
        None => SecretString::from_str(&get_decryption_password()?),
    };

    let options = Options { delete_source, secure_delete, ..Options::default() };
    engine::decrypt(input, &output, &password, &options)
        .with_context(|| format!("decryption failed for {}", input.display()))?;

    println!("✓ Decrypted: {} -> {}", input.display(), output.display());

    Ok(())
}
