//! Interactive prompts for passwords, file selection, and confirmations.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, ensure};
use inquire::validator::Validation;
use inquire::{Confirm, Password, PasswordDisplayMode, Select};

use crate::config::PASSWORD_MIN_LENGTH;
use crate::types::ProcessorMode;

/// Prompts for a new password with confirmation, since a typo here means
/// permanent data loss rather than a failed decrypt.
pub fn get_encryption_password() -> Result<String> {
    let password = prompt_password("Enter encryption password")?;
    let confirmation = prompt_password("Confirm password")?;
    ensure!(password == confirmation, "passwords do not match");
    Ok(password)
}

/// Prompts for an existing password; only one entry since the KDF/MAC
/// check will itself reject a wrong guess.
pub fn get_decryption_password() -> Result<String> {
    prompt_password("Enter decryption password")
}

/// Prompts the user to choose between encrypting and decrypting.
pub fn get_processing_mode() -> Result<ProcessorMode> {
    let modes = ProcessorMode::ALL;
    let labels: Vec<&str> = modes.iter().map(|m| m.label()).collect();

    let choice = Select::new("Select operation", labels).prompt().map_err(|e| anyhow!("mode selection failed: {e}"))?;

    modes.iter().copied().find(|m| m.label() == choice).ok_or_else(|| anyhow!("mode selection failed: no match"))
}

/// Prompts the user to pick one of the discovered files.
pub fn choose_file(files: &[PathBuf]) -> Result<PathBuf> {
    ensure!(!files.is_empty(), "no files available for selection");

    let labels: Vec<String> = files.iter().map(|f| f.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| f.display().to_string())).collect();

    let choice = Select::new("Select file", labels).prompt().map_err(|e| anyhow!("file selection failed: {e}"))?;

    files.iter().find(|f| f.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| f.display().to_string()) == choice).cloned().ok_or_else(|| anyhow!("file selection failed: no match"))
}

/// Confirms removal of the given file, labeled by its role (`"original"`
/// or `"encrypted"`) so the prompt tells the user what they'd be losing.
pub fn confirm_removal(path: &Path, file_type: &str) -> Result<bool> {
    let filename = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_else(|| path.display().to_string().into());
    Confirm::new(&format!("Delete {file_type} file {filename}?")).with_default(false).prompt().map_err(|e| anyhow!("confirmation failed: {e}"))
}

fn prompt_password(message: &str) -> Result<String> {
    Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_validator(move |input: &str| {
            if input.trim().is_empty() {
                return Ok(Validation::Invalid("password cannot be empty or whitespace only".into()));
            }
            if input.len() < PASSWORD_MIN_LENGTH {
                return Ok(Validation::Invalid(format!("password must be at least {PASSWORD_MIN_LENGTH} characters long").into()));
            }
            Ok(Validation::Valid)
        })
        .prompt()
        .map_err(|e| anyhow!("password input failed: {e}"))
}
