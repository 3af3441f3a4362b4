//! Interactive mode for SweetByte.

use anyhow::{Context, Result, bail};

use crate::engine::{self, Options};
use crate::file::discovery::find_eligible_files;
use crate::file::operations::{get_file_info_list, get_output_path, remove_file};
use crate::secret::SecretString;
use crate::types::ProcessorMode;
use crate::ui::display::{print_banner, show_file_info, show_source_deleted, show_success};
use crate::ui::prompt::{choose_file, confirm_removal, get_decryption_password, get_encryption_password, get_processing_mode};

/// Runs the interactive mode.
pub fn run() -> Result<()> {
    print_banner();

    let mode = get_processing_mode()?;

    let files = find_eligible_files(mode)?;
    if files.is_empty() {
        bail!("No eligible files found for {mode}");
    }

    let file_infos = get_file_info_list(&files)?;
    show_file_info(&file_infos)?;

    let selected = choose_file(&files)?;
    let output = get_output_path(&selected, mode);

    match mode {
        ProcessorMode::Encrypt => {
            let password = SecretString::from_str(&get_encryption_password()?);

            engine::encrypt(&selected, &output, &password, &Options::default())
                .with_context(|| format!("encryption failed for {}", selected.display()))?;

            show_success(mode, &output);

            if confirm_removal(&selected, "original")? {
                remove_file(&selected)?;
                show_source_deleted(&selected);
            }
        }
        ProcessorMode::Decrypt => {
            let password = SecretString::from_str(&get_decryption_password()?);

            engine::decrypt(&selected, &output, &password, &Options::default())
                .with_context(|| format!("decryption failed for {}", selected.display()))?;

            show_success(mode, &output);

            if confirm_removal(&selected, "encrypted")? {
                remove_file(&selected)?;
                show_source_deleted(&selected);
            }
        }
    }

    Ok(())
}
