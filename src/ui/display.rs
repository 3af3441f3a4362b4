//! Display functions for terminal output.
//!
//! Provides formatted tables for file information, success messages,
//! and the application banner for interactive mode.

use std::path::Path;

use anyhow::{Result, anyhow};
use bytesize::ByteSize;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use console::Term;

use crate::config::APP_NAME;
use crate::types::{FileInfo, ProcessorMode};

/// Displays discovered files in a formatted table.
///
/// Shows file number, name (truncated if too long), size, and encryption status.
///
/// # Errors
///
/// Never fails; kept as `Result` for consistency with the other display
/// functions that do real I/O.
pub fn show_file_info(files: &[FileInfo]) -> Result<()> {
    if files.is_empty() {
        println!("{}", console::style("No files found").yellow().bright());
        return Ok(());
    }

    println!();
    println!("{} {}", console::style("✔").green().bright(), console::style(format!("Found {} file(s):", files.len())).white().bright());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("No").fg(Color::White), Cell::new("Name").fg(Color::White), Cell::new("Size").fg(Color::White), Cell::new("Status").fg(Color::White)]);

    for (i, file) in files.iter().enumerate() {
        let filename = file.path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");

        let display_name = if filename.len() > 25 { format!("{}...", &filename[..22]) } else { filename.to_owned() };

        let (status_text, status_color) = if file.is_encrypted { ("encrypted", Color::Cyan) } else { ("unencrypted", Color::Green) };

        table.add_row(vec![Cell::new(i + 1), Cell::new(&display_name).fg(Color::Green), Cell::new(ByteSize(file.size).to_string()), Cell::new(status_text).fg(status_color)]);
    }

    println!("{table}");
    println!();
    Ok(())
}

/// Displays a success message after processing completes.
pub fn show_success(mode: ProcessorMode, path: &Path) {
    let action = match mode {
        ProcessorMode::Encrypt => "encrypted",
        ProcessorMode::Decrypt => "decrypted",
    };

    let filename = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_else(|| path.display().to_string().into());
    println!();
    println!("{} {}", console::style("✔").green().bright(), console::style(format!("File {action} successfully: {filename}")).white().bright());
}

/// Displays a message after source file deletion.
pub fn show_source_deleted(path: &Path) {
    let filename = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_else(|| path.display().to_string().into());
    println!("{} {}", console::style("✔").green().bright(), console::style(format!("Source file deleted: {filename}")).white().bright());
}

/// Clears the terminal screen.
pub fn clear_screen() -> Result<()> {
    let term = Term::stdout();
    term.clear_screen().map_err(|e| anyhow!("failed to clear screen: {e}"))?;
    Ok(())
}

/// Prints the application banner for interactive mode.
pub fn print_banner() {
    println!();
    println!("{}", console::style(format!("== {APP_NAME} ==")).green().bold());
    println!("{}", console::style("Multi-layered file encryption with error correction").green());
    println!();
}
