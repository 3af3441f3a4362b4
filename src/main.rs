//! SweetByte - A secure file encryption tool.
//!
//! Encryption: AES-256-GCM + XChaCha20-Poly1305 + Reed-Solomon error correction.
//! Key Derivation: Argon2id.
//! File Format: 82-byte authenticated header + length-prefixed encrypted chunks.

use std::process;

use sweetbyte::cli;

/// Entry point for the SweetByte encryption tool.
///
/// Parses command-line arguments or enters interactive mode, then processes
/// the specified file with encryption or decryption.
///
/// # Exit Codes
/// * 0 - Success
/// * 1 - Error (message printed to stderr)
fn main() {
    tracing_subscriber::fmt().with_file(true).with_line_number(true).init();

    if let Err(e) = cli::run(cli::parse()) {
        eprintln!("Error: {e:?}");
        process::exit(1);
    }
}
