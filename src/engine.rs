//! File-level orchestration: wires key derivation, the header, and the
//! streaming pipeline into the two public `encrypt`/`decrypt` entry points.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};

use crate::cancel::CancelToken;
use crate::chunk::ChunkProcessor;
use crate::config::{DATA_SHARDS, HEADER_SIZE, PARITY_SHARDS};
use crate::crypto::Cipher;
use crate::encoding::Encoding;
use crate::error::SweetByteError;
use crate::file::operations::{create_file, get_file_info, open_file, remove_file};
use crate::header::Header;
use crate::kdf;
use crate::secret::SecretString;
use crate::stream::Pipeline;
use crate::types::Processing;

/// Runtime knobs for [`encrypt`]/[`decrypt`], layered on top of the
/// compile-time format constants in `config.rs`.
#[derive(Default)]
pub struct Options {
    /// Remove the source file after a successful operation.
    pub delete_source: bool,
    /// Overwrite the source file's contents with zeros before removing it.
    /// Has no effect unless `delete_source` is also set.
    pub secure_delete: bool,
    /// Override for the worker thread count; `None` uses the host's
    /// available parallelism.
    pub workers: Option<usize>,
    /// Called with `(bytes_done, total_bytes)` as chunks are written.
    pub progress: Option<Box<dyn Fn(u64, u64) + Send + Sync>>,
    /// Shared cancellation token the caller may hold and trigger mid-run.
    /// `None` creates a fresh one scoped to this call.
    pub cancel: Option<CancelToken>,
}

/// Encrypts `src_path` into `dst_path` under `password`.
///
/// On any failure after the output file has been created, the partial
/// output is removed so a failed run never leaves a corrupt `.swb` file
/// behind.
pub fn encrypt(src_path: &Path, dst_path: &Path, password: &SecretString, options: &Options) -> Result<()> {
    let info = get_file_info(src_path)?.ok_or_else(|| SweetByteError::Config(format!("file not found: {}", src_path.display())))?;
    ensure!(info.size != 0, SweetByteError::Config("cannot encrypt an empty file".into()));

    let salt = kdf::generate_salt();
    let master = kdf::derive_master_key(password.expose_secret().as_bytes(), &salt)?;
    let keys = kdf::split_master_key(&master)?;

    let header = Header::build(salt, info.size, keys.hmac.expose_secret())?;

    let cipher = Cipher::new(&keys)?;
    let encoding = Encoding::new(DATA_SHARDS, PARITY_SHARDS)?;
    let chunk_processor = ChunkProcessor::new(cipher, encoding)?;

    let reader = open_file(src_path)?;
    let mut writer = create_file(dst_path)?;

    let result = (|| -> Result<()> {
        writer.write_all(&header.serialize()).context("failed to write header")?;

        let cancel = options.cancel.clone().unwrap_or_default();
        let pipeline = Pipeline::new(chunk_processor, Processing::Encryption, options.workers, cancel);
        pipeline.process(reader, writer, info.size, options.progress.as_deref())
    })();

    if result.is_err() {
        let _ = remove_file(dst_path);
    }

    if result.is_ok() && options.delete_source {
        delete_source(src_path, options.secure_delete, info.size)?;
    }

    result
}

/// Decrypts `src_path` into `dst_path` under `password`.
///
/// Fails with [`SweetByteError::Auth`] if the password is wrong or the
/// header has been tampered with, and with [`SweetByteError::Corruption`]
/// if a chunk has more corrupt shards than Reed-Solomon can recover.
pub fn decrypt(src_path: &Path, dst_path: &Path, password: &SecretString, options: &Options) -> Result<()> {
    let info = get_file_info(src_path)?.ok_or_else(|| SweetByteError::Config(format!("file not found: {}", src_path.display())))?;
    ensure!(info.size >= HEADER_SIZE as u64, SweetByteError::Format("file too small to contain a header".into()));

    let mut reader = open_file(src_path)?;

    let mut header_bytes = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header_bytes).context("failed to read header")?;
    let header = Header::parse(&header_bytes)?;

    let master = kdf::derive_master_key(password.expose_secret().as_bytes(), &header.salt)?;
    let keys = kdf::split_master_key(&master)?;

    header.verify(keys.hmac.expose_secret()).context("incorrect password or corrupted header")?;

    let cipher = Cipher::new(&keys)?;
    let encoding = Encoding::new(DATA_SHARDS, PARITY_SHARDS)?;
    let chunk_processor = ChunkProcessor::new(cipher, encoding)?;

    let writer = create_file(dst_path)?;

    let cancel = options.cancel.clone().unwrap_or_default();
    let pipeline = Pipeline::new(chunk_processor, Processing::Decryption, options.workers, cancel);
    let result = pipeline.process(reader, writer, header.original_size, options.progress.as_deref());

    if result.is_err() {
        let _ = remove_file(dst_path);
    }

    if result.is_ok() {
        verify_output_size(dst_path, header.original_size)?;

        if options.delete_source {
            delete_source(src_path, options.secure_delete, info.size)?;
        }
    }

    result
}

fn verify_output_size(path: &Path, expected: u64) -> Result<()> {
    let actual = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    if actual != expected {
        bail!(SweetByteError::Format(format!("decrypted size {actual} does not match header's {expected}")));
    }
    Ok(())
}

fn delete_source(path: &Path, secure: bool, size: u64) -> Result<()> {
    if secure {
        overwrite_with_zeros(path, size).with_context(|| format!("failed to securely wipe {}", path.display()))?;
    }
    remove_file(path)
}

fn overwrite_with_zeros(path: &Path, size: u64) -> Result<()> {
    let mut file = fs::OpenOptions::new().write(true).open(path)?;
    let zeros = [0u8; 64 * 1024];
    let mut remaining = size;
    while remaining > 0 {
        let n = remaining.min(zeros.len() as u64) as usize;
        file.write_all(&zeros[..n])?;
        remaining -= n as u64;
    }
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn password(s: &str) -> SecretString {
        SecretString::from_str(s)
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("plain.txt");
        let enc = dir.path().join("plain.txt.swb");
        let dec = dir.path().join("plain_out.txt");

        fs::write(&src, b"hello world").unwrap();

        encrypt(&src, &enc, &password("correct horse battery staple"), &Options::default()).unwrap();
        assert!(enc.exists());
        assert_eq!(&fs::read(&enc).unwrap()[0..4], b"SWX4");

        decrypt(&enc, &dec, &password("correct horse battery staple"), &Options::default()).unwrap();
        assert_eq!(fs::read(&dec).unwrap(), b"hello world");
    }

    #[test]
    fn decrypt_with_wrong_password_fails_auth() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("plain.txt");
        let enc = dir.path().join("plain.txt.swb");
        let dec = dir.path().join("plain_out.txt");

        fs::write(&src, b"some secret content").unwrap();
        encrypt(&src, &enc, &password("right password"), &Options::default()).unwrap();

        let err = decrypt(&enc, &dec, &password("wrong password"), &Options::default()).unwrap_err();
        assert_eq!(crate::error::kind_of(&err), Some(&SweetByteError::Auth));
        assert!(!dec.exists());
    }

    #[test]
    fn decrypt_rejects_bad_magic() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("plain.txt");
        let enc = dir.path().join("plain.txt.swb");
        let dec = dir.path().join("plain_out.txt");

        fs::write(&src, b"some content").unwrap();
        encrypt(&src, &enc, &password("a password"), &Options::default()).unwrap();

        let mut bytes = fs::read(&enc).unwrap();
        bytes[0] = b'X';
        fs::write(&enc, &bytes).unwrap();

        let err = decrypt(&enc, &dec, &password("a password"), &Options::default()).unwrap_err();
        assert!(matches!(crate::error::kind_of(&err), Some(&SweetByteError::Format(_))));
    }

    #[test]
    fn encrypt_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("empty.txt");
        let enc = dir.path().join("empty.txt.swb");
        fs::write(&src, b"").unwrap();

        assert!(encrypt(&src, &enc, &password("a password"), &Options::default()).is_err());
        assert!(!enc.exists());
    }

    #[test]
    fn large_roundtrip_survives_single_byte_corruption() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("big.bin");
        let enc = dir.path().join("big.bin.swb");
        let dec = dir.path().join("big_out.bin");

        let content = vec![0u8; 1024 * 1024];
        fs::write(&src, &content).unwrap();

        encrypt(&src, &enc, &password("correct horse battery staple"), &Options::default()).unwrap();

        let mut bytes = fs::read(&enc).unwrap();
        let flip_at = bytes.len() / 2;
        bytes[flip_at] ^= 0xFF;
        fs::write(&enc, &bytes).unwrap();

        decrypt(&enc, &dec, &password("correct horse battery staple"), &Options::default()).unwrap();
        assert_eq!(fs::read(&dec).unwrap(), content);
    }
}
