//! Chunk reader for streaming file processing.

use std::io::Read;

use anyhow::{Context, Result, bail};
use crossbeam_channel::Sender;

use crate::cancel::CancelToken;
use crate::codec::read_u32;
use crate::config::{CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::error::SweetByteError;
use crate::types::{Processing, Task};

/// Reads files in chunks for encryption or decryption.
pub struct ChunkReader {
    mode: Processing,
    chunk_size: usize,
}

impl ChunkReader {
    /// Creates a new chunk reader.
    ///
    /// # Arguments
    /// * `mode` - The processing mode
    /// * `chunk_size` - The chunk size in bytes
    pub fn new(mode: Processing, chunk_size: usize) -> Result<Self> {
        if chunk_size < MIN_CHUNK_SIZE {
            bail!("chunk size must be at least {MIN_CHUNK_SIZE} bytes, got {chunk_size}");
        }

        Ok(Self { mode, chunk_size })
    }

    /// Reads all chunks from the input and sends them to the channel,
    /// stopping early (without error) if `cancel` is set.
    pub fn read_all<R: Read>(&self, input: R, sender: Sender<Task>, cancel: &CancelToken) -> Result<()> {
        match self.mode {
            Processing::Encryption => self.read_for_encryption(input, sender, cancel),
            Processing::Decryption => self.read_for_decryption(input, sender, cancel),
        }
    }

    fn read_for_encryption<R: Read>(&self, mut reader: R, sender: Sender<Task>, cancel: &CancelToken) -> Result<()> {
        let mut buffer = vec![0u8; self.chunk_size];
        let mut index = 0u64;

        loop {
            if cancel.is_canceled() {
                bail!(SweetByteError::Canceled);
            }

            let n = reader.read(&mut buffer).context("failed to read chunk")?;
            if n == 0 {
                break;
            }

            let task = Task { data: buffer[..n].to_vec(), index };
            if sender.send(task).is_err() {
                break;
            }
            index += 1;
        }

        Ok(())
    }

    fn read_for_decryption<R: Read>(&self, mut reader: R, sender: Sender<Task>, cancel: &CancelToken) -> Result<()> {
        let mut index = 0u64;
        let mut len_prefix = [0u8; 4];

        loop {
            if cancel.is_canceled() {
                bail!(SweetByteError::Canceled);
            }

            match reader.read_exact(&mut len_prefix) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e).context("failed to read chunk length"),
            }

            let chunk_len = read_u32(&len_prefix) as usize;
            if chunk_len == 0 {
                bail!(SweetByteError::Format("zero-length chunk".into()));
            }

            let mut data = vec![0u8; chunk_len];
            reader.read_exact(&mut data).context("failed to read chunk data")?;

            let task = Task { data, index };
            if sender.send(task).is_err() {
                break;
            }
            index += 1;
        }

        Ok(())
    }
}

impl Default for ChunkReader {
    fn default() -> Self {
        Self::new(Processing::Encryption, CHUNK_SIZE).expect("valid default parameters")
    }
}
