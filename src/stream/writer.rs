//! Chunk writer for streaming file processing.

use std::io::Write;

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;

use crate::cancel::CancelToken;
use crate::codec::write_u32;
use crate::stream::buffer::SequentialBuffer;
use crate::types::{Processing, TaskResult};
use crate::ui::progress::ProgressBar;

/// Writes processed chunks to output in sequential order.
pub struct ChunkWriter {
    mode: Processing,
    buffer: SequentialBuffer,
    total: u64,
    written: u64,
}

impl ChunkWriter {
    /// Creates a new chunk writer. `total` is the caller-known plaintext
    /// size, forwarded to `progress_cb` alongside cumulative bytes written.
    pub fn new(mode: Processing, total: u64) -> Self {
        Self { mode, buffer: SequentialBuffer::new(0), total, written: 0 }
    }

    /// Writes all results from the channel to the output, in task order.
    ///
    /// On the first task error it sets `cancel` (so the reader and workers
    /// stop producing more work) and drains the rest of the channel
    /// without writing, then returns the error. `progress_cb`, if given, is
    /// called with `(bytes_done, total)` after every chunk is written, in
    /// addition to the indicatif bar.
    pub fn write_all<W: Write>(
        &mut self,
        mut output: W,
        receiver: Receiver<TaskResult>,
        progress: Option<&ProgressBar>,
        progress_cb: Option<&(dyn Fn(u64, u64) + Send + Sync)>,
        cancel: &CancelToken,
    ) -> Result<()> {
        let mut first_error = None;

        for result in receiver {
            if first_error.is_some() {
                continue;
            }

            if let Some(ref err) = result.error {
                first_error = Some(anyhow::Error::new(err.clone()).context(format!("task {} failed", result.index)));
                cancel.cancel();
                continue;
            }

            let ready = self.buffer.add(result);
            if let Err(e) = self.write_ordered(&mut output, &ready, progress, progress_cb) {
                first_error = Some(e);
                cancel.cancel();
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        let remaining = self.buffer.flush();
        self.write_ordered(&mut output, &remaining, progress, progress_cb)?;

        Ok(())
    }

    fn write_ordered<W: Write>(
        &mut self,
        output: &mut W,
        results: &[TaskResult],
        progress: Option<&ProgressBar>,
        progress_cb: Option<&(dyn Fn(u64, u64) + Send + Sync)>,
    ) -> Result<()> {
        for result in results {
            if matches!(self.mode, Processing::Encryption) {
                write_u32_to(output, result.data.len())?;
            }

            output.write_all(&result.data).context("failed to write chunk data")?;

            self.written += result.size as u64;
            if let Some(bar) = progress {
                bar.add(result.size as u64);
            }
            if let Some(cb) = progress_cb {
                cb(self.written, self.total);
            }
        }

        Ok(())
    }
}

fn write_u32_to<W: Write>(output: &mut W, len: usize) -> Result<()> {
    let mut prefix = Vec::with_capacity(4);
    write_u32(&mut prefix, u32::try_from(len).context("chunk length exceeds u32")?);
    output.write_all(&prefix).context("failed to write chunk size")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn stops_on_first_task_error_and_sets_cancel() {
        let (tx, rx) = unbounded();
        tx.send(TaskResult::ok(0, vec![1, 2, 3], 3)).unwrap();
        tx.send(TaskResult::err(1, &anyhow::anyhow!("boom"))).unwrap();
        tx.send(TaskResult::ok(2, vec![4, 5, 6], 3)).unwrap();
        drop(tx);

        let cancel = CancelToken::new();
        let mut writer = ChunkWriter::new(Processing::Decryption, 6);
        let mut out = Vec::new();

        let result = writer.write_all(&mut out, rx, None, None, &cancel);
        assert!(result.is_err());
        assert!(cancel.is_canceled());
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn preserves_typed_error_kind_from_task_result() {
        use crate::error::{SweetByteError, kind_of};

        let (tx, rx) = unbounded();
        tx.send(TaskResult::err(0, &anyhow::Error::new(SweetByteError::Corruption { chunk: 0 }))).unwrap();
        drop(tx);

        let cancel = CancelToken::new();
        let mut writer = ChunkWriter::new(Processing::Decryption, 6);
        let mut out = Vec::new();

        let err = writer.write_all(&mut out, rx, None, None, &cancel).unwrap_err();
        assert_eq!(kind_of(&err), Some(&SweetByteError::Corruption { chunk: 0 }));
    }
}
