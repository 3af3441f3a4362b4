//! Processing pipeline for streaming encryption/decryption.

use std::io::{Read, Write};
use std::thread;

use anyhow::Result;
use crossbeam_channel::bounded;

use crate::cancel::CancelToken;
use crate::chunk::ChunkProcessor;
use crate::config::CHUNK_SIZE;
use crate::stream::executor::ConcurrentExecutor;
use crate::stream::processor::StreamProcessor;
use crate::stream::reader::ChunkReader;
use crate::stream::writer::ChunkWriter;
use crate::types::Processing;
use crate::ui::progress::ProgressBar;

/// Processing pipeline for file encryption/decryption.
pub struct Pipeline {
    processor: StreamProcessor,
    concurrency: usize,
    mode: Processing,
    cancel: CancelToken,
}

impl Pipeline {
    /// Creates a new processing pipeline from an already-keyed chunk
    /// processor.
    ///
    /// # Arguments
    /// * `chunk` - The per-chunk compress/pad/seal/encode transform
    /// * `mode` - The processing mode
    /// * `workers` - Override for the worker thread count; defaults to the
    ///   host's available parallelism
    /// * `cancel` - Shared cancellation token, checked at every pipeline
    ///   stage so an external caller can abort mid-stream
    pub fn new(chunk: ChunkProcessor, mode: Processing, workers: Option<usize>, cancel: CancelToken) -> Self {
        let concurrency = workers.unwrap_or_else(|| thread::available_parallelism().map(|p| p.get()).unwrap_or(4));

        Self { processor: StreamProcessor::new(chunk, mode), concurrency, mode, cancel }
    }

    /// Processes the input and writes to output.
    ///
    /// # Arguments
    /// * `input` - The input reader
    /// * `output` - The output writer
    /// * `total_size` - Total input size for progress tracking
    pub fn process<R: Read + Send + 'static, W: Write + Send + 'static>(
        self,
        input: R,
        output: W,
        total_size: u64,
        progress_cb: Option<&(dyn Fn(u64, u64) + Send + Sync)>,
    ) -> Result<()> {
        let progress = ProgressBar::new(total_size, self.mode.label())?;

        let (task_sender, task_receiver) = bounded(self.concurrency * 2);
        let (result_sender, result_receiver) = bounded(self.concurrency * 2);

        let reader = ChunkReader::new(self.mode, CHUNK_SIZE)?;
        let mut writer = ChunkWriter::new(self.mode, total_size);

        let reader_cancel = self.cancel.clone();
        let reader_handle = thread::spawn(move || reader.read_all(input, task_sender, &reader_cancel));

        let executor = ConcurrentExecutor::new(self.processor, self.concurrency);
        let executor_cancel = self.cancel.clone();
        let executor_handle = thread::spawn(move || {
            executor.process(task_receiver, result_sender, &executor_cancel);
        });

        let write_result = writer.write_all(output, result_receiver, Some(&progress), progress_cb, &self.cancel);

        let read_result = reader_handle.join().map_err(|_| anyhow::anyhow!("reader thread panicked"))?;
        executor_handle.join().map_err(|_| anyhow::anyhow!("executor thread panicked"))?;

        progress.finish();

        // The writer sees every worker failure (each becomes a TaskResult
        // error), so its error is reported first; the reader's own failure
        // (e.g. an I/O error) only matters if the writer succeeded.
        write_result?;
        read_result?;

        Ok(())
    }
}
