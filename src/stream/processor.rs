//! Adapts [`crate::chunk::ChunkProcessor`] to the worker-pool task/result
//! protocol: turns a [`Task`] into a [`TaskResult`], converting the first
//! `anyhow::Error` it hits into the result's typed error slot instead of
//! propagating it.

use crate::chunk::ChunkProcessor;
use crate::types::{Processing, Task, TaskResult};

/// Processes data chunks through the encryption/decryption pipeline.
pub struct StreamProcessor {
    chunk: ChunkProcessor,
    mode: Processing,
}

impl StreamProcessor {
    pub fn new(chunk: ChunkProcessor, mode: Processing) -> Self {
        Self { chunk, mode }
    }

    /// Processes a single task, in the direction fixed by `mode`.
    pub fn process(&self, task: Task) -> TaskResult {
        let input_size = task.data.len();
        let outcome = match self.mode {
            Processing::Encryption => self.chunk.encrypt_chunk(&task.data),
            Processing::Decryption => self.chunk.decrypt_chunk(&task.data, task.index),
        };

        match outcome {
            Ok(data) => {
                let size = match self.mode {
                    Processing::Encryption => input_size,
                    Processing::Decryption => data.len(),
                };
                TaskResult::ok(task.index, data, size)
            }
            Err(e) => TaskResult::err(task.index, &e),
        }
    }
}
