//! Concurrent executor for parallel task processing.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::cancel::CancelToken;
use crate::stream::processor::StreamProcessor;
use crate::types::{Task, TaskResult};

/// Executes data processing tasks concurrently.
pub struct ConcurrentExecutor {
    processor: Arc<StreamProcessor>,
    concurrency: usize,
}

impl ConcurrentExecutor {
    /// Creates a new concurrent executor.
    ///
    /// # Arguments
    /// * `processor` - The data processor
    /// * `concurrency` - Number of worker threads
    pub fn new(processor: StreamProcessor, concurrency: usize) -> Self {
        Self { processor: Arc::new(processor), concurrency }
    }

    /// Processes tasks from the receiver and sends results to the sender.
    ///
    /// Spawns worker threads that process tasks in parallel and stop
    /// early, without sending a result, once `cancel` is set.
    pub fn process(&self, tasks: Receiver<Task>, results: Sender<TaskResult>, cancel: &CancelToken) {
        let mut handles = Vec::with_capacity(self.concurrency);

        for _ in 0..self.concurrency {
            let processor = Arc::clone(&self.processor);
            let tasks = tasks.clone();
            let results = results.clone();
            let cancel = cancel.clone();

            let handle = thread::spawn(move || {
                for task in tasks {
                    if cancel.is_canceled() {
                        break;
                    }

                    let result = processor.process(task);
                    if result.error.is_some() {
                        cancel.cancel();
                    }
                    if results.send(result).is_err() {
                        break;
                    }
                }
            });

            handles.push(handle);
        }

        drop(results);

        for handle in handles {
            let _ = handle.join();
        }
    }
}
