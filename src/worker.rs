use crate::error::Result;
use crate::queue::{Dequeued, TaskQueue};
use slog::{debug, Logger};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// A pool-owned thread running the dequeue-execute-publish cycle.
pub struct Worker {
    id: usize,
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn spawn(id: usize, queue: Arc<TaskQueue>, logger: Logger) -> Result<Worker> {
        let thread = thread::Builder::new()
            .name(format!("taskpool-worker-{}", id))
            .spawn(move || work_loop(id, queue, logger))?;

        Ok(Worker {
            id,
            thread: Some(thread),
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Wait for the worker's loop to return. The loop only returns on the
    /// terminate signal, so callers must shut the queue down first.
    pub fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            // task panics are caught before they reach the loop
            let _ = thread.join();
        }
    }
}

fn work_loop(id: usize, queue: Arc<TaskQueue>, logger: Logger) {
    debug!(logger, "worker started"; "worker" => id);
    loop {
        match queue.pop_blocking() {
            Dequeued::Task(task) => task.run(),
            Dequeued::Terminate => break,
        }
    }
    debug!(logger, "worker terminated"; "worker" => id);
}
