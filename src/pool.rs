use crate::error::{Error, Result};
use crate::handle::TaskHandle;
use crate::queue::TaskQueue;
use crate::task::Task;
use crate::worker::Worker;
use slog::{debug, info, o, Discard, Logger};
use std::sync::Arc;

/// Executes submitted closures on a fixed set of worker threads.
/// # Example
///
/// ```
/// use taskpool::ThreadPool;
///
/// let pool = ThreadPool::new(2).unwrap();
/// let handle = pool.submit(|| 1 + 1).unwrap();
/// assert_eq!(handle.get().unwrap(), 2);
/// ```
pub struct ThreadPool {
    queue: Arc<TaskQueue>,
    workers: Vec<Worker>,
    logger: Logger,
}

impl ThreadPool {
    /// Create a pool with `size` worker threads, logging to nowhere.
    pub fn new(size: usize) -> Result<ThreadPool> {
        ThreadPool::with_logger(size, Logger::root(Discard, o!()))
    }

    /// Create a pool with one worker per logical CPU.
    pub fn with_default_size() -> Result<ThreadPool> {
        ThreadPool::new(num_cpus::get())
    }

    pub fn with_logger(size: usize, logger: Logger) -> Result<ThreadPool> {
        if size == 0 {
            return Err(Error::invalid_config(
                "pool needs at least one worker".to_string(),
            ));
        }

        let queue = Arc::new(TaskQueue::new());
        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            match Worker::spawn(id, queue.clone(), logger.clone()) {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    // unwind the workers that did start before reporting
                    queue.shutdown();
                    for worker in &mut workers {
                        worker.join();
                    }
                    return Err(e);
                }
            }
        }

        info!(logger, "pool started"; "workers" => size);
        Ok(ThreadPool {
            queue,
            workers,
            logger,
        })
    }

    /// Hand `work` to the pool. Returns a handle to its eventual outcome,
    /// or `PoolShuttingDown` once teardown has begun.
    ///
    /// Never waits on task execution; only the O(1) queue append happens
    /// under the lock.
    pub fn submit<F, T>(&self, work: F) -> Result<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (task, slot) = Task::package(work);
        self.queue.push(task)?;
        Ok(TaskHandle::new(slot))
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Stop accepting work, let the workers drain everything already
    /// queued, and join them. Idempotent; `Drop` calls this.
    pub fn shutdown(&mut self) {
        if self.workers.is_empty() {
            return;
        }

        debug!(self.logger, "shutting down"; "pending" => self.queue.len());
        self.queue.shutdown();
        for worker in &mut self.workers {
            worker.join();
            debug!(self.logger, "worker joined"; "worker" => worker.id());
        }
        self.workers.clear();
        info!(self.logger, "pool torn down");
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
