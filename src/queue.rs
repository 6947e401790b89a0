use crate::error::{Error, Result};
use crate::task::Task;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

pub enum Dequeued {
    Task(Task),
    // pool is shutting down and the queue is drained
    Terminate,
}

struct Inner {
    tasks: VecDeque<Task>,
    shutting_down: bool,
}

/// FIFO of pending tasks shared between the pool and its workers.
///
/// The queue and the shutdown flag live under one lock; workers park on the
/// condition variable and re-check the predicate after every wake.
pub struct TaskQueue {
    inner: Mutex<Inner>,
    ready: Condvar,
}

impl TaskQueue {
    pub fn new() -> TaskQueue {
        TaskQueue {
            inner: Mutex::new(Inner {
                tasks: VecDeque::new(),
                shutting_down: false,
            }),
            ready: Condvar::new(),
        }
    }

    /// Append a task and wake one parked worker.
    pub fn push(&self, task: Task) -> Result<()> {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.shutting_down {
                return Err(Error::shutting_down());
            }
            inner.tasks.push_back(task);
        }
        self.ready.notify_one();
        Ok(())
    }

    /// Park the calling worker until a task is available or the pool is
    /// shutting down with nothing left to drain.
    pub fn pop_blocking(&self) -> Dequeued {
        let mut inner = self.inner.lock().unwrap();
        loop {
            if let Some(task) = inner.tasks.pop_front() {
                return Dequeued::Task(task);
            }
            if inner.shutting_down {
                return Dequeued::Terminate;
            }
            inner = self.ready.wait(inner).unwrap();
        }
    }

    /// Stop accepting tasks and wake every worker so each one observes the
    /// new state once the queue runs dry.
    pub fn shutdown(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.shutting_down = true;
        }
        self.ready.notify_all();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().tasks.len()
    }
}
