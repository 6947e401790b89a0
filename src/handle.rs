use crate::error::{Error, Result};
use std::sync::{Arc, Condvar, Mutex};

// value produced by the task, or the message of the panic it raised
type Outcome<T> = std::result::Result<T, String>;

/// Single-assignment cell shared between one worker (writer) and the
/// handle holder (reader). Synchronized independently of the task queue so
/// a slow reader never blocks dispatch.
pub(crate) struct Slot<T> {
    outcome: Mutex<Option<Outcome<T>>>,
    written: Condvar,
}

impl<T> Slot<T> {
    pub(crate) fn new() -> Slot<T> {
        Slot {
            outcome: Mutex::new(None),
            written: Condvar::new(),
        }
    }

    // the single publication point; written at most once
    pub(crate) fn publish(&self, outcome: Outcome<T>) {
        {
            let mut guard = self.outcome.lock().unwrap();
            debug_assert!(guard.is_none());
            *guard = Some(outcome);
        }
        self.written.notify_all();
    }

    fn take_blocking(&self) -> Outcome<T> {
        let mut guard = self.outcome.lock().unwrap();
        loop {
            if let Some(outcome) = guard.take() {
                return outcome;
            }
            guard = self.written.wait(guard).unwrap();
        }
    }

    fn wait_written(&self) {
        let mut guard = self.outcome.lock().unwrap();
        while guard.is_none() {
            guard = self.written.wait(guard).unwrap();
        }
    }

    fn is_written(&self) -> bool {
        self.outcome.lock().unwrap().is_some()
    }
}

/// Caller-held reference to a submitted task's eventual outcome.
pub struct TaskHandle<T> {
    slot: Arc<Slot<T>>,
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(slot: Arc<Slot<T>>) -> TaskHandle<T> {
        TaskHandle { slot }
    }

    /// Block until the task has finished, then return its value or the
    /// failure it raised. The task is never re-invoked; consuming the
    /// handle makes a second retrieval a compile error rather than a
    /// runtime one.
    pub fn get(self) -> Result<T> {
        self.slot.take_blocking().map_err(Error::task_failed)
    }

    /// Block until the outcome is published, without consuming the handle.
    /// Repeatable; returns immediately once the task has finished.
    pub fn wait(&self) {
        self.slot.wait_written();
    }

    /// Whether the outcome has been published yet. Never blocks.
    pub fn is_ready(&self) -> bool {
        self.slot.is_written()
    }
}
