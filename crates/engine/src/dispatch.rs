// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command dispatch: synchronous execution and the bounded worker pool.
//!
//! Parallel commands run on plain spawned threads; there is no scheduler.
//! The driver drains the pool after every top-level target, so parallelism
//! never crosses a top-level boundary.

use smelt_core::{limits, BuildError};
use std::thread::{self, JoinHandle};

/// One outstanding parallel command.
struct Worker {
    command: String,
    handle: JoinHandle<Result<(), smelt_shell::ShellError>>,
}

/// Bounded pool of command workers with a LIFO join barrier.
#[derive(Default)]
pub(crate) struct CommandPool {
    workers: Vec<Worker>,
}

impl CommandPool {
    /// Run `command`, either blocking in place or on a pooled worker.
    pub(crate) fn dispatch(&mut self, parallel: bool, command: String) -> Result<(), BuildError> {
        if command.len() > limits::MAX_COMMAND_LEN {
            return Err(BuildError::CommandTooLong { len: command.len() });
        }

        if !parallel {
            return smelt_shell::run(&command).map_err(|e| BuildError::Shell(e.to_string()));
        }

        if self.workers.len() >= limits::MAX_WORKERS {
            return Err(BuildError::WorkerPoolFull);
        }
        let owned = command.clone();
        let handle = thread::Builder::new()
            .name(format!("smelt-worker-{}", self.workers.len()))
            .spawn(move || {
                let result = smelt_shell::run(&owned);
                if let Err(e) = &result {
                    tracing::error!(error = %e, "parallel command failed");
                }
                result
            })
            .map_err(|e| BuildError::ThreadSpawn(e.to_string()))?;
        self.workers.push(Worker { command, handle });
        Ok(())
    }

    /// Join every outstanding worker, most recent first.
    ///
    /// The pool is always empty afterwards; if any worker failed, the first
    /// failure observed is returned once the rest have been joined.
    pub(crate) fn join_all(&mut self) -> Result<(), BuildError> {
        let mut first_error = None;
        while let Some(worker) = self.workers.pop() {
            let result = match worker.handle.join() {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(BuildError::Shell(e.to_string())),
                Err(_) => Err(BuildError::WorkerPanic(worker.command)),
            };
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Number of workers not yet joined.
    pub(crate) fn outstanding(&self) -> usize {
        self.workers.len()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
