// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking shell command execution.

use crate::error::ShellError;
use std::process::Command;

/// Run `command` through `sh -c` and block until it finishes.
///
/// The child inherits the caller's environment, working directory, and
/// standard streams. Any outcome other than a clean zero exit is an error.
pub fn run(command: &str) -> Result<(), ShellError> {
    tracing::debug!(command, "running shell command");
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(ShellError::Failed {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
