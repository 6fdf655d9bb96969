// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-level error types.

use thiserror::Error;

/// Errors from the glob and command primitives.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The glob pattern itself does not parse.
    #[error("invalid glob pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// A directory could not be read while expanding a pattern.
    #[error("read error while expanding \"{pattern}\": {source}")]
    Read {
        pattern: String,
        source: glob::GlobError,
    },

    /// The shell process could not be started.
    #[error("failed to spawn \"{command}\": {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The command ran and exited nonzero (or died on a signal).
    #[error("command \"{command}\" failed: {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}
