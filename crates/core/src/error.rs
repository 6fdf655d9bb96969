// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal build errors and their stable process exit codes.
//!
//! Every error here ends the build: the front-end prints the diagnostic to
//! stderr and exits with [`BuildError::exit_code`]. There is no recovery
//! contract between components.

use crate::limits;
use crate::phase::Phase;
use thiserror::Error;

/// Stable process exit codes, one per fatal condition.
///
/// The numbering is part of the tool's contract; scripts match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    TargetTableFull = 1,
    TargetNotFound = 2,
    ConfigTableFull = 3,
    InvalidPhase = 4,
    NameTooLong = 5,
    /// Allocation, thread creation, process spawn, or nonzero shell exit.
    OsFailure = 6,
    GlobPoolFull = 7,
    CommandTooLong = 8,
    WorkerPoolFull = 9,
    DependencyCycle = 10,
    ConfigNotFound = 11,
    /// Reserved. The attribute enum cannot express an unknown tag, but the
    /// code keeps its slot so later codes keep their numbering.
    UnknownAttr = 12,
    EnvPoolFull = 13,
    JoinPoolFull = 14,
    MapPoolFull = 15,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// A fatal build error.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("target table is full (max {} targets)", limits::MAX_TARGETS)]
    TargetTableFull,
    #[error("target not found: \"{0}\"")]
    TargetNotFound(String),
    #[error("config table is full (max {} configs)", limits::MAX_CONFIGS)]
    ConfigTableFull,
    #[error("cannot register {what} \"{name}\" in the {phase} phase")]
    InvalidPhase {
        what: &'static str,
        name: String,
        phase: Phase,
    },
    #[error("name too long: \"{0}\" (max {max} bytes)", max = limits::MAX_NAME_LEN)]
    NameTooLong(String),
    #[error(
        "mapped name too long: \"{0}\" (max {max} bytes)",
        max = limits::MAX_MAPPED_LEN
    )]
    MappedNameTooLong(String),
    #[error("shell error: {0}")]
    Shell(String),
    #[error("failed to spawn worker thread: {0}")]
    ThreadSpawn(String),
    #[error("worker thread panicked while running \"{0}\"")]
    WorkerPanic(String),
    #[error("invalid environment variable \"{0}\"")]
    InvalidEnv(String),
    #[error("glob pool is full (max {} live globs)", limits::MAX_GLOBS)]
    GlobPoolFull,
    #[error("command too long ({len} bytes, max {})", limits::MAX_COMMAND_LEN)]
    CommandTooLong { len: usize },
    #[error("worker pool is full (max {} workers)", limits::MAX_WORKERS)]
    WorkerPoolFull,
    #[error("dependency cycle detected at \"{0}\"")]
    DependencyCycle(String),
    #[error("config not found: \"{0}\"")]
    ConfigNotFound(String),
    #[error("environment pool is full (max {} records)", limits::MAX_ENVS)]
    EnvPoolFull,
    #[error(
        "joined-string pool is full (max {} strings)",
        limits::MAX_JOINED_STRINGS
    )]
    JoinPoolFull,
    #[error("map pool is full (max {} live maps)", limits::MAX_MAPS)]
    MapPoolFull,
}

impl BuildError {
    /// The exit code this error maps to.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BuildError::TargetTableFull => ExitCode::TargetTableFull,
            BuildError::TargetNotFound(_) => ExitCode::TargetNotFound,
            BuildError::ConfigTableFull => ExitCode::ConfigTableFull,
            BuildError::InvalidPhase { .. } => ExitCode::InvalidPhase,
            BuildError::NameTooLong(_) | BuildError::MappedNameTooLong(_) => ExitCode::NameTooLong,
            BuildError::Shell(_)
            | BuildError::ThreadSpawn(_)
            | BuildError::WorkerPanic(_)
            | BuildError::InvalidEnv(_) => ExitCode::OsFailure,
            BuildError::GlobPoolFull => ExitCode::GlobPoolFull,
            BuildError::CommandTooLong { .. } => ExitCode::CommandTooLong,
            BuildError::WorkerPoolFull => ExitCode::WorkerPoolFull,
            BuildError::DependencyCycle(_) => ExitCode::DependencyCycle,
            BuildError::ConfigNotFound(_) => ExitCode::ConfigNotFound,
            BuildError::EnvPoolFull => ExitCode::EnvPoolFull,
            BuildError::JoinPoolFull => ExitCode::JoinPoolFull,
            BuildError::MapPoolFull => ExitCode::MapPoolFull,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
