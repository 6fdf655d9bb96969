// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine lifecycle phases.

use std::fmt;

/// Lifecycle phase of an engine instance.
///
/// Registration is only legal in [`Phase::Register`]; `run` flips the engine
/// to [`Phase::Execute`] and it never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Targets and configs may be registered.
    #[default]
    Register,
    /// Reserved, never entered.
    Plan,
    /// Targets are executing; registration is fatal.
    Execute,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Register => "register",
            Phase::Plan => "plan",
            Phase::Execute => "execute",
        };
        f.write_str(s)
    }
}
