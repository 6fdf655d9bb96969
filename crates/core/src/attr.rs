// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target attributes: dependency edges and config attachments.

/// A declarative modifier on a target.
///
/// Attributes are resolved by name when the target executes, not when it is
/// registered, so forward references between targets are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// Execute the named target before this one.
    Depends(String),
    /// Run the named config immediately before this target's body.
    ///
    /// At most one config applies per target; a second `WithConfig` attribute
    /// is ignored with a warning.
    WithConfig(String),
}

impl Attr {
    /// Dependency edge on `target`.
    pub fn depends(target: impl Into<String>) -> Self {
        Attr::Depends(target.into())
    }

    /// Config attachment on `config`.
    pub fn with_config(config: impl Into<String>) -> Self {
        Attr::WithConfig(config.into())
    }
}

#[cfg(test)]
#[path = "attr_tests.rs"]
mod tests;
