// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path-name rewriting.
//!
//! Rules apply left to right over a working copy of each input, so a later
//! rule sees the path as rewritten by earlier ones.

use smelt_core::{limits, BuildError};

/// A single path rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapRule {
    /// Replace everything after the rightmost `.` with the given extension.
    ///
    /// `src/a.c` with extension `o` becomes `src/a.o`. A path without a `.`
    /// is left unchanged, with a warning.
    Ext(String),
    /// Replace everything before the leftmost `/` with the given directory.
    ///
    /// `src/a.c` with parent `build` becomes `build/a.c`. Paths are split on
    /// `/` unconditionally; a path without one is left unchanged, with a
    /// warning.
    Parent(String),
}

impl MapRule {
    pub fn ext(extension: impl Into<String>) -> Self {
        MapRule::Ext(extension.into())
    }

    pub fn parent(directory: impl Into<String>) -> Self {
        MapRule::Parent(directory.into())
    }
}

/// Apply `rules` in order to one input path.
///
/// The working buffer is bounded from the initial copy on: an input already
/// over the limit is fatal even with no rules to apply.
pub(crate) fn apply(input: &str, rules: &[MapRule]) -> Result<String, BuildError> {
    let mut name = input.to_string();
    if name.len() > limits::MAX_MAPPED_LEN {
        return Err(BuildError::MappedNameTooLong(name));
    }
    for rule in rules {
        match rule {
            MapRule::Ext(extension) => match name.rfind('.') {
                Some(dot) => {
                    name.truncate(dot + 1);
                    name.push_str(extension);
                }
                None => {
                    tracing::warn!(path = %name, "path has no extension to replace, leaving it unchanged");
                }
            },
            MapRule::Parent(directory) => match name.find('/') {
                Some(slash) => {
                    name.replace_range(..slash, directory);
                }
                None => {
                    tracing::warn!(path = %name, "path has no parent to replace, leaving it unchanged");
                }
            },
        }
        if name.len() > limits::MAX_MAPPED_LEN {
            return Err(BuildError::MappedNameTooLong(name));
        }
    }
    Ok(name)
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;
