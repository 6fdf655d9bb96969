// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem glob expansion.

use crate::error::ShellError;
use glob::MatchOptions;

/// Expand a glob pattern against the filesystem.
///
/// Matching follows POSIX `glob(3)` conventions: `*` and `?` never cross a
/// `/`, and a leading `.` must be matched literally. Directory matches carry
/// a trailing `/` so callers can tell them apart from files. A pattern that
/// matches nothing yields an empty list, not an error.
pub fn expand(pattern: &str) -> Result<Vec<String>, ShellError> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let paths = glob::glob_with(pattern, options).map_err(|source| ShellError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|source| ShellError::Read {
            pattern: pattern.to_string(),
            source,
        })?;
        let mut name = path.to_string_lossy().into_owned();
        if path.is_dir() && !name.ends_with('/') {
            name.push('/');
        }
        matches.push(name);
    }

    tracing::trace!(pattern, count = matches.len(), "expanded glob");
    Ok(matches)
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
