// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reference buildfile.
//!
//! This graph is what ships with the `smelt` binary: a small, dependency-
//! ordered demonstration that doubles as the smoke surface for the
//! behavioral specs. A project embedding the engine replaces this module
//! with its own targets.

use smelt_core::BuildError;
use smelt_engine::{Attr, Forge, MapRule};

/// Build the reference graph.
pub fn graph() -> Result<Forge, BuildError> {
    let mut forge = Forge::new();

    forge.config("debug", |cx| cx.set_env("SMELT_CFLAGS", "-g -O0"))?;

    forge.target("link", [], |_| {
        println!("Linking...");
        Ok(())
    })?;

    forge.target("build", [Attr::depends("link")], |_| {
        println!("Building...");
        Ok(())
    })?;

    // Globs C sources in the working directory and shows where their
    // objects would land. `-C` points the binary at a source tree.
    forge.target("objects", [], |cx| {
        let sources = cx.glob("src/*.c")?;
        if sources.is_empty() {
            println!("no C sources under src/");
            return Ok(());
        }
        let objects = cx.map(&sources, &[MapRule::ext("o"), MapRule::parent("build")])?;
        let listing = cx.join(&objects, " ")?;
        println!("objects: {listing}");
        Ok(())
    })?;

    forge.target("flags", [Attr::with_config("debug")], |cx| {
        let flags = cx.get_env("SMELT_CFLAGS").unwrap_or_default();
        println!("compiling with: {flags}");
        Ok(())
    })?;

    forge.target("fan", [], |cx| {
        for worker in 1..=3 {
            cx.run_bg(format!("echo \"worker {worker} done\""))?;
        }
        Ok(())
    })?;

    forge.target(
        "all",
        [Attr::depends("build"), Attr::depends("objects")],
        |_| {
            println!("All done.");
            Ok(())
        },
    )?;

    Ok(forge)
}

#[cfg(test)]
#[path = "buildfile_tests.rs"]
mod tests;
