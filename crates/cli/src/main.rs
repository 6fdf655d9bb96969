// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! smelt - build orchestrator CLI
//!
//! The binary embeds the reference buildfile from [`buildfile`]; a real
//! project links `smelt-engine` and registers its own graph the same way.

mod buildfile;

use anyhow::Result;
use clap::Parser;
use smelt_core::BuildError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "smelt",
    version,
    about = "smelt - a build orchestrator embedded in Rust"
)]
struct Cli {
    /// Change to <dir> before doing anything
    #[arg(short = 'C', value_name = "DIR")]
    directory: Option<PathBuf>,

    /// List registered targets and configs instead of building
    #[arg(long)]
    list: bool,

    /// Targets to execute, in order
    targets: Vec<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let code = e
            .downcast_ref::<BuildError>()
            .map_or(1, |build| build.exit_code().code());
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Apply -C before the graph runs so globs and commands see the right cwd.
    if let Some(ref dir) = cli.directory {
        let canonical = std::fs::canonicalize(dir).map_err(|e| {
            anyhow::anyhow!("cannot change to directory '{}': {}", dir.display(), e)
        })?;
        std::env::set_current_dir(&canonical).map_err(|e| {
            anyhow::anyhow!("cannot change to directory '{}': {}", canonical.display(), e)
        })?;
    }

    let mut forge = buildfile::graph()?;
    if cli.list {
        println!("targets:");
        for name in forge.target_names() {
            println!("  {name}");
        }
        println!("configs:");
        for name in forge.config_names() {
            println!("  {name}");
        }
        return Ok(());
    }

    forge.run(cli.targets)?;
    Ok(())
}

/// Warnings go to stdout; fatal diagnostics take the stderr path in `main`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stdout)
        .init();
}
