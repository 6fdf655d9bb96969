// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! smelt-engine: the target/config registration and execution engine.
//!
//! A buildfile constructs a [`Forge`], registers targets and configs while
//! the engine is in its register phase, and then hands the CLI argument list
//! to [`Forge::run`]. Execution is a depth-first traversal over dependency
//! attributes with at-most-once bodies and cycle detection. Bodies receive a
//! [`Ctx`] handle whose glob/join/map/environment allocations are scoped to
//! the target: the executor checkpoints all four pools around every body and
//! releases them when it returns.
//!
//! ```no_run
//! use smelt_engine::{Attr, Forge};
//!
//! # fn main() -> Result<(), smelt_engine::BuildError> {
//! let mut forge = Forge::new();
//! forge.target("link", [], |cx| cx.run("cc -o app *.o"))?;
//! forge.target("build", [Attr::depends("link")], |cx| {
//!     cx.run("strip app")
//! })?;
//! forge.run(std::env::args().skip(1))
//! # }
//! ```

mod ctx;
mod dispatch;
mod env;
mod executor;
mod forge;
mod join;
mod mapper;
mod pool;
mod registry;

pub use ctx::Ctx;
pub use forge::Forge;
pub use mapper::MapRule;

// Buildfiles normally need only this crate; re-export the shared vocabulary.
pub use smelt_core::{Attr, BuildError, ExitCode, Phase};
