// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The engine value: registration surface and driver.

use crate::ctx::Ctx;
use crate::executor;
use crate::registry::Registry;
use smelt_core::{Attr, BuildError, Mark, Phase};

/// The build engine.
///
/// A `Forge` starts in the register phase, collects targets and configs,
/// and executes the CLI target list with [`Forge::run`]. Registration after
/// `run` is fatal: the phase split is an invariant, not a convention.
#[derive(Debug)]
pub struct Forge {
    registry: Registry,
    marks: Vec<Mark>,
    phase: Phase,
}

impl Forge {
    pub fn new() -> Self {
        Self {
            registry: Registry::default(),
            marks: Vec::new(),
            phase: Phase::Register,
        }
    }

    /// Register a target.
    ///
    /// `attrs` is the ordered attribute list: dependencies execute in
    /// declaration order, and at most one config may be attached.
    pub fn target<F>(
        &mut self,
        name: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
        body: F,
    ) -> Result<&mut Self, BuildError>
    where
        F: Fn(&mut Ctx) -> Result<(), BuildError> + 'static,
    {
        let name = name.into();
        if self.phase != Phase::Register {
            return Err(BuildError::InvalidPhase {
                what: "target",
                name,
                phase: self.phase,
            });
        }
        self.registry
            .add_target(name, attrs.into_iter().collect(), Box::new(body))?;
        Ok(self)
    }

    /// Register a config.
    pub fn config<F>(&mut self, name: impl Into<String>, body: F) -> Result<&mut Self, BuildError>
    where
        F: Fn(&mut Ctx) -> Result<(), BuildError> + 'static,
    {
        let name = name.into();
        if self.phase != Phase::Register {
            return Err(BuildError::InvalidPhase {
                what: "config",
                name,
                phase: self.phase,
            });
        }
        self.registry.add_config(name, Box::new(body))?;
        Ok(self)
    }

    /// Execute the given target names in order.
    ///
    /// An empty list is a successful no-op and leaves the engine in the
    /// register phase. Otherwise the engine enters the execute phase, runs
    /// one DFS per name, and drains the worker pool after each so parallel
    /// commands never leak across top-level targets. A name that is already
    /// `Done` (including duplicates in `args` itself) warns and is skipped.
    pub fn run<I, S>(&mut self, args: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        if args.is_empty() {
            return Ok(());
        }

        self.phase = Phase::Execute;
        self.marks.resize(self.registry.targets().len(), Mark::Unvisited);
        let mut cx = Ctx::new();

        for name in &args {
            let index = self
                .registry
                .find_target(name)
                .ok_or_else(|| BuildError::TargetNotFound(name.clone()))?;
            if self.marks[index] == Mark::Done {
                tracing::warn!(%name, "target already executed, skipping");
                continue;
            }

            tracing::debug!(%name, "running top-level target");
            executor::execute(&self.registry, &mut self.marks, &mut cx, index)?;
            cx.join_workers()?;
        }
        Ok(())
    }

    /// Names of all registered targets, in registration order.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.registry.targets().iter().map(|t| t.name())
    }

    /// Names of all registered configs, in registration order.
    pub fn config_names(&self) -> impl Iterator<Item = &str> {
        self.registry.configs().iter().map(|c| c.name())
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Default for Forge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "forge_tests.rs"]
mod tests;
