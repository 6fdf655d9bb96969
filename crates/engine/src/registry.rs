// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded tables of registered targets and configs.

use crate::ctx::Ctx;
use smelt_core::{limits, Attr, BuildError};

/// A target or config body: user code run with the engine handle.
pub type Body = Box<dyn Fn(&mut Ctx) -> Result<(), BuildError>>;

/// A registered target: name, body, and its ordered attribute list.
pub struct TargetDecl {
    name: String,
    body: Body,
    attrs: Vec<Attr>,
}

impl std::fmt::Debug for TargetDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetDecl")
            .field("name", &self.name)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl TargetDecl {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub(crate) fn invoke(&self, cx: &mut Ctx) -> Result<(), BuildError> {
        (self.body)(cx)
    }
}

/// A registered config: a setup decorator run before the target it is
/// attached to.
pub struct ConfigDecl {
    name: String,
    body: Body,
}

impl std::fmt::Debug for ConfigDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigDecl")
            .field("name", &self.name)
            .finish()
    }
}

impl ConfigDecl {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self, cx: &mut Ctx) -> Result<(), BuildError> {
        (self.body)(cx)
    }
}

/// The registration tables.
///
/// Lookup is a linear scan; the target scan runs from the most recently
/// registered end so a later registration shadows an earlier one with the
/// same name.
#[derive(Default, Debug)]
pub(crate) struct Registry {
    targets: Vec<TargetDecl>,
    configs: Vec<ConfigDecl>,
}

impl Registry {
    pub(crate) fn add_target(
        &mut self,
        name: String,
        attrs: Vec<Attr>,
        body: Body,
    ) -> Result<(), BuildError> {
        if name.len() > limits::MAX_NAME_LEN {
            return Err(BuildError::NameTooLong(name));
        }
        if self.targets.len() >= limits::MAX_TARGETS {
            return Err(BuildError::TargetTableFull);
        }
        tracing::debug!(%name, attrs = attrs.len(), "registered target");
        self.targets.push(TargetDecl { name, body, attrs });
        Ok(())
    }

    pub(crate) fn add_config(&mut self, name: String, body: Body) -> Result<(), BuildError> {
        if name.len() > limits::MAX_NAME_LEN {
            return Err(BuildError::NameTooLong(name));
        }
        if self.configs.len() >= limits::MAX_CONFIGS {
            return Err(BuildError::ConfigTableFull);
        }
        tracing::debug!(%name, "registered config");
        self.configs.push(ConfigDecl { name, body });
        Ok(())
    }

    /// Index of the named target, scanning newest-first.
    pub(crate) fn find_target(&self, name: &str) -> Option<usize> {
        self.targets.iter().rposition(|t| t.name == name)
    }

    /// Index of the named config.
    pub(crate) fn find_config(&self, name: &str) -> Option<usize> {
        self.configs.iter().position(|c| c.name == name)
    }

    pub(crate) fn targets(&self) -> &[TargetDecl] {
        &self.targets
    }

    pub(crate) fn configs(&self) -> &[ConfigDecl] {
        &self.configs
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
