// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The depth-first dependency executor.
//!
//! Three-color DFS over the target table: `Done` targets are no-ops,
//! re-reaching a `Visiting` target is a dependency cycle. Dependencies run
//! in declaration order before the config decorator and the body, which
//! gives a stable reverse post-order over the reachable subgraph.

use crate::ctx::Ctx;
use crate::registry::Registry;
use smelt_core::{Attr, BuildError, Mark};

/// Execute one target and, transitively, everything it depends on.
///
/// Resource discipline: the environment checkpoint is taken before the
/// config body so config overrides stay visible through the target body;
/// the glob/join/map checkpoints are taken after it, so config allocations
/// are torn down with the target's own. Release order is maps, joined
/// strings, globs, environment last.
pub(crate) fn execute(
    registry: &Registry,
    marks: &mut [Mark],
    cx: &mut Ctx,
    index: usize,
) -> Result<(), BuildError> {
    let target = &registry.targets()[index];
    match marks[index] {
        Mark::Done => return Ok(()),
        Mark::Visiting => {
            return Err(BuildError::DependencyCycle(target.name().to_string()));
        }
        Mark::Unvisited => {}
    }
    marks[index] = Mark::Visiting;

    let span = tracing::debug_span!("target", name = target.name());
    let _guard = span.enter();

    let mut selected_config = None;
    for attr in target.attrs() {
        match attr {
            Attr::Depends(dep) => {
                let dep_index = registry
                    .find_target(dep)
                    .ok_or_else(|| BuildError::TargetNotFound(dep.clone()))?;
                execute(registry, marks, cx, dep_index)?;
            }
            Attr::WithConfig(name) => {
                if selected_config.is_some() {
                    tracing::warn!(
                        config = %name,
                        "target already has a config attached, ignoring"
                    );
                    continue;
                }
                let config_index = registry
                    .find_config(name)
                    .ok_or_else(|| BuildError::ConfigNotFound(name.clone()))?;
                selected_config = Some(config_index);
            }
        }
    }

    let env_checkpoint = cx.env_checkpoint();
    if let Some(config_index) = selected_config {
        let config = &registry.configs()[config_index];
        tracing::debug!(config = config.name(), "applying config");
        config.invoke(cx)?;
    }

    let scope = cx.scope_checkpoint();
    tracing::debug!("executing body");
    target.invoke(cx)?;

    cx.release_scope(scope);
    cx.release_env(env_checkpoint);
    marks[index] = Mark::Done;
    Ok(())
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
