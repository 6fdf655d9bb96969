// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for executing targets through the reference binary.

use crate::prelude::*;

#[test]
fn no_arguments_is_a_successful_noop() {
    let run = smelt(&[]).passes();
    assert!(run.stdout.is_empty(), "stdout: {}", run.stdout);
}

#[test]
fn build_runs_its_dependency_first() {
    let run = smelt(&["build"]).passes();
    let link_at = run.stdout.find("Linking...").unwrap();
    let build_at = run.stdout.find("Building...").unwrap();
    assert!(link_at < build_at, "stdout: {}", run.stdout);
}

#[test]
fn repeated_targets_warn_and_run_once() {
    let run = smelt(&["build", "build"])
        .passes()
        .stdout_has("already executed");
    assert_eq!(run.stdout.matches("Building...").count(), 1);
}

#[test]
fn shared_dependencies_run_once_across_arguments() {
    // "all" already builds "build"; naming "link" afterwards is a no-op.
    let run = smelt(&["all", "link"]).passes();
    assert_eq!(run.stdout.matches("Linking...").count(), 1);
}

#[test]
fn config_overrides_reach_the_target_body() {
    smelt(&["flags"]).passes().stdout_has("compiling with: -g -O0");
}

#[test]
fn targets_execute_in_argument_order() {
    let run = smelt(&["link", "flags"]).passes();
    let link_at = run.stdout.find("Linking...").unwrap();
    let flags_at = run.stdout.find("compiling with:").unwrap();
    assert!(link_at < flags_at, "stdout: {}", run.stdout);
}

#[test]
fn objects_maps_globbed_sources_into_the_build_tree() {
    let project = c_project();
    smelt_in(Some(project.path()), &["objects"])
        .passes()
        .stdout_has("objects: build/a.o build/b.o");
}

#[test]
fn objects_without_sources_reports_and_succeeds() {
    let empty = tempfile::TempDir::new().unwrap();
    smelt_in(Some(empty.path()), &["objects"])
        .passes()
        .stdout_has("no C sources under src/");
}

#[test]
fn fan_collects_all_parallel_workers() {
    let run = smelt(&["fan"]).passes();
    for worker in 1..=3 {
        assert!(
            run.stdout.contains(&format!("worker {worker} done")),
            "stdout: {}",
            run.stdout
        );
    }
}

#[test]
fn dash_c_changes_the_working_directory() {
    let project = c_project();
    let dir = project.path().display().to_string();
    smelt(&["-C", &dir, "objects"])
        .passes()
        .stdout_has("objects: build/a.o build/b.o");
}
