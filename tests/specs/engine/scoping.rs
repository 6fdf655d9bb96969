// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the per-target resource scope.

use serial_test::serial;
use smelt_engine::{Attr, Forge, MapRule};
use std::cell::RefCell;
use std::rc::Rc;

fn c_sources() -> (tempfile::TempDir, String) {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("a.c"), b"").unwrap();
    std::fs::write(tmp.path().join("b.c"), b"").unwrap();
    let pattern = format!("{}/*.c", tmp.path().display());
    (tmp, pattern)
}

#[test]
fn glob_matches_are_observed_then_released() {
    let (_tmp, pattern) = c_sources();
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();

    let mut forge = Forge::new();
    let seen_in_body = Rc::clone(&seen);
    let pattern_for_body = pattern.clone();
    forge
        .target("globber", [], move |cx| {
            let matches = cx.glob(&pattern_for_body)?;
            for path in matches.iter() {
                seen_in_body.borrow_mut().push(path.clone());
            }
            Ok(())
        })
        .unwrap();
    forge
        .target("after", [Attr::depends("globber")], |cx| {
            // The dependency's glob slot was released before this body.
            assert_eq!(cx.live_globs(), 0);
            Ok(())
        })
        .unwrap();

    forge.run(["after"]).unwrap();
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].ends_with("/a.c"));
    assert!(seen[1].ends_with("/b.c"));
}

#[test]
#[serial]
fn every_pool_returns_to_its_entry_top() {
    let (_tmp, pattern) = c_sources();

    let mut forge = Forge::new();
    let pattern_for_body = pattern.clone();
    forge
        .target("alloc", [], move |cx| {
            let sources = cx.glob(&pattern_for_body)?;
            let objects = cx.map(&sources, &[MapRule::ext("o")])?;
            cx.join(&objects, " ")?;
            cx.set_env("SPEC_SCOPED", "1")?;
            Ok(())
        })
        .unwrap();
    forge
        .target("check", [Attr::depends("alloc")], |cx| {
            assert_eq!(cx.live_globs(), 0);
            assert_eq!(cx.live_maps(), 0);
            assert_eq!(cx.live_joins(), 0);
            assert_eq!(cx.live_envs(), 0);
            Ok(())
        })
        .unwrap();

    forge.run(["check"]).unwrap();
}

#[test]
fn config_allocations_share_the_target_scope() {
    let (_tmp, pattern) = c_sources();

    let mut forge = Forge::new();
    forge
        .config("sources", move |cx| cx.glob(&pattern).map(|_| ()))
        .unwrap();
    forge
        .target("uses", [Attr::with_config("sources")], |cx| {
            assert_eq!(cx.live_globs(), 1);
            Ok(())
        })
        .unwrap();
    forge
        .target("after", [Attr::depends("uses")], |cx| {
            assert_eq!(cx.live_globs(), 0);
            Ok(())
        })
        .unwrap();

    forge.run(["after"]).unwrap();
}

#[test]
fn handles_outlive_their_pool_slots() {
    let (_tmp, pattern) = c_sources();
    let kept: Rc<RefCell<Vec<Rc<[String]>>>> = Rc::default();

    let mut forge = Forge::new();
    let kept_in_body = Rc::clone(&kept);
    forge
        .target("keeper", [], move |cx| {
            let matches = cx.glob(&pattern)?;
            kept_in_body.borrow_mut().push(matches);
            Ok(())
        })
        .unwrap();

    forge.run(["keeper"]).unwrap();
    // The body smuggled its handle out; the data is still readable even
    // though the pool slot is long gone.
    assert_eq!(kept.borrow()[0].len(), 2);
}
