// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for environment scoping across targets.
//!
//! The process environment is shared, so these run `#[serial]`.

use serial_test::serial;
use smelt_engine::{Attr, Forge};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
#[serial]
fn config_environment_is_visible_in_the_body_and_restored_after() {
    std::env::remove_var("SPEC_FLAGS");
    let seen: Rc<RefCell<Option<String>>> = Rc::default();

    let mut forge = Forge::new();
    forge
        .config("debug", |cx| cx.set_env("SPEC_FLAGS", "-g"))
        .unwrap();
    let seen_in_body = Rc::clone(&seen);
    forge
        .target("t", [Attr::with_config("debug")], move |cx| {
            *seen_in_body.borrow_mut() = cx.get_env("SPEC_FLAGS");
            Ok(())
        })
        .unwrap();

    forge.run(["t"]).unwrap();
    assert_eq!(seen.borrow().as_deref(), Some("-g"));
    assert!(std::env::var_os("SPEC_FLAGS").is_none());
}

#[test]
#[serial]
fn prior_values_are_restored_not_cleared() {
    std::env::set_var("SPEC_PREV", "original");

    let mut forge = Forge::new();
    forge
        .target("t", [], |cx| cx.set_env("SPEC_PREV", "overridden"))
        .unwrap();
    forge.run(["t"]).unwrap();

    assert_eq!(std::env::var("SPEC_PREV").as_deref(), Ok("original"));
    std::env::remove_var("SPEC_PREV");
}

#[test]
#[serial]
fn dependency_overrides_do_not_leak_into_dependents() {
    std::env::remove_var("SPEC_DEP");
    let seen: Rc<RefCell<Option<String>>> = Rc::default();

    let mut forge = Forge::new();
    forge
        .target("dep", [], |cx| cx.set_env("SPEC_DEP", "from-dep"))
        .unwrap();
    let seen_in_body = Rc::clone(&seen);
    forge
        .target("top", [Attr::depends("dep")], move |cx| {
            *seen_in_body.borrow_mut() = cx.get_env("SPEC_DEP");
            Ok(())
        })
        .unwrap();

    forge.run(["top"]).unwrap();
    // The dependency's scope closed before the dependent's body ran.
    assert_eq!(seen.borrow().as_deref(), None);
}

#[test]
#[serial]
fn overrides_are_visible_to_dispatched_commands() {
    std::env::remove_var("SPEC_CMD");
    let tmp = tempfile::TempDir::new().unwrap();
    let out = tmp.path().join("env.txt");
    let out_for_cmd = out.clone();

    let mut forge = Forge::new();
    forge
        .target("t", [], move |cx| {
            cx.set_env("SPEC_CMD", "propagated")?;
            cx.run(format!("echo \"$SPEC_CMD\" > {}", out_for_cmd.display()))
        })
        .unwrap();
    forge.run(["t"]).unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "propagated\n");
    assert!(std::env::var_os("SPEC_CMD").is_none());
}
