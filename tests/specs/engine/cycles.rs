// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for dependency-cycle detection.

use smelt_engine::{Attr, BuildError, ExitCode, Forge};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn two_target_cycle_fails_without_running_any_body() {
    let ran: Rc<RefCell<u32>> = Rc::default();
    let mut forge = Forge::new();
    for (name, dep) in [("a", "b"), ("b", "a")] {
        let ran = Rc::clone(&ran);
        forge
            .target(name, [Attr::depends(dep)], move |_| {
                *ran.borrow_mut() += 1;
                Ok(())
            })
            .unwrap();
    }

    let err = forge.run(["a"]).unwrap_err();
    assert!(matches!(err, BuildError::DependencyCycle(_)));
    assert_eq!(err.exit_code().code(), 10);
    assert_eq!(*ran.borrow(), 0);
}

#[test]
fn cycle_diagnostic_names_the_target_reached_twice() {
    let mut forge = Forge::new();
    forge
        .target("alpha", [Attr::depends("beta")], |_| Ok(()))
        .unwrap();
    forge
        .target("beta", [Attr::depends("alpha")], |_| Ok(()))
        .unwrap();

    let err = forge.run(["alpha"]).unwrap_err();
    assert!(err.to_string().contains("\"alpha\""), "got: {err}");
}

#[test]
fn long_cycles_are_detected() {
    let mut forge = Forge::new();
    let names = ["n0", "n1", "n2", "n3", "n4"];
    for i in 0..names.len() {
        let dep = names[(i + 1) % names.len()];
        forge
            .target(names[i], [Attr::depends(dep)], |_| Ok(()))
            .unwrap();
    }

    let err = forge.run(["n0"]).unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::DependencyCycle);
}

#[test]
fn diamonds_are_not_cycles() {
    // Reaching a Done target twice is sharing, not a cycle.
    let mut forge = Forge::new();
    forge.target("base", [], |_| Ok(())).unwrap();
    forge
        .target("left", [Attr::depends("base")], |_| Ok(()))
        .unwrap();
    forge
        .target("right", [Attr::depends("base")], |_| Ok(()))
        .unwrap();
    forge
        .target(
            "top",
            [Attr::depends("left"), Attr::depends("right")],
            |_| Ok(()),
        )
        .unwrap();

    forge.run(["top"]).unwrap();
}
