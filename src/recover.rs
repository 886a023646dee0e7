// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recovery points: where an unwinding violation gets stopped and inspected.
//!
//! The checks never recover on their own. Code that wants to survive a
//! violation (a test harness, a request boundary, a worker supervisor) stops
//! the unwind here and decides what to do based on the category.

use crate::violation::ContractViolation;
use std::any::Any;
use std::panic::{self, Location, UnwindSafe};
use std::sync::Once;

/// Run `f`, turning a contract violation into `Err`.
///
/// Panics that are not contract violations are resumed untouched, so a stray
/// `unwrap()` inside `f` still takes the thread down as it would without
/// `catch`.
///
/// ```
/// let err = contract::catch(|| contract::fail("unreachable")).unwrap_err();
/// assert!(err.is_fail());
/// ```
pub fn catch<F, R>(f: F) -> Result<R, ContractViolation>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<ContractViolation>() {
            Ok(violation) => Err(*violation),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Classify a panic payload from `catch_unwind` or `JoinHandle::join`.
///
/// Returns `None` for ordinary panics (`String`/`&str` payloads and anything
/// else that is not a violation).
pub fn violation_from_payload(payload: &(dyn Any + Send)) -> Option<&ContractViolation> {
    payload.downcast_ref::<ContractViolation>()
}

static HOOK: Once = Once::new();

/// Print violations readably when they go uncaught.
///
/// The default panic hook only knows how to print string payloads and shows
/// `Box<dyn Any>` for anything else. This installs a hook that prints
///
/// ```text
/// contract violation at src/account.rs:42:9: Pre-condition violated. ...
/// ```
///
/// for violations and hands every other panic to whatever hook was installed
/// before. Calling it more than once has no further effect.
pub fn install_panic_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            match violation_from_payload(info.payload()) {
                Some(violation) => eprintln!("{}", report(violation, info.location())),
                None => previous(info),
            }
        }));
    });
}

/// The line the panic hook prints for an uncaught violation.
fn report(violation: &ContractViolation, location: Option<&Location<'_>>) -> String {
    match location {
        Some(location) => format!("contract violation at {}: {}", location, violation),
        None => format!("contract violation: {}", violation),
    }
}
