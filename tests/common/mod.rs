//! Shared test utilities and fixtures.

#![allow(dead_code)]

use contract::{catch, invariant, preserving, ContractViolation, Invariant};
use std::panic::{AssertUnwindSafe, UnwindSafe};

// ============================================================================
// MESSAGE FIXTURES
// ============================================================================

/// Descriptions used across the check tests (from the original scenarios).
pub const PROVIDED: &str = "object must be provided";
pub const CREATED: &str = "object must have been created";
pub const SET: &str = "object must have been set";
pub const UNREACHABLE: &str = "path must not have been executed";

pub const REQUIRES_PROVIDED: &str = "Pre-condition violated. Invalid implementation of calling code given method pre-condition [object must be provided].";
pub const ENSURES_CREATED: &str = "Post-condition violated. Invalid implementation of method given post-condition [object must have been created].";
pub const ASSERT_SET: &str = "Assertion violated. Invalid assumption about state of computation given assert condition [object must have been set].";
pub const FAIL_UNREACHABLE: &str = "Fail condition triggered. Invalid program path executed with failed condition [path must not have been executed]. ";

// ============================================================================
// RECOVERY HELPERS
// ============================================================================

/// Run `f` and return the violation it raised. Panics if it returned normally.
#[track_caller]
pub fn expect_violation<R>(f: impl FnOnce() -> R + UnwindSafe) -> ContractViolation {
    match catch(f) {
        Ok(_) => panic!("expected a contract violation, but the call returned normally"),
        Err(violation) => violation,
    }
}

/// Run `f` and panic if it raised a violation.
#[track_caller]
pub fn expect_no_violation<R>(f: impl FnOnce() -> R + UnwindSafe) -> R {
    match catch(f) {
        Ok(value) => value,
        Err(violation) => panic!("expected no violation but got [{}]", violation),
    }
}

/// The five predicates in category declaration order.
pub fn predicates(violation: &ContractViolation) -> [bool; 5] {
    [
        violation.is_requires(),
        violation.is_ensures(),
        violation.is_assert(),
        violation.is_fail(),
        violation.is_invariant(),
    ]
}

// ============================================================================
// ENTITY FIXTURE
// ============================================================================

/// A stateful entity with three invariant constraints.
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub value: i64,
    pub obj: Option<Box<u32>>,
}

impl Record {
    pub fn valid() -> Self {
        Record {
            name: "ledger".to_string(),
            value: 0,
            obj: Some(Box::new(1)),
        }
    }

    /// Adds `delta` to `value`, checking the invariant on entry and exit.
    pub fn adjust(&mut self, delta: i64) -> i64 {
        preserving(self, |r| {
            r.value += delta;
            r.value
        })
    }

    /// Replaces the name without checking anything (to corrupt state on purpose).
    pub fn rename_unchecked(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl Invariant for Record {
    fn invariant(&self) {
        invariant(!self.name.trim().is_empty(), "name must not be blank");
        invariant(self.value >= 0, "value must be positive");
        invariant(self.obj.is_some(), "obj must be present");
    }
}

/// Check the record's invariant, returning the violation if any.
pub fn record_violation(record: &Record) -> Option<ContractViolation> {
    catch(AssertUnwindSafe(|| record.invariant())).err()
}
