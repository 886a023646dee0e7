// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the check decision.
//!
//! Uses the Result API because libFuzzer aborts on panic, so the unwinding
//! checks cannot be exercised here. Both share the same decision path.

#![no_main]

use arbitrary::Arbitrary;
use contract::{checked, Category, ContractViolation};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    check: u8,
    condition: bool,
    description: String,
}

fuzz_target!(|input: Input| {
    let category = Category::ALL[(input.check % 5) as usize];
    let d = input.description.as_str();

    let outcome: Result<(), ContractViolation> = match category {
        Category::Requires => checked::requires(input.condition, d),
        Category::Ensures => checked::ensures(input.condition, d),
        Category::Assert => checked::assert(input.condition, d),
        Category::Fail => checked::fail(d),
        Category::Invariant => checked::invariant(input.condition, d),
    };

    // Property 1: only a false condition (or fail) produces a violation
    let should_raise = category == Category::Fail || !input.condition;
    assert_eq!(outcome.is_err(), should_raise);

    if let Err(violation) = outcome {
        // Property 2: the violation carries the check's category
        assert_eq!(violation.category(), category);

        // Property 3: exactly one predicate answers
        let flags = [
            violation.is_requires(),
            violation.is_ensures(),
            violation.is_assert(),
            violation.is_fail(),
            violation.is_invariant(),
        ];
        assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
    }
});
