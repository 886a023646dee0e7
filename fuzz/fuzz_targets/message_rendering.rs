// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for template interpolation.
//!
//! Descriptions are arbitrary caller text: brackets, format specifiers,
//! multi-byte characters, control bytes. Rendering must place them verbatim
//! between the template's prefix and suffix, once, and never panic.

#![no_main]

use arbitrary::Arbitrary;
use contract::{Category, ContractViolation};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    category: u8,
    description: String,
}

fuzz_target!(|input: Input| {
    let category = Category::ALL[(input.category % 5) as usize];
    let violation = ContractViolation::new(category, &input.description);

    // Property 1: prefix and suffix come from the template, untouched
    let empty = category.render("");
    let open = empty.find("[]").expect("every template has one slot") + 1;
    let (prefix, suffix) = empty.split_at(open);

    let message = violation.message();
    assert!(message.starts_with(prefix), "prefix changed: {:?}", message);
    assert!(message.ends_with(suffix), "suffix changed: {:?}", message);

    // Property 2: the slot holds exactly the description
    assert_eq!(
        &message[prefix.len()..message.len() - suffix.len()],
        input.description,
        "description not interpolated verbatim"
    );

    // Property 3: Display agrees with message()
    assert_eq!(violation.to_string(), message);
});
