// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the contract category model.
//!
//! This standalone crate copies the category enum, its templates and the
//! check decision, and proves them without pulling in the main crate.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Exclusive predicates**: exactly one `is_*` answer per category
//! 2. **Exhaustive predicates**: every category answers one predicate
//! 3. **Pass-through**: a true condition never produces a violation
//! 4. **Fail is unconditional**: `fail` produces a violation for every input
//!
//! `cargo xtask verify` checks that the templates below match `src/category.rs`.

// ============================================================================
// CATEGORY MODEL (copied from src/category.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Requires,
    Ensures,
    Assert,
    Fail,
    Invariant,
}

pub const ALL: [Category; 5] = [
    Category::Requires,
    Category::Ensures,
    Category::Assert,
    Category::Fail,
    Category::Invariant,
];

impl Category {
    pub fn render(self, description: &str) -> String {
        match self {
            Category::Requires => format!(
                "Pre-condition violated. Invalid implementation of calling code given method pre-condition [{}].",
                description
            ),
            Category::Ensures => format!(
                "Post-condition violated. Invalid implementation of method given post-condition [{}].",
                description
            ),
            Category::Assert => format!(
                "Assertion violated. Invalid assumption about state of computation given assert condition [{}].",
                description
            ),
            Category::Fail => format!(
                "Fail condition triggered. Invalid program path executed with failed condition [{}]. ",
                description
            ),
            Category::Invariant => format!(
                "Invariant violated. Invalid state given invariant [{}].",
                description
            ),
        }
    }
}

/// Predicate answers in declaration order: requires, ensures, assert, fail, invariant.
pub fn predicates(category: Category) -> [bool; 5] {
    [
        category == Category::Requires,
        category == Category::Ensures,
        category == Category::Assert,
        category == Category::Fail,
        category == Category::Invariant,
    ]
}

/// The check decision: `Some(category)` means "raise", `None` means "continue".
pub fn decide(category: Category, condition: bool) -> Option<Category> {
    if category == Category::Fail || !condition {
        Some(category)
    } else {
        None
    }
}

/// Map a symbolic index onto a category.
pub fn category_at(index: u8) -> Category {
    ALL[(index % 5) as usize]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Exactly one predicate holds for any category.
    #[kani::proof]
    #[kani::unwind(6)] // 5 predicates + 1
    fn verify_predicates_exclusive() {
        let category = category_at(kani::any());
        let flags = predicates(category);

        let mut count = 0;
        for flag in flags {
            if flag {
                count += 1;
            }
        }
        kani::assert(count == 1, "exactly one predicate must hold");
    }

    /// The predicate that holds is the category's own position in ALL.
    #[kani::proof]
    fn verify_predicates_exhaustive() {
        let index: u8 = kani::any_where(|&i| i < 5);
        let flags = predicates(category_at(index));
        kani::assert(flags[index as usize], "category must answer its own predicate");
    }

    /// True conditions never raise for the four conditional checks.
    #[kani::proof]
    fn verify_true_condition_passes() {
        let category = category_at(kani::any());
        kani::assume(category != Category::Fail);
        kani::assert(decide(category, true).is_none(), "true condition must not raise");
    }

    /// False conditions raise the check's own category.
    #[kani::proof]
    fn verify_false_condition_raises_own_category() {
        let category = category_at(kani::any());
        kani::assert(
            decide(category, false) == Some(category),
            "false condition must raise the same category",
        );
    }

    /// Fail raises whatever the condition.
    #[kani::proof]
    fn verify_fail_unconditional() {
        let condition: bool = kani::any();
        kani::assert(
            decide(Category::Fail, condition) == Some(Category::Fail),
            "fail must always raise",
        );
    }
}
