// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The five kinds of contract violation and their message templates.
//!
//! Each category points at a different culprit when it fires:
//!
//! | Category    | Raised by     | Who got it wrong                              |
//! |-------------|---------------|-----------------------------------------------|
//! | `Requires`  | `requires`    | The caller (pre-condition not established)    |
//! | `Ensures`   | `ensures`     | The callee (post-condition not delivered)     |
//! | `Assert`    | `assert`      | Reasoning about intermediate state            |
//! | `Fail`      | `fail`        | Understanding of control flow                 |
//! | `Invariant` | `invariant`   | The entity whose state went inconsistent      |
//!
//! The templates are fixed text with one slot for the caller's description.
//! `cargo xtask verify` compares them against the copy in `kani-proofs/`.

use std::fmt;

/// Kind of contract that was violated.
///
/// Closed set. There is no way to add a category at runtime and no payload
/// beyond the tag itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// Pre-condition the caller had to satisfy.
    Requires,
    /// Post-condition the implementation promised.
    Ensures,
    /// Belief about state at a specific program point.
    Assert,
    /// A path believed unreachable was executed.
    Fail,
    /// Consistency condition of a stateful entity.
    Invariant,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Requires,
        Category::Ensures,
        Category::Assert,
        Category::Fail,
        Category::Invariant,
    ];

    /// Lowercase name, matching the check function that raises it.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Requires => "requires",
            Category::Ensures => "ensures",
            Category::Assert => "assert",
            Category::Fail => "fail",
            Category::Invariant => "invariant",
        }
    }

    /// Interpolate `description` into this category's template.
    ///
    /// The description lands between the square brackets exactly once and is
    /// not escaped or trimmed.
    pub fn render(self, description: &str) -> String {
        // INVARIANT: template text is frozen; messages are compared verbatim by callers.
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
            // Trailing space is part of the template.
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

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
