// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value carried by a failed check.

use crate::category::Category;
use std::fmt;

/// A violated contract: which kind, and the fully formatted message.
///
/// Built once, when a check fails, and never modified afterwards. The message
/// is rendered at construction, so inspecting a violation is free of
/// formatting and always returns the same text.
///
/// The `is_*` predicates are mutually exclusive: exactly one of them is true
/// for any violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContractViolation {
    category: Category,
    message: String,
}

impl ContractViolation {
    /// Create a violation, rendering `description` into the category template.
    pub fn new(category: Category, description: &str) -> Self {
        Self {
            category,
            message: category.render(description),
        }
    }

    /// The kind of contract that failed.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Formatted message (template plus description).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the violation, keeping only its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Raised by a failed pre-condition: the caller is at fault.
    pub fn is_requires(&self) -> bool {
        self.category == Category::Requires
    }

    /// Raised by a failed post-condition: the implementation is at fault.
    pub fn is_ensures(&self) -> bool {
        self.category == Category::Ensures
    }

    /// Raised by a failed assertion about intermediate state.
    pub fn is_assert(&self) -> bool {
        self.category == Category::Assert
    }

    /// Raised by reaching a path marked unreachable.
    pub fn is_fail(&self) -> bool {
        self.category == Category::Fail
    }

    /// Raised by a failed entity invariant.
    pub fn is_invariant(&self) -> bool {
        self.category == Category::Invariant
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ContractViolation {}
