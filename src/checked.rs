// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The same five checks, returning `Result` instead of unwinding.
//!
//! Use these where a violation should travel through `?` rather than unwind:
//! FFI boundaries, `panic = "abort"` builds, or code that reports violations
//! as ordinary errors.
//!
//! The tradeoff: the panicking checks cannot be ignored, these can. `Result` is
//! `#[must_use]`, so dropping one is a warning, but `let _ = ...` silently
//! continues past a broken contract. Prefer the crate-root checks unless you
//! have a reason not to unwind.
//!
//! ```
//! use contract::checked;
//!
//! fn withdraw(balance: u64, amount: u64) -> Result<u64, contract::ContractViolation> {
//!     checked::requires(amount <= balance, "amount must not exceed balance")?;
//!     Ok(balance - amount)
//! }
//!
//! assert!(withdraw(5, 10).unwrap_err().is_requires());
//! ```

use crate::category::Category;
use crate::violation::ContractViolation;

#[inline]
fn check(condition: bool, category: Category, description: &str) -> Result<(), ContractViolation> {
    if condition {
        Ok(())
    } else {
        Err(ContractViolation::new(category, description))
    }
}

/// Pre-condition. `Err` means the caller is at fault.
#[inline]
pub fn requires(condition: bool, description: &str) -> Result<(), ContractViolation> {
    check(condition, Category::Requires, description)
}

/// Post-condition. `Err` means the implementation is at fault.
#[inline]
pub fn ensures(condition: bool, description: &str) -> Result<(), ContractViolation> {
    check(condition, Category::Ensures, description)
}

/// Belief about intermediate state.
#[inline]
pub fn assert(condition: bool, description: &str) -> Result<(), ContractViolation> {
    check(condition, Category::Assert, description)
}

/// Unreachable path. Always `Err`, so it can stand in for any result type.
#[inline]
pub fn fail<T>(description: &str) -> Result<T, ContractViolation> {
    Err(ContractViolation::new(Category::Fail, description))
}

/// Entity invariant.
#[inline]
pub fn invariant(condition: bool, description: &str) -> Result<(), ContractViolation> {
    check(condition, Category::Invariant, description)
}
