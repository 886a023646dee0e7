// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-entity invariant convention.
//!
//! A stateful type describes its consistent states in one method that calls
//! [`invariant`](crate::invariant()) once per field or relationship. Public
//! mutating operations check it on entry and on exit. Nothing forces a type to
//! follow this; [`preserving`] just makes the entry/exit pair hard to forget.
//!
//! ```
//! use contract::{invariant, preserving, requires, Invariant};
//!
//! struct Stack {
//!     items: Vec<i32>,
//!     capacity: usize,
//! }
//!
//! impl Invariant for Stack {
//!     fn invariant(&self) {
//!         invariant(self.items.len() <= self.capacity, "len must not exceed capacity");
//!     }
//! }
//!
//! impl Stack {
//!     fn push(&mut self, item: i32) {
//!         preserving(self, |s| {
//!             requires(s.items.len() < s.capacity, "stack must not be full");
//!             s.items.push(item);
//!         })
//!     }
//! }
//!
//! let mut stack = Stack { items: vec![], capacity: 1 };
//! stack.push(1);
//! assert_eq!(stack.items, [1]);
//! ```

/// A type with a checkable consistency condition.
pub trait Invariant {
    /// Check every constraint of a consistent state.
    ///
    /// Implementations call [`invariant`](crate::invariant()) (or
    /// [`invariant!`](crate::invariant!)) once per constraint and otherwise
    /// have no effect.
    fn invariant(&self);
}

/// Run `op` on `entity`, checking its invariant before and after.
///
/// If the entry check fails, `op` never runs. If `op` itself unwinds the exit
/// check is skipped; the original violation is the one that propagates.
///
/// A violation reports the location of the failing constraint inside
/// `T::invariant`, not the call to `preserving`.
pub fn preserving<T, R, F>(entity: &mut T, op: F) -> R
where
    T: Invariant + ?Sized,
    F: FnOnce(&mut T) -> R,
{
    entity.invariant();
    let result = op(entity);
    entity.invariant();
    result
}
