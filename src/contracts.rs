//! Panicking contract checks.
//!
//! A failed check builds a [`ContractViolation`] and unwinds with it as the
//! panic payload (`std::panic::panic_any`). Nothing in here recovers: the
//! violation travels up the stack until a recovery point stops it
//! ([`crate::catch`], `catch_unwind`, a thread join, or the test harness) or
//! it takes the thread down.
//!
//! # INVARIANTS (DO NOT WEAKEN THESE CHECKS)
//!
//! - A passing check has no observable effect: no allocation, no formatting.
//! - A failing check never returns. There is no code path that reports a
//!   violation and then continues.
//! - The payload is always a `ContractViolation`, never a `String`. Recovery
//!   points rely on downcasting to it.
//!
//! Under `panic = "abort"` the process dies at the failed check; use
//! [`crate::checked`] if you need the violation as a value there.
//!
//! # Usage
//!
//! ```
//! use contract::{ensures, requires};
//!
//! fn isqrt(n: u64) -> u64 {
//!     requires(n < 1 << 52, "n must be exactly representable as f64");
//!     let root = (n as f64).sqrt() as u64;
//!     ensures(root * root <= n, "root must not overshoot");
//!     root
//! }
//!
//! assert_eq!(isqrt(17), 4);
//! ```

use crate::category::Category;
use crate::checked;
use crate::violation::ContractViolation;

/// Unwind with `violation` as the payload.
///
/// Every failing check funnels through here, so this is the one place that
/// emits the `tracing` event when that feature is on. The event's message is
/// the violation text itself.
#[cold]
#[inline(never)]
#[track_caller]
pub fn raise(violation: ContractViolation) -> ! {
    #[cfg(feature = "tracing")]
    {
        let location = std::panic::Location::caller();
        tracing::error!(
            category = %violation.category(),
            location = %location,
            "{}",
            violation
        );
    }

    std::panic::panic_any(violation)
}

/// Unwind with a freshly built violation. Used by the formatting macros.
#[doc(hidden)]
#[cold]
#[inline(never)]
#[track_caller]
pub fn raise_with(category: Category, description: &str) -> ! {
    raise(ContractViolation::new(category, description))
}

#[inline]
#[track_caller]
fn enforce(result: Result<(), ContractViolation>) {
    if let Err(violation) = result {
        raise(violation);
    }
}

/// Pre-condition: something the caller must establish before calling.
///
/// A violation means the **caller** has a bug.
///
/// # Panics
/// With a [`Category::Requires`] violation when `condition` is false.
#[inline]
#[track_caller]
pub fn requires(condition: bool, description: &str) {
    enforce(checked::requires(condition, description));
}

/// Post-condition: something the function guarantees on normal return.
///
/// A violation means the **implementation** has a bug.
///
/// # Panics
/// With a [`Category::Ensures`] violation when `condition` is false.
#[inline]
#[track_caller]
pub fn ensures(condition: bool, description: &str) {
    enforce(checked::ensures(condition, description));
}

/// Assertion: a belief about the state of the computation at this point.
///
/// A violation means the reasoning about that state needs revisiting.
///
/// # Panics
/// With a [`Category::Assert`] violation when `condition` is false.
#[inline]
#[track_caller]
pub fn assert(condition: bool, description: &str) {
    enforce(checked::assert(condition, description));
}

/// Marks a path that should never execute. Always unwinds.
///
/// # Panics
/// Always, with a [`Category::Fail`] violation.
#[track_caller]
pub fn fail(description: &str) -> ! {
    raise_with(Category::Fail, description)
}

/// Invariant: holds before and after every public operation on an entity.
///
/// Call once per field or relationship from the entity's own invariant
/// method (see [`crate::Invariant`]).
///
/// # Panics
/// With a [`Category::Invariant`] violation when `condition` is false.
#[inline]
#[track_caller]
pub fn invariant(condition: bool, description: &str) {
    enforce(checked::invariant(condition, description));
}
