// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Formatting front-ends for the checks.
//!
//! The functions take a ready-made `&str`. These macros take `format!`
//! arguments instead and only build the description when the condition is
//! false, so interpolating values into the description costs nothing on the
//! passing path. With no description the condition's source text is used.
//!
//! ```
//! use contract::{asserts, requires};
//!
//! fn nth(items: &[u32], i: usize) -> u32 {
//!     requires!(i < items.len(), "index {} out of bounds for length {}", i, items.len());
//!     let item = items[i];
//!     asserts!(item == items[i]);
//!     item
//! }
//!
//! assert_eq!(nth(&[1, 2, 3], 1), 2);
//! ```
//!
//! The `debug_` variants check only when `debug_assertions` is on, like
//! `debug_assert!`. Their conditions are still type-checked in release builds.

#[doc(hidden)]
#[macro_export]
macro_rules! __contract_check {
    ($category:ident, $cond:expr $(,)?) => {
        if !$cond {
            $crate::contracts::raise_with(
                $crate::Category::$category,
                ::core::stringify!($cond),
            );
        }
    };
    ($category:ident, $cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::contracts::raise_with(
                $crate::Category::$category,
                &::std::format!($($arg)+),
            );
        }
    };
}

/// Pre-condition with a formatted description. See [`requires`](crate::requires()).
#[macro_export]
macro_rules! requires {
    ($($t:tt)+) => { $crate::__contract_check!(Requires, $($t)+) };
}

/// Post-condition with a formatted description. See [`ensures`](crate::ensures()).
#[macro_export]
macro_rules! ensures {
    ($($t:tt)+) => { $crate::__contract_check!(Ensures, $($t)+) };
}

/// Assertion with a formatted description. See [`assert`](crate::assert()).
///
/// Named `asserts!` so it never shadows `std::assert!`.
#[macro_export]
macro_rules! asserts {
    ($($t:tt)+) => { $crate::__contract_check!(Assert, $($t)+) };
}

/// Invariant with a formatted description. See [`invariant`](crate::invariant()).
#[macro_export]
macro_rules! invariant {
    ($($t:tt)+) => { $crate::__contract_check!(Invariant, $($t)+) };
}

/// Unreachable path with a formatted description. See [`fail`](crate::fail()).
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        $crate::contracts::raise_with($crate::Category::Fail, &::std::format!($($arg)+))
    };
}

/// [`requires!`] in debug builds only.
#[macro_export]
macro_rules! debug_requires {
    ($($t:tt)+) => { if ::core::cfg!(debug_assertions) { $crate::requires!($($t)+); } };
}

/// [`ensures!`] in debug builds only.
#[macro_export]
macro_rules! debug_ensures {
    ($($t:tt)+) => { if ::core::cfg!(debug_assertions) { $crate::ensures!($($t)+); } };
}

/// [`asserts!`] in debug builds only.
#[macro_export]
macro_rules! debug_asserts {
    ($($t:tt)+) => { if ::core::cfg!(debug_assertions) { $crate::asserts!($($t)+); } };
}

/// [`invariant!`] in debug builds only.
#[macro_export]
macro_rules! debug_invariant {
    ($($t:tt)+) => { if ::core::cfg!(debug_assertions) { $crate::invariant!($($t)+); } };
}
