//! Design-by-contract checks that halt at the point of a broken assumption.
//!
//! Five checks, one per kind of assumption:
//!
//! | Check       | States                                   | Violation means              |
//! |-------------|------------------------------------------|------------------------------|
//! | `requires`  | pre-condition the caller must establish  | bug in the caller            |
//! | `ensures`   | post-condition the callee guarantees     | bug in the implementation    |
//! | `assert`    | belief about intermediate state          | bug in reasoning             |
//! | `fail`      | this path is unreachable                 | bug in control-flow model    |
//! | `invariant` | consistency of a stateful entity         | entity state corrupted       |
//!
//! A passing check does nothing. A failing one builds a [`ContractViolation`]
//! (category plus formatted message) and unwinds with it as the panic payload.
//! The checks never recover; stopping the unwind is the caller's business
//! (see [`catch`]).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────────┐     ┌──────────────┐
//! │ category.rs  │────▶│   violation.rs     │────▶│  checked.rs  │
//! │ (Category,   │     │ (ContractViolation)│     │ (Result API) │
//! │  templates)  │     └────────────────────┘     └──────┬───────┘
//! └──────────────┘                                       │
//!                                                        ▼
//! ┌──────────────┐     ┌────────────────────┐     ┌──────────────┐
//! │  entity.rs   │────▶│   contracts.rs     │◀────│  macros.rs   │
//! │ (Invariant,  │     │ (panicking checks, │     │ (requires!,  │
//! │  preserving) │     │  raise)            │     │  fail!, ...) │
//! └──────────────┘     └─────────┬──────────┘     └──────────────┘
//!                                │ unwind
//!                                ▼
//!                      ┌────────────────────┐
//!                      │    recover.rs      │
//!                      │ (catch, panic hook)│
//!                      └────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use contract::{catch, ensures, requires};
//!
//! fn divide(a: i32, b: i32) -> i32 {
//!     requires(b != 0, "divisor must be non-zero");
//!     let q = a / b;
//!     ensures(q * b + a % b == a, "quotient and remainder must recompose");
//!     q
//! }
//!
//! assert_eq!(divide(7, 2), 3);
//!
//! let violation = catch(|| divide(1, 0)).unwrap_err();
//! assert!(violation.is_requires());
//! assert_eq!(
//!     violation.message(),
//!     "Pre-condition violated. Invalid implementation of calling code given method pre-condition [divisor must be non-zero]."
//! );
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize` for [`Category`] and [`ContractViolation`].
//! - `tracing`: emit an `error` event for every violation before unwinding.

// Module declarations
mod category;
pub mod checked;
pub mod contracts;
mod entity;
mod macros;
mod recover;
mod violation;

// Re-exports for public API
pub use category::Category;
pub use contracts::{assert, ensures, fail, invariant, raise, requires};
pub use entity::{preserving, Invariant};
pub use recover::{catch, install_panic_hook, violation_from_payload};
pub use violation::ContractViolation;
