//! # attest
//!
//! Predicate assertions with self-describing, diagnosing failure messages.
//!
//! This library lets test code assert conditions and get precise, composable
//! failure diagnostics. Each entry point accepts a subject value and a way of
//! testing it; on mismatch it returns an [`AssertionFailure`] carrying a
//! deterministic, structured message. Entry points never panic themselves, so
//! they compose with `?` in tests that return `Result`.
//!
//! Predicates escalate through three capability levels:
//!
//! 1. a plain closure `Fn(&T) -> bool`,
//! 2. [`SelfDescribing`]: the closure plus a fixed description of what it
//!    expects,
//! 3. [`Diagnosing`]: a self-describing predicate that can also explain why
//!    a specific subject failed.
//!
//! Richer predicates produce richer messages, but only through the entry
//! point that asks for them: passing a diagnosing predicate to
//! [`assert_matches`] yields the plain description-plus-subject message.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{assert_matches, self_describing};
//!
//! let empty = self_describing(|s: &str| s.is_empty(), "an empty string");
//!
//! assert!(assert_matches("", &empty).is_ok());
//!
//! let failure = assert_matches("hi", &empty).unwrap_err();
//! assert_eq!(failure.message(), "Expected: an empty string\n But was: hi");
//! ```
//!
//! ## Diagnosing failures
//!
//! ```rust
//! use attest::{assert_diagnosed, diagnosing};
//!
//! let positive = diagnosing(
//!     |n: &i64| *n > 0,
//!     "a positive number",
//!     |n: &i64| format!("was {n}"),
//! );
//!
//! let failure = assert_diagnosed(&-3, &positive).unwrap_err();
//! assert_eq!(failure.message(), "Expected: a positive number\n     But: was -3");
//! ```
//!
//! ## In a test
//!
//! ```rust
//! use attest::{assert_in_context, AssertionFailure};
//!
//! fn check() -> Result<(), AssertionFailure> {
//!     assert_in_context("response code", &200u16, |code: &u16| *code < 400)?;
//!     Ok(())
//! }
//!
//! assert!(check().is_ok());
//! ```

mod assert;
mod failure;
mod message;
mod predicate;

// Assertion entry points
pub use assert::{
    assert_described, assert_diagnosed, assert_in_context, assert_matches, assert_reported,
    assert_true,
};

// Failure signal
pub use failure::AssertionFailure;

// Predicate capabilities and builders
pub use predicate::{
    diagnosing, self_describing, with_diagnosis, Described, Diagnosed, Diagnosing, SelfDescribing,
};
