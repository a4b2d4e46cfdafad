//! Assertion entry points.
//!
//! Every entry point shares one skeleton: evaluate the boolean test exactly
//! once; on success return `Ok(())` with no other observable effect; on
//! failure assemble a message and return an [`AssertionFailure`] carrying it.
//!
//! The entry points are distinguished by the capability of the predicate
//! argument, richest last:
//! - [`assert_true`] — a pre-computed boolean and a verbatim message
//! - [`assert_in_context`] — a plain predicate and a context line
//! - [`assert_reported`] — a plain predicate and a reporter that owns the
//!   whole message
//! - [`assert_described`] — a self-describing predicate and a reporter fed
//!   the description plus the subject
//! - [`assert_matches`] — a self-describing predicate; message built from
//!   its description and the subject's `Display` form
//! - [`assert_diagnosed`] — a diagnosing predicate; message built from its
//!   description and its diagnosis of the failing subject
//!
//! Diagnosis is opt-in by entry point: handing a [`Diagnosing`] predicate to
//! [`assert_matches`] produces the description-plus-subject message and never
//! touches the diagnoser. Reporters and diagnosers run only on failure, at
//! most once; a panic inside one propagates unmodified.

use std::fmt::Display;

use crate::failure::AssertionFailure;
use crate::message;
use crate::predicate::{Diagnosing, SelfDescribing};

/// Assert that a pre-computed boolean is true.
///
/// On failure the message is used verbatim.
///
/// # Example
///
/// ```rust
/// use attest::assert_true;
///
/// assert!(assert_true("ctx", true).is_ok());
/// let failure = assert_true("ctx", false).unwrap_err();
/// assert_eq!(failure.message(), "ctx");
/// ```
pub fn assert_true(message: impl Into<String>, value: bool) -> Result<(), AssertionFailure> {
    if value {
        return Ok(());
    }
    Err(AssertionFailure::new(message))
}

/// Assert that the subject matches the predicate, reporting a context line
/// and the subject's rendered form on failure.
///
/// # Example
///
/// ```rust
/// use attest::assert_in_context;
///
/// let failure = assert_in_context("checking sign", &-1, |n: &i32| *n > 0).unwrap_err();
/// assert_eq!(failure.message(), "checking sign\n     Was: -1");
/// ```
pub fn assert_in_context<T, F>(
    context: &str,
    subject: &T,
    predicate: F,
) -> Result<(), AssertionFailure>
where
    T: Display + ?Sized,
    F: Fn(&T) -> bool,
{
    if predicate(subject) {
        return Ok(());
    }
    Err(AssertionFailure::new(message::context_was(context, subject)))
}

/// Assert that the subject matches the predicate, applying the reporter to
/// the subject to produce the entire failure message.
///
/// The reporter is invoked only on failure, and its return is used verbatim.
///
/// # Example
///
/// ```rust
/// use attest::assert_reported;
///
/// let failure = assert_reported(&-1, |n: &i32| *n > 0, |n| format!("bad:{n}")).unwrap_err();
/// assert_eq!(failure.message(), "bad:-1");
/// ```
pub fn assert_reported<T, F, R>(
    subject: &T,
    predicate: F,
    reporter: R,
) -> Result<(), AssertionFailure>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
    R: FnOnce(&T) -> String,
{
    if predicate(subject) {
        return Ok(());
    }
    Err(AssertionFailure::new(reporter(subject)))
}

/// Assert that the subject matches a self-describing predicate, applying the
/// reporter to the predicate's description and the subject to produce the
/// entire failure message.
///
/// This is the shape for reporters that want the expectation text without
/// the fixed `Expected:`/`But was:` framing of [`assert_matches`].
///
/// # Example
///
/// ```rust
/// use attest::{assert_described, self_describing};
///
/// let empty = self_describing(|s: &str| s.is_empty(), "an empty string");
/// let failure = assert_described("hi", &empty, |expected, actual| {
///     format!("wanted {expected}, got {actual:?}")
/// })
/// .unwrap_err();
/// assert_eq!(failure.message(), "wanted an empty string, got \"hi\"");
/// ```
pub fn assert_described<T, P, R>(
    subject: &T,
    predicate: &P,
    reporter: R,
) -> Result<(), AssertionFailure>
where
    T: ?Sized,
    P: SelfDescribing<T> + ?Sized,
    R: FnOnce(&str, &T) -> String,
{
    if predicate.test(subject) {
        return Ok(());
    }
    Err(AssertionFailure::new(reporter(
        predicate.description(),
        subject,
    )))
}

/// Assert that the subject matches a self-describing predicate, reporting
/// the predicate's description and the subject's rendered form on failure.
///
/// A [`Diagnosing`] predicate passed here gets this same message shape; its
/// diagnoser is never consulted. Use [`assert_diagnosed`] to opt in.
///
/// # Example
///
/// ```rust
/// use attest::{assert_matches, self_describing};
///
/// let empty = self_describing(|s: &str| s.is_empty(), "an empty string");
/// let failure = assert_matches("hi", &empty).unwrap_err();
/// assert_eq!(failure.message(), "Expected: an empty string\n But was: hi");
/// ```
pub fn assert_matches<T, P>(subject: &T, predicate: &P) -> Result<(), AssertionFailure>
where
    T: Display + ?Sized,
    P: SelfDescribing<T> + ?Sized,
{
    if predicate.test(subject) {
        return Ok(());
    }
    Err(AssertionFailure::new(message::expected_but_was(
        predicate.description(),
        subject,
    )))
}

/// Assert that the subject matches a diagnosing predicate, reporting the
/// predicate's description and its diagnosis of the failing subject.
///
/// The diagnoser is invoked exactly once, only after the test has failed,
/// and only with the same subject that failed.
///
/// # Example
///
/// ```rust
/// use attest::{assert_diagnosed, diagnosing};
///
/// let zero = diagnosing(|n: &i32| *n == 0, "zero", |n: &i32| format!("was {n}"));
/// let failure = assert_diagnosed(&1, &zero).unwrap_err();
/// assert_eq!(failure.message(), "Expected: zero\n     But: was 1");
/// ```
pub fn assert_diagnosed<T, P>(subject: &T, predicate: &P) -> Result<(), AssertionFailure>
where
    T: ?Sized,
    P: Diagnosing<T> + ?Sized,
{
    if predicate.test(subject) {
        return Ok(());
    }
    Err(AssertionFailure::new(message::expected_but(
        predicate.description(),
        &predicate.diagnosis_of(subject),
    )))
}
