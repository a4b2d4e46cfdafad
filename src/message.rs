//! Message fragment labels and assembly.
//!
//! All label strings are padded to a common nine-column width so that the
//! colons align when fragments stack on consecutive lines:
//!
//! ```text
//! Expected: an empty string
//!  But was: hi
//! ```
//!
//! Assembly joins fragments with a single `\n` in a fixed order per entry
//! point. Nothing here re-runs a predicate or produces a diagnosis; callers
//! hand in already-computed pieces.

use std::fmt::Display;

pub(crate) const EXPECTED: &str = "Expected:";
pub(crate) const BUT_WAS: &str = " But was:";
pub(crate) const BUT: &str = "     But:";
pub(crate) const WAS: &str = "     Was:";

/// Context line followed by the subject's rendered form.
pub(crate) fn context_was<T: Display + ?Sized>(context: &str, subject: &T) -> String {
    format!("{context}\n{WAS} {subject}")
}

/// Expectation description followed by the subject's rendered form.
pub(crate) fn expected_but_was<T: Display + ?Sized>(description: &str, subject: &T) -> String {
    format!("{EXPECTED} {description}\n{BUT_WAS} {subject}")
}

/// Expectation description followed by a diagnosis of the mismatch.
pub(crate) fn expected_but(description: &str, diagnosis: &str) -> String {
    format!("{EXPECTED} {description}\n{BUT} {diagnosis}")
}
