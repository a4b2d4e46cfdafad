//! Predicate capability traits and closure-capturing builders.
//!
//! Predicates come in three escalating capability levels:
//! - a plain closure `Fn(&T) -> bool` (level 0, nothing to implement here),
//! - [`SelfDescribing`]: a predicate plus a fixed description of what it
//!   expects (level 1),
//! - [`Diagnosing`]: a self-describing predicate that can also explain why a
//!   specific subject failed (level 2).
//!
//! The builders wrap closures into plain structs; no trait objects or
//! indirection beyond the captured closures themselves. Wrappers are
//! immutable value-like bindings: created once at the call site, discarded
//! after the assertion call.

/// A predicate that can describe itself.
///
/// `description()` is pure and stable: it returns the same string on every
/// call, regardless of any subject tested.
pub trait SelfDescribing<T: ?Sized> {
    /// Test the subject against the predicate.
    fn test(&self, subject: &T) -> bool;

    /// A description of what the predicate expects.
    fn description(&self) -> &str;
}

/// A self-describing predicate that can diagnose mismatching subjects.
pub trait Diagnosing<T: ?Sized>: SelfDescribing<T> {
    /// The predicate's justification for rejecting the subject.
    ///
    /// Only ever invoked after `test(subject)` returned `false` for this
    /// exact subject, so implementations may assume mismatch without
    /// re-checking.
    fn diagnosis_of(&self, subject: &T) -> String;
}

/// A predicate decorated with a fixed description. See [`self_describing`].
#[derive(Clone)]
pub struct Described<F> {
    test: F,
    description: String,
}

/// Decorate a predicate to make it self-describing.
///
/// Construction cannot fail. An empty description is not rejected; the
/// assertion engine's formatting is only as meaningful as the description
/// supplied.
///
/// # Example
///
/// ```rust
/// use attest::{self_describing, SelfDescribing};
///
/// let empty = self_describing(|s: &str| s.is_empty(), "an empty string");
/// assert!(empty.test(""));
/// assert!(!empty.test("hi"));
/// assert_eq!(empty.description(), "an empty string");
/// ```
pub fn self_describing<T, F>(test: F, description: impl Into<String>) -> Described<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Described {
        test,
        description: description.into(),
    }
}

impl<T, F> SelfDescribing<T> for Described<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn test(&self, subject: &T) -> bool {
        (self.test)(subject)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A self-describing predicate decorated with a diagnoser. See
/// [`diagnosing`] and [`with_diagnosis`].
#[derive(Clone)]
pub struct Diagnosed<P, D> {
    predicate: P,
    diagnoser: D,
}

/// Decorate a predicate with a description and the ability to diagnose
/// mismatching subjects.
///
/// # Example
///
/// ```rust
/// use attest::{diagnosing, Diagnosing, SelfDescribing};
///
/// let positive = diagnosing(
///     |n: &i64| *n > 0,
///     "a positive number",
///     |n: &i64| format!("was {n}"),
/// );
/// assert!(!positive.test(&-3));
/// assert_eq!(positive.diagnosis_of(&-3), "was -3");
/// ```
pub fn diagnosing<T, F, D>(
    test: F,
    description: impl Into<String>,
    diagnoser: D,
) -> Diagnosed<Described<F>, D>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
    D: Fn(&T) -> String,
{
    with_diagnosis(self_describing(test, description), diagnoser)
}

/// Decorate an existing self-describing predicate with the ability to
/// diagnose mismatching subjects.
///
/// `test` and `description` delegate to the wrapped predicate unchanged.
///
/// # Example
///
/// ```rust
/// use attest::{self_describing, with_diagnosis, Diagnosing};
///
/// let empty = self_describing(|s: &str| s.is_empty(), "an empty string");
/// let empty = with_diagnosis(empty, |s: &str| format!("had length {}", s.len()));
/// assert_eq!(empty.diagnosis_of("hi"), "had length 2");
/// ```
pub fn with_diagnosis<T, P, D>(predicate: P, diagnoser: D) -> Diagnosed<P, D>
where
    T: ?Sized,
    P: SelfDescribing<T>,
    D: Fn(&T) -> String,
{
    Diagnosed {
        predicate,
        diagnoser,
    }
}

impl<T, P, D> SelfDescribing<T> for Diagnosed<P, D>
where
    T: ?Sized,
    P: SelfDescribing<T>,
    D: Fn(&T) -> String,
{
    fn test(&self, subject: &T) -> bool {
        self.predicate.test(subject)
    }

    fn description(&self) -> &str {
        self.predicate.description()
    }
}

impl<T, P, D> Diagnosing<T> for Diagnosed<P, D>
where
    T: ?Sized,
    P: SelfDescribing<T>,
    D: Fn(&T) -> String,
{
    fn diagnosis_of(&self, subject: &T) -> String {
        (self.diagnoser)(subject)
    }
}
