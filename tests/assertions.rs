//! Integration tests for the assertion entry points.
//!
//! The first half pins down concrete message scenarios; the second half
//! checks the universally-quantified laws with proptest.

use attest::{
    assert_described, assert_diagnosed, assert_in_context, assert_matches, assert_reported,
    assert_true, diagnosing, self_describing, with_diagnosis, SelfDescribing,
};

// =========================================================================
// Concrete scenarios
// =========================================================================

#[test]
fn test_true_boolean_returns_normally() {
    assert!(assert_true("ctx", true).is_ok());
}

#[test]
fn test_false_boolean_raises_with_exact_message() {
    let failure = assert_true("ctx", false).unwrap_err();
    assert_eq!(failure.message(), "ctx");
}

#[test]
fn test_matching_predicate_with_reporter_returns_normally() {
    assert!(assert_reported(&5, |n: &i32| *n > 0, |n| format!("bad:{n}")).is_ok());
}

#[test]
fn test_mismatching_predicate_with_reporter_raises_reporter_message() {
    let failure = assert_reported(&-1, |n: &i32| *n > 0, |n| format!("bad:{n}")).unwrap_err();
    assert_eq!(failure.message(), "bad:-1");
}

#[test]
fn test_self_describing_failure_names_expectation_then_subject() {
    let empty = self_describing(|s: &str| s.is_empty(), "an empty string");
    let failure = assert_matches("hi", &empty).unwrap_err();
    assert!(failure.message().contains("Expected: an empty string"));
    assert!(failure.message().ends_with("But was: hi"));
}

#[test]
fn test_diagnosing_failure_names_expectation_then_diagnosis() {
    let p = diagnosing(|_: &i32| false, "mismatches", |n: &i32| format!("was {n}"));
    let failure = assert_diagnosed(&1, &p).unwrap_err();
    assert!(failure.message().contains("Expected: mismatches"));
    assert!(failure.message().contains("But: was 1"));
}

#[test]
fn test_context_failure_carries_was_fragment() {
    let failure = assert_in_context("checking sign", &-1, |n: &i32| *n > 0).unwrap_err();
    assert_eq!(failure.message(), "checking sign\n     Was: -1");
}

#[test]
fn test_described_reporter_owns_the_message() {
    let empty = self_describing(|s: &str| s.is_empty(), "an empty string");
    let failure = assert_described("non-empty", &empty, |expected, actual| {
        format!("Expected <{expected}>, Actual <{actual}>")
    })
    .unwrap_err();
    assert_eq!(
        failure.message(),
        "Expected <an empty string>, Actual <non-empty>"
    );
}

#[test]
fn test_failure_propagates_through_question_mark() {
    fn check() -> Result<(), attest::AssertionFailure> {
        assert_true("first passes", true)?;
        assert_true("second fails", false)?;
        Ok(())
    }
    assert_eq!(check().unwrap_err().message(), "second fails");
}

#[test]
fn test_diagnoser_never_runs_for_matching_subject() {
    let p = diagnosing(|_: &i32| true, "anything", |_: &i32| {
        panic!("diagnoser must not run on success")
    });
    assert!(assert_diagnosed(&1, &p).is_ok());
}

#[test]
fn test_diagnosis_is_opt_in_by_entry_point() {
    let inner = self_describing(|_: &i32| false, "mismatches");
    let p = with_diagnosis(inner, |_: &i32| {
        panic!("diagnoser must not run under assert_matches")
    });
    let failure = assert_matches(&1, &p).unwrap_err();
    assert_eq!(failure.message(), "Expected: mismatches\n But was: 1");
}

#[test]
#[should_panic(expected = "diagnoser gave up")]
fn test_panicking_diagnoser_propagates_unmodified() {
    let p = diagnosing(|_: &i32| false, "mismatches", |_: &i32| {
        panic!("diagnoser gave up")
    });
    let _ = assert_diagnosed(&1, &p);
}

#[test]
#[should_panic(expected = "reporter gave up")]
fn test_panicking_reporter_propagates_unmodified() {
    let _ = assert_reported(&-1, |n: &i32| *n > 0, |_| panic!("reporter gave up"));
}

// =========================================================================
// Properties
// =========================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Shape (a): a true value never fails, whatever the message says.
        #[test]
        fn true_value_never_fails(message in ".*") {
            prop_assert!(assert_true(message, true).is_ok());
        }

        /// Shape (a): a false value fails with the message verbatim.
        #[test]
        fn false_value_fails_with_message_verbatim(message in ".*") {
            let failure = assert_true(message.clone(), false).unwrap_err();
            prop_assert_eq!(failure.message(), message);
        }

        /// Every shape returns silently for a matching subject, and no
        /// reporter or diagnoser is ever consulted.
        #[test]
        fn matching_subject_is_silent_everywhere(n in 0i64..1_000_000) {
            let always = |_: &i64| true;
            prop_assert!(assert_in_context("ctx", &n, always).is_ok());
            let reported = assert_reported(&n, always, |_| {
                panic!("reporter ran on success")
            });
            prop_assert!(reported.is_ok());

            let described = self_describing(always, "anything");
            prop_assert!(assert_matches(&n, &described).is_ok());
            let with_reporter = assert_described(&n, &described, |_, _| {
                panic!("reporter ran on success")
            });
            prop_assert!(with_reporter.is_ok());

            let diagnosed = with_diagnosis(described, |_: &i64| {
                panic!("diagnoser ran on success")
            });
            prop_assert!(assert_diagnosed(&n, &diagnosed).is_ok());
        }

        /// Shape (b): the failure message is the context, a newline, and the
        /// fixed `Was:` fragment with the subject's Display form.
        #[test]
        fn context_failure_is_context_plus_was(context in "[^\n]*", n in any::<i64>()) {
            let failure = assert_in_context(&context, &n, |_: &i64| false).unwrap_err();
            prop_assert_eq!(failure.message(), format!("{context}\n     Was: {n}"));
        }

        /// Shape (c): the reporter fully owns the message.
        #[test]
        fn reporter_output_is_used_verbatim(n in any::<i64>(), tag in "[a-z]{1,12}") {
            let failure =
                assert_reported(&n, |_: &i64| false, |n| format!("{tag}:{n}")).unwrap_err();
            prop_assert_eq!(failure.message(), format!("{tag}:{n}"));
        }

        /// Shape (d): description and subject text both appear, in that order.
        #[test]
        fn matches_failure_orders_description_before_subject(
            description in "[a-z ]{1,20}",
            n in any::<i64>(),
        ) {
            let p = self_describing(|_: &i64| false, description.clone());
            let failure = assert_matches(&n, &p).unwrap_err();
            let message = failure.message();
            let at_description = message.find(&description).expect("description missing");
            let at_subject = message.rfind(&n.to_string()).expect("subject missing");
            prop_assert!(at_description < at_subject);
        }

        /// Shape (e): description and diagnosis both appear in order, and the
        /// diagnoser runs exactly once.
        #[test]
        fn diagnosed_failure_orders_description_before_diagnosis(n in any::<i64>()) {
            let calls = Cell::new(0u32);
            let p = diagnosing(|_: &i64| false, "mismatches", |n: &i64| {
                calls.set(calls.get() + 1);
                format!("saw {n}")
            });
            let failure = assert_diagnosed(&n, &p).unwrap_err();
            let message = failure.message();
            let at_description = message.find("mismatches").expect("description missing");
            let at_diagnosis = message.find("saw ").expect("diagnosis missing");
            prop_assert!(at_description < at_diagnosis);
            prop_assert_eq!(calls.get(), 1);
        }

        /// Idempotence: repeating a successful assertion accumulates nothing
        /// and keeps succeeding.
        #[test]
        fn successful_assertions_are_idempotent(n in any::<i64>(), repeats in 1usize..8) {
            let p = self_describing(|_: &i64| true, "anything");
            for _ in 0..repeats {
                prop_assert!(assert_matches(&n, &p).is_ok());
            }
            prop_assert_eq!(p.description(), "anything");
        }
    }
}
