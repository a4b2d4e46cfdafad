//! The failure signal raised by assertion entry points.
//!
//! Every failing assertion produces exactly one [`AssertionFailure`] carrying
//! the fully assembled message. Test runners catch this type specifically to
//! distinguish assertion failures from defects in the code under test.

/// The error produced by a failed assertion.
///
/// Its sole payload is the assembled message string. `Display` renders the
/// message verbatim, so the error composes cleanly with `?` in tests that
/// return `Result` and with `Box<dyn Error>` reporting.
///
/// # Example
///
/// ```rust
/// use attest::assert_true;
///
/// let failure = assert_true("ctx", false).unwrap_err();
/// assert_eq!(failure.message(), "ctx");
/// assert_eq!(failure.to_string(), "ctx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The assembled failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure, yielding the message.
    pub fn into_message(self) -> String {
        self.message
    }
}
