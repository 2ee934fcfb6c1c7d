//! Error kinds reported by the rule predicates
//!
//! Every rule fails with exactly one [`ValidationError`] variant, so callers
//! can match on the kind of failure instead of comparing message text.

use thiserror::Error;

/// The outcome of a rule predicate: `Ok(())` when the input is valid.
pub type Outcome = Result<(), ValidationError>;

/// A failed validation, one variant per rule.
///
/// Each variant carries a fixed, human-readable message available through
/// `Display` or [`ValidationError::message`].
///
/// # Example
///
/// ```rust
/// use formguard::{email, ValidationError};
///
/// let err = email("not an address").unwrap_err();
/// assert_eq!(err, ValidationError::NotEmail);
/// assert_eq!(err.to_string(), "Expecting an e-mail.");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// Input was expected to be empty.
    #[error("Expecting an empty value.")]
    Empty,
    /// Input was expected to be non-empty.
    #[error("Expecting a non empty value.")]
    IsEmpty,
    /// Input is not shaped like an e-mail address.
    #[error("Expecting an e-mail.")]
    NotEmail,
    /// Input is not shaped like a URL.
    #[error("Expecting an URL.")]
    NotUrl,
    /// Input contains characters other than digits and points.
    #[error("Expecting a floating point number (0-9 and point).")]
    NotFloat,
    /// Input contains characters other than digits.
    #[error("Expecting an integer number.")]
    NotInteger,
    /// Input contains characters other than ASCII letters and digits.
    #[error("Expecting alphanumeric.")]
    NotAlphanumeric,
    /// Input contains characters other than ASCII letters.
    #[error("Expecting an alphabetic string.")]
    NotAlphabetic,
}

impl ValidationError {
    /// Every error kind, in declaration order.
    pub const ALL: [ValidationError; 8] = [
        ValidationError::Empty,
        ValidationError::IsEmpty,
        ValidationError::NotEmail,
        ValidationError::NotUrl,
        ValidationError::NotFloat,
        ValidationError::NotInteger,
        ValidationError::NotAlphanumeric,
        ValidationError::NotAlphabetic,
    ];

    /// The fixed message for this error kind.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Empty => "Expecting an empty value.",
            ValidationError::IsEmpty => "Expecting a non empty value.",
            ValidationError::NotEmail => "Expecting an e-mail.",
            ValidationError::NotUrl => "Expecting an URL.",
            ValidationError::NotFloat => "Expecting a floating point number (0-9 and point).",
            ValidationError::NotInteger => "Expecting an integer number.",
            ValidationError::NotAlphanumeric => "Expecting alphanumeric.",
            ValidationError::NotAlphabetic => "Expecting an alphabetic string.",
        }
    }
}
