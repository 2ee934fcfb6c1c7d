//! Testing utilities for code that validates input
//!
//! Assertion macros give readable panics for validation outcomes. With the
//! `proptest` feature enabled, this module also provides strategies that
//! generate input accepted by each [`Rule`](crate::Rule), and an `Arbitrary`
//! impl for [`ValidationError`](crate::ValidationError).
//!
//! # Example
//!
//! ```rust
//! use formguard::{assert_invalid, assert_valid, email, ValidationError};
//!
//! assert_valid!(email("user@example.com"));
//! assert_invalid!(email("user"), ValidationError::NotEmail);
//! ```

/// Assert that a validation outcome is `Ok`.
///
/// Panics with the error when the input was rejected.
///
/// # Example
///
/// ```rust
/// use formguard::{assert_valid, integer};
///
/// assert_valid!(integer("43"));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match $outcome {
            ::core::result::Result::Ok(()) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected valid input, got error: {:?}", e);
            }
        }
    };
}

/// Assert that a validation outcome failed with a specific error.
///
/// # Example
///
/// ```rust
/// use formguard::{assert_invalid, float, ValidationError};
///
/// assert_invalid!(float("One"), ValidationError::NotFloat);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            ::core::result::Result::Err(e) => {
                assert_eq!(e, $expected);
            }
            ::core::result::Result::Ok(()) => {
                panic!("Expected error {:?}, got valid input", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Rule, ValidationError};

// Unanchored equivalents of the rule patterns; the generator rejects anchors.
#[cfg(feature = "proptest")]
fn generator_pattern(rule: Rule) -> &'static str {
    match rule {
        Rule::Email => "[a-zA-Z0-9+.-]{1,16}@[a-zA-Z0-9.-]{1,16}",
        Rule::Url => "[a-zA-Z0-9]{1,8}://[!-~]{1,24}",
        Rule::Float => "[0-9.]{1,12}",
        Rule::Integer => "[0-9]{1,12}",
        Rule::Alphanumeric => "[a-zA-Z0-9]{1,16}",
        Rule::Alphabetic => "[a-zA-Z]{1,16}",
    }
}

/// A strategy producing strings that `rule` accepts.
///
/// # Example
///
/// ```rust
/// use formguard::testing::valid_input;
/// use formguard::Rule;
/// use proptest::prelude::*;
///
/// proptest!(|(input in valid_input(Rule::Integer))| {
///     prop_assert!(Rule::Integer.is_match(&input));
/// });
/// ```
#[cfg(feature = "proptest")]
pub fn valid_input(rule: Rule) -> BoxedStrategy<String> {
    proptest::string::string_regex(generator_pattern(rule))
        .expect("generator patterns are plain character classes")
        .boxed()
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationError {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(ValidationError::ALL.to_vec()).boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Rule {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(Rule::ALL.to_vec()).boxed()
    }
}
