//! # Formguard
//!
//! Small, permissive string validators for form input, plus combinators that
//! turn them into pass/fail or error-collecting pipelines.
//!
//! ## Rules
//!
//! Each rule takes a `&str` and returns [`Outcome`], which is
//! `Result<(), ValidationError>`. Every rule fails with its own
//! [`ValidationError`] variant, so callers can branch on what went wrong.
//!
//! ## Combinators
//!
//! - [`chain`] runs predicates in order and stops at the first failure.
//! - [`each`] picks the first error from outcomes computed up front.
//! - [`all`] collects every error from outcomes computed up front.
//! - [`any`] accepts when at least one outcome passed.
//!
//! ## Quick Example
//!
//! ```rust
//! use formguard::{all, chain, email, empty, integer, not_empty, Outcome, ValidationError};
//!
//! struct Signup<'a> {
//!     email: &'a str,
//!     age: &'a str,
//! }
//!
//! fn validate(form: &Signup) -> Vec<ValidationError> {
//!     let required_email: [fn(&str) -> Outcome; 2] = [not_empty, email];
//!     all([
//!         chain(form.email, required_email),
//!         formguard::any([empty(form.age), integer(form.age)]),
//!     ])
//! }
//!
//! let ok = Signup { email: "user@example.com", age: "" };
//! assert!(validate(&ok).is_empty());
//!
//! let bad = Signup { email: "", age: "twelve" };
//! assert_eq!(
//!     validate(&bad),
//!     vec![ValidationError::IsEmpty, ValidationError::NotInteger]
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinators;
pub mod error;
pub mod predicate;
pub mod rule;
pub mod testing;

// Re-exports
pub use combinators::{all, any, chain, each};
pub use error::{Outcome, ValidationError};
pub use predicate::{And, Or, Predicate, PredicateExt};
pub use rule::{alphabetic, alphanumeric, email, empty, float, integer, not_empty, url, Rule};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{all, any, chain, each};
    pub use crate::error::{Outcome, ValidationError};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::rule::{
        alphabetic, alphanumeric, email, empty, float, integer, not_empty, url, Rule,
    };
}
