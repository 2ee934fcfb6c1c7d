//! Sequence and aggregate validation outcomes
//!
//! [`chain`] runs predicates lazily and stops at the first failure. [`each`],
//! [`all`] and [`any`] take outcomes that were already computed, so every
//! underlying check has run before they decide what to report.
//!
//! All four are generic over the error type and hand errors back unchanged.
//!
//! # Example
//!
//! ```rust
//! use formguard::{all, any, each, email, empty, float, integer, not_empty, ValidationError};
//!
//! // Report the first problem with a form
//! let first = each([not_empty("Ana"), email("ana@example"), integer("3x")]);
//! assert_eq!(first, Err(ValidationError::NotInteger));
//!
//! // Or report all of them
//! let every = all([not_empty(""), email("ana@example"), integer("3x")]);
//! assert_eq!(every, vec![ValidationError::IsEmpty, ValidationError::NotInteger]);
//!
//! // Optional numeric field: empty or an integer
//! assert_eq!(any([empty(""), integer("")]), Ok(()));
//! assert_eq!(any([empty("x"), float("x")]), Err(ValidationError::NotFloat));
//! ```

use crate::predicate::Predicate;

/// Run `links` against `input` in order, stopping at the first rejection.
///
/// Returns the first error, or `Ok(())` when every link accepts. Links after
/// the first failure are never called.
///
/// # Example
///
/// ```rust
/// use formguard::{chain, email, not_empty, Outcome, ValidationError};
///
/// let links: [fn(&str) -> Outcome; 2] = [not_empty, email];
/// assert_eq!(chain("user@example.com", links), Ok(()));
/// assert_eq!(chain("", links), Err(ValidationError::IsEmpty));
/// ```
pub fn chain<I, P>(input: &str, links: I) -> Result<(), P::Error>
where
    I: IntoIterator<Item = P>,
    P: Predicate,
{
    for (_index, link) in links.into_iter().enumerate() {
        if let Err(err) = link.check(input) {
            #[cfg(feature = "tracing")]
            tracing::trace!(link = _index, "chain stopped at failing link");
            return Err(err);
        }
    }
    Ok(())
}

/// Return the first error among already-computed outcomes.
///
/// # Example
///
/// ```rust
/// use formguard::{each, email, ValidationError};
///
/// let result = each([
///     email("user@example.com"),
///     email("userexample.com"),
///     email("user@example.com"),
/// ]);
/// assert_eq!(result, Err(ValidationError::NotEmail));
/// ```
pub fn each<I, E>(results: I) -> Result<(), E>
where
    I: IntoIterator<Item = Result<(), E>>,
{
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

/// Collect every error among already-computed outcomes, in order.
///
/// The vector is empty when every outcome passed.
///
/// # Example
///
/// ```rust
/// use formguard::{all, email, float, not_empty};
///
/// let errors = all([email("user@example.com"), not_empty("hola"), float("1.23")]);
/// assert!(errors.is_empty());
/// ```
pub fn all<I, E>(results: I) -> Vec<E>
where
    I: IntoIterator<Item = Result<(), E>>,
{
    let errors: Vec<E> = results.into_iter().filter_map(Result::err).collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(count = errors.len(), "collected validation errors");
    errors
}

/// Accept when at least one already-computed outcome passed.
///
/// When every outcome failed, the last error is returned. An empty input
/// counts as accepted.
///
/// # Example
///
/// ```rust
/// use formguard::{any, email, float, ValidationError};
///
/// let result = any([email("bad"), email("123"), float("a")]);
/// assert_eq!(result, Err(ValidationError::NotFloat));
/// ```
pub fn any<I, E>(results: I) -> Result<(), E>
where
    I: IntoIterator<Item = Result<(), E>>,
{
    let mut last = None;
    for result in results {
        match result {
            Ok(()) => return Ok(()),
            Err(err) => last = Some(err),
        }
    }
    match last {
        Some(err) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("every alternative failed");
            Err(err)
        }
        None => Ok(()),
    }
}
