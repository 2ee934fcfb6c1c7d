//! Core predicate trait and pairwise combinators
//!
//! A predicate checks one string and either accepts it or reports why not.
//! Plain functions and closures of shape `Fn(&str) -> Result<(), E>` are
//! predicates already, so caller-defined checks mix freely with the built-in
//! rules.

/// A check over a single input string.
///
/// # Example
///
/// ```rust
/// use formguard::{Predicate, Rule, ValidationError};
///
/// fn no_spaces(input: &str) -> Result<(), ValidationError> {
///     if input.contains(' ') {
///         Err(ValidationError::NotAlphanumeric)
///     } else {
///         Ok(())
///     }
/// }
///
/// assert!(no_spaces.check("abc").is_ok());
/// assert!(Rule::Integer.check("12").is_ok());
/// ```
pub trait Predicate {
    /// The error reported when the input is rejected.
    type Error;

    /// Check `input`, returning `Ok(())` when it is accepted.
    fn check(&self, input: &str) -> Result<(), Self::Error>;
}

// Blanket impl for functions and closures
impl<F, E> Predicate for F
where
    F: Fn(&str) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn check(&self, input: &str) -> Result<(), E> {
        self(input)
    }
}

/// Extension trait for composing two predicates.
///
/// # Example
///
/// ```rust
/// use formguard::{empty, integer, not_empty, Predicate, PredicateExt, ValidationError};
///
/// // Required integer field
/// let required = not_empty.and(integer);
/// assert_eq!(required.check(""), Err(ValidationError::IsEmpty));
/// assert_eq!(required.check("4x"), Err(ValidationError::NotInteger));
///
/// // Optional integer field
/// let optional = empty.or(integer);
/// assert_eq!(optional.check(""), Ok(()));
/// assert_eq!(optional.check("42"), Ok(()));
/// assert_eq!(optional.check("4x"), Err(ValidationError::NotInteger));
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Run `self`, then `other` only if `self` accepted the input.
    ///
    /// Equivalent to a two-link [`chain`](crate::chain).
    fn and<P: Predicate<Error = Self::Error>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Accept the input when either predicate accepts it.
    ///
    /// `other` only runs when `self` rejects. When both reject, the error
    /// from `other` is reported, as [`any`](crate::any) reports the last one.
    fn or<P: Predicate<Error = Self::Error>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// Sequencing combinator - both predicates must accept.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1, P2> Predicate for And<P1, P2>
where
    P1: Predicate,
    P2: Predicate<Error = P1::Error>,
{
    type Error = P1::Error;

    #[inline]
    fn check(&self, input: &str) -> Result<(), Self::Error> {
        self.0.check(input)?;
        self.1.check(input)
    }
}

/// Alternative combinator - either predicate may accept.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1, P2> Predicate for Or<P1, P2>
where
    P1: Predicate,
    P2: Predicate<Error = P1::Error>,
{
    type Error = P1::Error;

    #[inline]
    fn check(&self, input: &str) -> Result<(), Self::Error> {
        match self.0.check(input) {
            Ok(()) => Ok(()),
            Err(_) => self.1.check(input),
        }
    }
}
