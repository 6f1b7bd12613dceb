//! Validation type for accumulating errors
//!
//! `Validation` looks like `Result`, but combining two failures keeps both
//! errors instead of stopping at the first. This is what lets the
//! [`Validator`](crate::validator::Validator) report every bad field at once.
//!
//! # Examples
//!
//! ```
//! use sluice::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["identifier"]);
//! let v2 = Validation::<i32, _>::failure(vec!["payload"]);
//!
//! assert_eq!(v1.and(v2), Validation::Failure(vec!["identifier", "payload"]));
//! ```
//!
//! Independent fields are combined with [`ValidateAll`]:
//!
//! ```
//! use sluice::validation::{ValidateAll, Validation};
//!
//! let result = (
//!     Validation::<_, Vec<&str>>::success("+3581234567"),
//!     Validation::<_, Vec<&str>>::success("Hello world!"),
//! )
//!     .validate_all();
//! assert_eq!(result, Validation::Success(("+3581234567", "Hello world!")));
//! ```

use crate::Semigroup;

/// Either a valid value or the accumulated errors of every failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Every check passed
    Success(T),
    /// At least one check failed
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// A passing check carrying `value`.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// A failing check carrying `error`.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Lift a `Result`; `Err` becomes the accumulated error.
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("bad"));
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        result.map_or_else(Self::Failure, Self::Success)
    }

    /// Convert into a `Result`, the shape the rest of the pipeline consumes
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// True for [`Validation::Success`].
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// True for [`Validation::Failure`].
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Apply `f` to a success; a failure is returned as is.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Validation::from_result(self.into_result().map(f))
    }

    /// Apply `f` to the accumulated error; a success is returned as is.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        Validation::from_result(self.into_result().map_err(f))
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two independent validations, accumulating errors.
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let ok = Validation::<_, Vec<&str>>::success(1);
    /// let bad = Validation::<i32, _>::failure(vec!["too long"]);
    /// assert_eq!(ok.and(bad), Validation::Failure(vec!["too long"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        (self, other).validate_all()
    }

    /// Chain a dependent validation. Only runs `f` on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self.into_result() {
            Ok(value) => f(value),
            Err(error) => Validation::Failure(error),
        }
    }
}

/// Combine a heterogeneous tuple of validations, accumulating errors.
///
/// Every element is inspected; errors are combined left to right.
pub trait ValidateAll<E: Semigroup> {
    /// The tuple of success values
    type Output;

    /// Inspect every element and combine the failures
    fn validate_all(self) -> Validation<Self::Output, E>;
}

/// Fold one validation into the running error, yielding its value on success.
fn absorb<T, E: Semigroup>(errors: &mut Option<E>, validation: Validation<T, E>) -> Option<T> {
    match validation {
        Validation::Success(value) => Some(value),
        Validation::Failure(error) => {
            *errors = Some(match errors.take() {
                Some(previous) => previous.combine(error),
                None => error,
            });
            None
        }
    }
}

macro_rules! impl_validate_all {
    ($($T:ident),+) => {
        impl<E: Semigroup, $($T),+> ValidateAll<E> for ($(Validation<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validation<Self::Output, E> {
                let mut errors = None;
                let ($($T,)+) = self;
                $(let $T = absorb(&mut errors, $T);)+

                if let Some(error) = errors {
                    return Validation::Failure(error);
                }
                match ($($T,)+) {
                    ($(Some($T),)+) => Validation::Success(($($T,)+)),
                    _ => unreachable!("a missing value always records an error"),
                }
            }
        }
    };
}

impl_validate_all!(T1);
impl_validate_all!(T1, T2);
impl_validate_all!(T1, T2, T3);
impl_validate_all!(T1, T2, T3, T4);
impl_validate_all!(T1, T2, T3, T4, T5);
impl_validate_all!(T1, T2, T3, T4, T5, T6);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7, T8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_roundtrip() {
        assert_eq!(
            Validation::from_result(Ok::<_, String>(42)).into_result(),
            Ok(42)
        );
        assert_eq!(
            Validation::<i32, _>::from_result(Err("bad".to_string())).into_result(),
            Err("bad".to_string())
        );
    }

    #[test]
    fn test_map_and_map_err() {
        let ok = Validation::<_, Vec<&str>>::success(5).map(|x| x * 2);
        assert_eq!(ok, Validation::Success(10));

        let bad = Validation::<i32, _>::failure(vec!["a", "b"]).map_err(|e| e.len());
        assert_eq!(bad, Validation::Failure(2));
    }

    #[test]
    fn test_and_accumulates_both_failures() {
        let v1 = Validation::<i32, _>::failure(vec!["first"]);
        let v2 = Validation::<i32, _>::failure(vec!["second"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["first", "second"]));
    }

    #[test]
    fn test_and_single_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["second"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["second"]));
    }

    #[test]
    fn test_and_then_skips_on_failure() {
        let mut called = false;
        let result = Validation::<i32, _>::failure(vec!["bad"]).and_then(|x| {
            called = true;
            Validation::success(x)
        });
        assert!(result.is_failure());
        assert!(!called);
    }

    #[test]
    fn test_all_tuple_does_not_short_circuit() {
        let result = (
            Validation::<i32, _>::failure(vec!["one"]),
            Validation::<_, Vec<&str>>::success("ok"),
            Validation::<bool, _>::failure(vec!["three"]),
        )
            .validate_all();
        assert_eq!(result, Validation::Failure(vec!["one", "three"]));
    }

    #[test]
    fn test_all_single_element() {
        let result = (Validation::<_, Vec<&str>>::success(7),).validate_all();
        assert_eq!(result, Validation::Success((7,)));
    }
}
