//! Validation integration for refined types
//!
//! Bridges [`Refined::new`] into [`Validation`] so independent fields can be
//! checked together and every failure reported.
//!
//! ```rust
//! use sluice::refined::{Identifier, Payload};
//! use sluice::validation::ValidateAll;
//!
//! let result = (
//!     Identifier::validate_field("bad".to_string(), "identifier"),
//!     Payload::validate_field("x".repeat(161), "payload"),
//! )
//!     .validate_all();
//!
//! match result.into_result() {
//!     Err(violations) => assert_eq!(violations.fields(), vec!["identifier", "payload"]),
//!     Ok(_) => panic!("expected two violations"),
//! }
//! ```

use std::borrow::Cow;
use std::fmt;

use super::{Predicate, Refined};
use crate::error::{FieldError, Violations};
use crate::Validation;

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Check a value, returning the typed predicate error on failure.
    pub fn validate(value: T) -> Validation<Self, P::Error> {
        Validation::from_result(Self::new(value))
    }

    /// Check a value on behalf of a named field.
    ///
    /// The predicate error is rendered into a [`FieldError`] so that fields
    /// with different predicates accumulate into one [`Violations`].
    pub fn validate_field(
        value: T,
        field: impl Into<Cow<'static, str>>,
    ) -> Validation<Self, Violations>
    where
        P::Error: fmt::Display,
    {
        Self::validate(value).map_err(|error| FieldError::render(field, &error).into())
    }
}
