//! Branded values: data that can only exist once it has been checked
//!
//! A [`Refined<T, P>`] wraps a `T` that is known to satisfy the predicate
//! `P`. The only way to obtain one is through [`Refined::new`] (or the
//! helpers built on it), so holding a `Refined` is proof that the check ran.
//! There is no unchecked constructor.
//!
//! The two branded types used by the message pipeline:
//!
//! ```rust
//! use sluice::refined::{Identifier, Payload};
//!
//! let to = Identifier::new("+3581234567".to_string()).unwrap();
//! let body = Payload::new("Hello world!".to_string()).unwrap();
//! assert_eq!(to.as_str(), "+3581234567");
//!
//! assert!(Identifier::new("3581234567".to_string()).is_err());
//! assert!(Payload::new("x".repeat(161)).is_err());
//! ```
//!
//! # Custom predicates
//!
//! ```rust
//! use sluice::refined::{Predicate, Refined};
//!
//! pub struct Lowercase;
//!
//! impl Predicate<String> for Lowercase {
//!     type Error = &'static str;
//!
//!     fn check(value: &String) -> Result<(), Self::Error> {
//!         if value.chars().all(|c| !c.is_uppercase()) {
//!             Ok(())
//!         } else {
//!             Err("must be lowercase")
//!         }
//!     }
//! }
//!
//! type Slug = Refined<String, Lowercase>;
//! assert!(Slug::new("hello".to_string()).is_ok());
//! ```

pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;
mod validation;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

pub use predicates::{LengthError, MaxLength, PhoneNumber, PhoneNumberError};

/// Destination address: `+` followed by 7 to 15 ASCII digits.
pub type Identifier = Refined<String, PhoneNumber>;

/// Message body: at most 160 UTF-16 code units.
pub type Payload = Refined<String, MaxLength<160>>;

/// A membership test for a refined subtype of `T`.
///
/// Predicates are stateless and must be pure and total: no panics, no
/// blocking, no normalization of the input.
pub trait Predicate<T>: Send + Sync + 'static {
    /// Why a value was rejected
    type Error: Send + Sync;

    /// `Ok(())` when `value` belongs, otherwise the reason it does not.
    fn check(value: &T) -> Result<(), Self::Error>;

    /// Short text naming the rule, for docs and diagnostics.
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A value of type `T` guaranteed to satisfy predicate `P`.
///
/// Same layout as `T`; the predicate only lives in the type.
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _brand: PhantomData<fn() -> P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Check `value` against `P`, branding it on success.
    ///
    /// The value is never altered: `" +3581234567"` is rejected, not trimmed.
    pub fn new(value: T) -> Result<Self, P::Error> {
        P::check(&value)?;
        Ok(Self {
            value,
            _brand: PhantomData,
        })
    }

    /// Borrow the inner value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap into the inner value, dropping the brand.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<P: Predicate<String>> Refined<String, P> {
    /// Borrow the inner string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Manual impls: deriving would put bounds on the predicate marker too.

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Refined<{}>({:?})", std::any::type_name::<P>(), self.value)
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Refined {
            value: T::clone(&self.value),
            _brand: PhantomData,
        }
    }
}

impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T, P: Predicate<T>> Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<P: Predicate<String>> TryFrom<String> for Refined<String, P> {
    type Error = P::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<P: Predicate<String>> TryFrom<&str> for Refined<String, P> {
    type Error = P::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    /// Country codes this test pretends to route.
    struct Nordic;

    impl Predicate<u16> for Nordic {
        type Error = u16;

        fn check(code: &u16) -> Result<(), u16> {
            match code {
                45 | 46 | 47 | 354 | 358 => Ok(()),
                other => Err(*other),
            }
        }
    }

    type CountryCode = Refined<u16, Nordic>;

    #[test]
    fn test_new_checks_predicate() {
        assert_eq!(*CountryCode::new(358).unwrap().get(), 358);
        assert_eq!(CountryCode::new(44).unwrap_err(), 44);
    }

    #[test]
    fn test_into_inner_drops_brand() {
        let code: u16 = CountryCode::new(46).unwrap().into_inner();
        assert_eq!(code, 46);
    }

    #[test]
    fn test_ordering_and_dedup_follow_inner_value() {
        let codes: BTreeSet<CountryCode> = [358, 45, 358, 47]
            .into_iter()
            .map(|c| CountryCode::new(c).unwrap())
            .collect();
        let plain: Vec<u16> = codes.into_iter().map(Refined::into_inner).collect();
        assert_eq!(plain, vec![45, 47, 358]);
    }

    #[test]
    fn test_identifier_alias() {
        let id = Identifier::try_from("+3581234567").unwrap();
        assert_eq!(id.as_str(), "+3581234567");
        assert_eq!(id.to_string(), "+3581234567");
        assert!(id.starts_with("+358"));
    }

    #[test]
    fn test_no_normalization() {
        assert!(Identifier::try_from(" +3581234567").is_err());
        assert!(Identifier::try_from("+3581234567 ").is_err());
        assert!(Payload::try_from(" ".repeat(161)).is_err());
    }

    #[test]
    fn test_debug_names_predicate() {
        let payload = Payload::try_from("hi").unwrap();
        let debug = format!("{payload:?}");
        assert!(debug.starts_with("Refined<"));
        assert!(debug.contains("MaxLength<160>"));
        assert!(debug.ends_with("(\"hi\")"));
    }
}
