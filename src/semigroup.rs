//! Semigroup trait for associative error accumulation
//!
//! Validation failures are combined with [`Semigroup::combine`] instead of
//! short-circuiting, so every failing field ends up in the final report.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Example
//!
//! ```
//! use sluice::Semigroup;
//!
//! let first = vec!["identifier: missing leading '+'"];
//! let second = vec!["payload: 161 code units exceeds maximum 160"];
//! assert_eq!(first.combine(second).len(), 2);
//! ```

/// A type with an associative binary operation.
///
/// `combine` takes both sides by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another, keeping `self`'s contents first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
