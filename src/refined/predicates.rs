//! String predicates for the message pipeline
//!
//! - [`PhoneNumber`]: `+` followed by 7 to 15 ASCII digits
//! - [`MaxLength<N>`]: at most `N` UTF-16 code units
//!
//! Both are strict membership tests. Nothing is trimmed or case-folded.

use super::Predicate;

/// Why a string is not a valid [`PhoneNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    /// Nothing to check
    #[error("phone number cannot be empty")]
    Empty,
    /// The first character is not `+`
    #[error("phone number must start with '+'")]
    MissingPlus,
    /// Something other than an ASCII digit after the `+`
    #[error("phone number contains non-digit character {0:?}")]
    NonDigit(char),
    /// Fewer than [`PhoneNumber::MIN_DIGITS`] digits
    #[error("phone number has {0} digits, needs at least {min}", min = PhoneNumber::MIN_DIGITS)]
    TooShort(usize),
    /// More than [`PhoneNumber::MAX_DIGITS`] digits
    #[error("phone number has {0} digits, allows at most {max}", max = PhoneNumber::MAX_DIGITS)]
    TooLong(usize),
}

/// International phone number: a leading `+`, then 7 to 15 ASCII digits.
///
/// Equivalent to the pattern `^\+[0-9]{6,14}[0-9]$`.
///
/// ```rust
/// use sluice::refined::{Identifier, PhoneNumberError};
///
/// assert!(Identifier::try_from("+3581234567").is_ok());
/// assert_eq!(Identifier::try_from("+1").unwrap_err(), PhoneNumberError::TooShort(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumber;

impl PhoneNumber {
    /// Fewest digits accepted after the `+`.
    pub const MIN_DIGITS: usize = 7;
    /// Most digits accepted after the `+`.
    pub const MAX_DIGITS: usize = 15;
}

impl Predicate<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn check(value: &String) -> Result<(), Self::Error> {
        if value.is_empty() {
            return Err(PhoneNumberError::Empty);
        }
        let digits = value
            .strip_prefix('+')
            .ok_or(PhoneNumberError::MissingPlus)?;

        if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(PhoneNumberError::NonDigit(c));
        }

        // all ASCII from here, so bytes == digits
        match digits.len() {
            n if n < Self::MIN_DIGITS => Err(PhoneNumberError::TooShort(n)),
            n if n > Self::MAX_DIGITS => Err(PhoneNumberError::TooLong(n)),
            _ => Ok(()),
        }
    }

    fn description() -> &'static str {
        "'+' followed by 7 to 15 digits"
    }
}

/// A string was longer than its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{length} code units exceeds maximum {max}")]
pub struct LengthError {
    /// UTF-16 code units found
    pub length: usize,
    /// UTF-16 code units allowed
    pub max: usize,
}

/// String length, counted in UTF-16 code units, must be at most `N`.
///
/// Characters outside the Basic Multilingual Plane (most emoji) take two
/// units, so they use up the bound twice as fast as `é` or `ä`.
///
/// ```rust
/// use sluice::refined::{MaxLength, Refined};
///
/// type Short = Refined<String, MaxLength<5>>;
/// assert!(Short::try_from("héllo").is_ok());
/// assert!(Short::try_from("hello!").is_err());
/// assert!(Short::try_from("ab😀😀").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLength<const N: usize>;

impl<const N: usize> Predicate<String> for MaxLength<N> {
    type Error = LengthError;

    fn check(value: &String) -> Result<(), Self::Error> {
        let length = value.encode_utf16().count();
        if length <= N {
            Ok(())
        } else {
            Err(LengthError { length, max: N })
        }
    }

    fn description() -> &'static str {
        "string with maximum UTF-16 length"
    }
}
