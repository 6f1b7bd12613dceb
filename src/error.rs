//! Structured errors for every failure that leaves a pipeline
//!
//! A [`StructuredError`] is a plain value: a short `reason` classifying the
//! failure and an optional `debug` payload with whatever diagnostics came
//! with it. Exactly two reasons originate in this crate:
//!
//! - [`INPUT_VALIDATION_FAILURE`], carrying every field violation
//! - [`LIBRARY_CALL_FAILURE`], carrying the capability's fault verbatim
//!
//! # Example
//!
//! ```
//! use sluice::error::{make_error, StructuredError};
//!
//! let err: StructuredError = make_error("input validation failure", None);
//! assert_eq!(err.reason, "input validation failure");
//! assert_eq!(err.to_string(), "input validation failure");
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::Semigroup;

/// Reason attached to errors produced by a [`Validator`](crate::validator::Validator).
pub const INPUT_VALIDATION_FAILURE: &str = "input validation failure";

/// Reason attached to errors produced by the effect adapter.
pub const LIBRARY_CALL_FAILURE: &str = "library call failure";

/// A single field that failed its check.
///
/// ```
/// use sluice::error::FieldError;
///
/// let err = FieldError::new("payload", "161 code units exceeds maximum 160");
/// assert_eq!(err.to_string(), "payload: 161 code units exceeds maximum 160");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{field}: {error}")]
pub struct FieldError {
    /// The field name, as configured by the caller
    pub field: Cow<'static, str>,
    /// What was wrong with the field
    pub error: String,
}

impl FieldError {
    /// Attach a field name to an error message.
    pub fn new(field: impl Into<Cow<'static, str>>, error: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            error: error.into(),
        }
    }

    /// Render a typed predicate error into the uniform string form.
    pub fn render<E: fmt::Display>(field: impl Into<Cow<'static, str>>, error: &E) -> Self {
        FieldError::new(field, error.to_string())
    }
}

/// Every field violation found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Violations(Vec<FieldError>);

impl Violations {
    /// A single violation.
    pub fn one(error: FieldError) -> Self {
        Violations(vec![error])
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the violations in field order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Names of the failing fields, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_ref()).collect()
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl From<FieldError> for Violations {
    fn from(error: FieldError) -> Self {
        Violations::one(error)
    }
}

impl FromIterator<FieldError> for Violations {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Violations(iter.into_iter().collect())
    }
}

impl IntoIterator for Violations {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Fault type of errors that no capability took part in.
///
/// Has no values, so a `StructuredError<NoFault>` never holds
/// [`Detail::Fault`]. Unlike [`std::convert::Infallible`] it implements
/// `Serialize` under the `serde` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoFault {}

impl fmt::Display for NoFault {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for NoFault {}

#[cfg(feature = "serde")]
impl serde::Serialize for NoFault {
    fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

/// Diagnostic payload of a [`StructuredError`].
///
/// Only ever logged or reported; nothing in the pipeline branches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Detail<F> {
    /// Every field that failed validation
    Violations(Violations),
    /// The fault returned by the wrapped capability, untouched
    Fault(F),
    /// The wrapped capability panicked; the panic message
    Panic(String),
}

/// The uniform failure value of the pipeline.
///
/// `F` is the wrapped capability's fault type. Errors that can only come
/// from validation use the default, [`NoFault`]. Displays as its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StructuredError<F = NoFault> {
    /// Short classification, e.g. [`INPUT_VALIDATION_FAILURE`]
    pub reason: Cow<'static, str>,
    /// Optional diagnostics
    pub debug: Option<Detail<F>>,
}

impl<F> fmt::Display for StructuredError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl<F: fmt::Debug> std::error::Error for StructuredError<F> {}

/// Build a [`StructuredError`] from a reason and optional diagnostics.
pub fn make_error<F>(reason: impl Into<Cow<'static, str>>, debug: Option<Detail<F>>) -> StructuredError<F> {
    StructuredError {
        reason: reason.into(),
        debug,
    }
}

impl<F> StructuredError<F> {
    /// An [`INPUT_VALIDATION_FAILURE`] carrying every violation.
    pub fn invalid_input(violations: Violations) -> Self {
        make_error(INPUT_VALIDATION_FAILURE, Some(Detail::Violations(violations)))
    }

    /// A [`LIBRARY_CALL_FAILURE`] carrying the capability's fault.
    pub fn library_call(fault: F) -> Self {
        make_error(LIBRARY_CALL_FAILURE, Some(Detail::Fault(fault)))
    }

    /// A [`LIBRARY_CALL_FAILURE`] caused by a panic inside the capability.
    pub fn library_panic(message: impl Into<String>) -> Self {
        make_error(LIBRARY_CALL_FAILURE, Some(Detail::Panic(message.into())))
    }

    /// The violations, when this is a validation failure.
    pub fn violations(&self) -> Option<&Violations> {
        match &self.debug {
            Some(Detail::Violations(violations)) => Some(violations),
            _ => None,
        }
    }

    /// The capability's fault, when it returned one.
    pub fn fault(&self) -> Option<&F> {
        match &self.debug {
            Some(Detail::Fault(fault)) => Some(fault),
            _ => None,
        }
    }
}

impl StructuredError<NoFault> {
    /// Reinterpret a fault-free error under any fault type.
    pub fn widen<F>(self) -> StructuredError<F> {
        StructuredError {
            reason: self.reason,
            debug: self.debug.map(|detail| match detail {
                Detail::Violations(violations) => Detail::Violations(violations),
                Detail::Panic(message) => Detail::Panic(message),
                Detail::Fault(never) => match never {},
            }),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn validation_failure_serializes_as_record() {
        let err = StructuredError::<NoFault>::invalid_input(Violations::one(FieldError::new(
            "identifier",
            "phone number must start with '+'",
        )));

        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "reason": "input validation failure",
                "debug": {
                    "violations": [
                        {"field": "identifier", "error": "phone number must start with '+'"}
                    ]
                }
            })
        );
    }

    #[test]
    fn fault_serializes_verbatim() {
        #[derive(serde::Serialize)]
        struct Refused {
            status: u16,
        }

        let err = StructuredError::library_call(Refused { status: 503 });
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"reason": "library call failure", "debug": {"fault": {"status": 503}}})
        );
    }

    #[test]
    fn panic_and_empty_debug_serialize() {
        let err = StructuredError::<NoFault>::library_panic("driver crashed");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"reason":"library call failure","debug":{"panic":"driver crashed"}}"#
        );

        let err: StructuredError = make_error("custom", None);
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"reason":"custom","debug":null}"#
        );
    }
}
