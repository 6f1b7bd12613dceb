//! Validators: untrusted records in, branded values or one structured error out
//!
//! A [`Validator`] checks every field of a raw record independently. It
//! never stops at the first bad field: the error it produces lists every
//! violation, in configured field order.
//!
//! # Example
//!
//! ```rust
//! use sluice::error::INPUT_VALIDATION_FAILURE;
//! use sluice::validator::{MessageValidator, RawRecord, Validator};
//!
//! let validator = MessageValidator::default();
//!
//! let raw = RawRecord::from_iter([("identifier", "+3581234567"), ("payload", "Hello world!")]);
//! let message = validator.validate_inputs(raw).unwrap();
//! assert_eq!(message.identifier.as_str(), "+3581234567");
//!
//! let raw = RawRecord::from_iter([("identifier", "bad"), ("payload", "x")]);
//! let err = validator.validate_inputs(raw).unwrap_err();
//! assert_eq!(err.reason, INPUT_VALIDATION_FAILURE);
//! ```

use std::fmt;

use crate::error::{FieldError, StructuredError, Violations};
use crate::refined::{Identifier, Payload, Predicate, Refined};
use crate::validation::ValidateAll;
use crate::Validation;

/// Turns raw input into validated values, reporting every failure at once.
pub trait Validator {
    /// Untrusted input
    type Raw;

    /// Validated record of branded values
    type Valid;

    /// Check every field; never short-circuits.
    fn validate(&self, raw: Self::Raw) -> Validation<Self::Valid, Violations>;

    /// Same check, with failures collapsed into one
    /// [`INPUT_VALIDATION_FAILURE`](crate::error::INPUT_VALIDATION_FAILURE).
    fn validate_inputs(&self, raw: Self::Raw) -> Result<Self::Valid, StructuredError> {
        self.validate(raw)
            .map_err(StructuredError::invalid_input)
            .into_result()
    }
}

/// Named raw text fields, in the order they were supplied.
///
/// Later inserts of the same name replace the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, keeping its original position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Take a field out of the record.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.fields.iter().position(|(n, _)| n == name)?;
        Some(self.fields.remove(index).1)
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Which raw fields hold the message parts.
///
/// ```rust
/// use sluice::validator::FieldNames;
///
/// let names = FieldNames::new("phone", "message");
/// assert_eq!(names.identifier, "phone");
/// assert_eq!(FieldNames::default().payload, "payload");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldNames {
    /// Field carrying the destination address
    pub identifier: String,
    /// Field carrying the message body
    pub payload: String,
}

impl FieldNames {
    /// Custom field names.
    pub fn new(identifier: impl Into<String>, payload: impl Into<String>) -> Self {
        FieldNames {
            identifier: identifier.into(),
            payload: payload.into(),
        }
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames::new("identifier", "payload")
    }
}

/// A validated message: where it goes and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Message {
    /// Destination address
    pub identifier: Identifier,
    /// Message body
    pub payload: Payload,
}

/// Validates raw records into [`Message`]s.
///
/// Both fields are always checked. A missing field counts as a violation
/// of that field. Fields not named in [`FieldNames`] are ignored.
#[derive(Debug, Clone, Default)]
pub struct MessageValidator {
    fields: FieldNames,
}

impl MessageValidator {
    /// A validator reading the given field names.
    pub fn new(fields: FieldNames) -> Self {
        MessageValidator { fields }
    }

    /// The configured field names.
    pub fn fields(&self) -> &FieldNames {
        &self.fields
    }

    /// Build a raw record under this validator's field names.
    pub fn record(&self, identifier: impl Into<String>, payload: impl Into<String>) -> RawRecord {
        RawRecord::new()
            .with(self.fields.identifier.clone(), identifier)
            .with(self.fields.payload.clone(), payload)
    }
}

impl Validator for MessageValidator {
    type Raw = RawRecord;
    type Valid = Message;

    fn validate(&self, mut raw: RawRecord) -> Validation<Message, Violations> {
        let identifier = require(&mut raw, &self.fields.identifier);
        let payload = require(&mut raw, &self.fields.payload);

        (identifier, payload)
            .validate_all()
            .map(|(identifier, payload)| Message {
                identifier,
                payload,
            })
    }
}

fn require<P>(raw: &mut RawRecord, name: &str) -> Validation<Refined<String, P>, Violations>
where
    P: Predicate<String>,
    P::Error: fmt::Display,
{
    match raw.remove(name) {
        Some(value) => Refined::validate_field(value, name.to_owned()),
        None => Validation::failure(FieldError::new(name.to_owned(), "missing field").into()),
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_validation_error_serializes() {
        let raw = MessageValidator::default().record("3581234567", "Hi");
        let err = MessageValidator::default().validate_inputs(raw).unwrap_err();

        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"reason":"input validation failure","debug":{"violations":[{"field":"identifier","error":"phone number must start with '+'"}]}}"#
        );
    }

    #[test]
    fn test_field_names_partial_config_uses_defaults() {
        let names: FieldNames = serde_json::from_str(r#"{"identifier":"phone"}"#).unwrap();
        assert_eq!(names, FieldNames::new("phone", "payload"));

        let names: FieldNames = serde_json::from_str("{}").unwrap();
        assert_eq!(names, FieldNames::default());
    }

    #[test]
    fn test_message_round_trip() {
        let raw = MessageValidator::default().record("+3581234567", "Hello world!");
        let message = MessageValidator::default().validate_inputs(raw).unwrap();

        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"identifier":"+3581234567","payload":"Hello world!"}"#);
        assert_eq!(serde_json::from_str::<Message>(&json).unwrap(), message);
    }

    #[test]
    fn test_message_deserialize_checks_fields() {
        let json = format!(r#"{{"identifier":"+3581234567","payload":"{}"}}"#, "x".repeat(161));
        let err = serde_json::from_str::<Message>(&json).unwrap_err();
        assert!(err.to_string().contains("161 code units exceeds maximum 160"));
    }
}
