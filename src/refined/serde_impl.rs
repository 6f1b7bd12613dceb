//! Serde support for refined types (feature-gated)
//!
//! Serializes as the inner value. Deserialization goes through
//! [`Refined::new`], so a payload that fails its predicate never becomes a
//! `Refined`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{Predicate, Refined};

impl<T, P> Serialize for Refined<T, P>
where
    T: Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de>,
    P: Predicate<T>,
    P::Error: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::refined::{Identifier, Payload};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Outgoing {
        to: Identifier,
        body: Payload,
    }

    #[test]
    fn test_serialize_as_inner() {
        let msg = Outgoing {
            to: Identifier::try_from("+3581234567").unwrap(),
            body: Payload::try_from("Hello world!").unwrap(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"to":"+3581234567","body":"Hello world!"}"#);
    }

    #[test]
    fn test_deserialize_checks_predicate() {
        let json = r#"{"to":"3581234567","body":"Hello"}"#;
        let err = serde_json::from_str::<Outgoing>(json).unwrap_err();
        assert!(err.to_string().contains("must start with '+'"));
    }

    #[test]
    fn test_deserialize_success() {
        let json = r#"{"to":"+3581234567","body":"Hello"}"#;
        let msg: Outgoing = serde_json::from_str(json).unwrap();
        assert_eq!(msg.to.as_str(), "+3581234567");
    }
}
