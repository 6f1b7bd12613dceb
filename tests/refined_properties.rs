//! Property-based tests for branded values and validation accumulation

use proptest::prelude::*;
use regex::Regex;
use sluice::error::{FieldError, Violations};
use sluice::refined::{Identifier, Payload};
use sluice::validation::ValidateAll;
use sluice::validator::{MessageValidator, Validator};
use sluice::{Semigroup, Validation};

fn phone_pattern() -> Regex {
    Regex::new(r"^\+[0-9]{6,14}[0-9]$").unwrap()
}

fn field_error(name: &str) -> FieldError {
    FieldError::new(name.to_string(), "invalid".to_string())
}

proptest! {
    #[test]
    fn prop_identifier_matches_pattern(s in r"\+?[0-9a-z ]{0,20}") {
        prop_assert_eq!(Identifier::try_from(s.as_str()).is_ok(), phone_pattern().is_match(&s));
    }

    #[test]
    fn prop_identifier_accepts_every_valid_length(digits in "[0-9]{7,15}") {
        let s = format!("+{digits}");
        let id = Identifier::try_from(s.as_str()).unwrap();
        prop_assert_eq!(id.as_str(), s.as_str());
    }

    #[test]
    fn prop_identifier_rejects_out_of_range_lengths(
        digits in prop_oneof!["[0-9]{0,6}", "[0-9]{16,30}"]
    ) {
        let s = format!("+{}", digits);
        prop_assert!(Identifier::try_from(s).is_err());
    }

    #[test]
    fn prop_identifier_arbitrary_strings(s in any::<String>()) {
        prop_assert_eq!(Identifier::try_from(s.as_str()).is_ok(), phone_pattern().is_match(&s));
    }

    #[test]
    fn prop_payload_length_bound(s in any::<String>()) {
        prop_assert_eq!(Payload::try_from(s.as_str()).is_ok(), s.encode_utf16().count() <= 160);
    }

    #[test]
    fn prop_payload_near_boundary(len in 150usize..170) {
        let s = "é".repeat(len);
        prop_assert_eq!(Payload::new(s).is_ok(), len <= 160);
    }

    #[test]
    fn prop_payload_astral_boundary(len in 70usize..90) {
        let s = "😀".repeat(len);
        prop_assert_eq!(Payload::new(s).is_ok(), len * 2 <= 160);
    }

    #[test]
    fn prop_refined_values_are_unchanged(s in "[ -~]{0,160}") {
        let payload = Payload::try_from(s.as_str()).unwrap();
        prop_assert_eq!(payload.into_inner(), s);
    }

    #[test]
    fn prop_validator_reports_every_bad_field(
        identifier in r"[0-9a-z+]{0,20}",
        payload_len in 0usize..320,
    ) {
        let validator = MessageValidator::default();
        let payload = "p".repeat(payload_len);
        let raw = validator.record(identifier.clone(), payload);

        let mut expected = Vec::new();
        if !phone_pattern().is_match(&identifier) {
            expected.push("identifier");
        }
        if payload_len > 160 {
            expected.push("payload");
        }

        match validator.validate(raw).into_result() {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(violations) => prop_assert_eq!(violations.fields(), expected),
        }
    }

    #[test]
    fn prop_validate_all_keeps_every_failure_in_order(
        outcomes in prop::collection::vec(any::<bool>(), 3)
    ) {
        let check = |i: usize| -> Validation<usize, Violations> {
            if outcomes[i] {
                Validation::success(i)
            } else {
                Validation::failure(field_error(&format!("f{i}")).into())
            }
        };

        let expected: Vec<String> = (0..3)
            .filter(|&i| !outcomes[i])
            .map(|i| format!("f{i}"))
            .collect();

        match (check(0), check(1), check(2)).validate_all().into_result() {
            Ok(values) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(values, (0, 1, 2));
            }
            Err(violations) => prop_assert_eq!(violations.fields(), expected),
        }
    }

    #[test]
    fn prop_violations_combine_is_associative(
        a in prop::collection::vec("[a-z]{1,5}", 0..4),
        b in prop::collection::vec("[a-z]{1,5}", 0..4),
        c in prop::collection::vec("[a-z]{1,5}", 0..4),
    ) {
        let build = |names: &[String]| -> Violations {
            names.iter().map(|n| field_error(n)).collect()
        };

        let left = build(&a).combine(build(&b)).combine(build(&c));
        let right = build(&a).combine(build(&b).combine(build(&c)));
        prop_assert_eq!(left, right);
    }
}
