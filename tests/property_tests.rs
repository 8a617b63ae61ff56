//! Property-based tests for `greet`.
//!
//! These verify the two outcome invariants across randomly generated inputs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use greeter::{DynamicValue, greet};
use proptest::prelude::*;

/// Generate arbitrary non-textual values, including nested containers and class instances.
fn non_textual() -> impl Strategy<Value = DynamicValue> {
    let leaf = prop_oneof![
        any::<f64>().prop_map(DynamicValue::Number),
        any::<bool>().prop_map(DynamicValue::Boolean),
        Just(DynamicValue::Null),
        (0i64..4_102_444_800)
            .prop_map(|secs| DynamicValue::Date(DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default())),
        "[A-Z][a-zA-Z0-9]{0,12}".prop_map(DynamicValue::instance),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(DynamicValue::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m: BTreeMap<String, DynamicValue>| DynamicValue::Object(m)),
        ]
    })
}

proptest! {
    /// Property: textual input is greeted verbatim
    #[test]
    fn text_is_prefixed_verbatim(s in ".*") {
        prop_assert_eq!(greet(s.as_str()).unwrap(), format!("Hello, {s}"));
    }

    /// Property: every non-textual input fails with its kind name
    #[test]
    fn non_text_fails_with_kind_name(v in non_textual()) {
        let expected = format!("This is not a string. It is a {}.", v.type_name());
        let err = greet(v.clone()).unwrap_err();
        prop_assert_eq!(err.to_string(), expected);
    }

    /// Property: outcomes do not depend on call history
    #[test]
    fn outcomes_are_repeatable(v in non_textual(), s in ".*") {
        prop_assert_eq!(greet(v.clone()), greet(v));
        prop_assert_eq!(greet(s.as_str()), greet(s.as_str()));
    }
}
