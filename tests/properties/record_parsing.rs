//! Property tests for network record parsing.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use netrecon::{NetworkRecord, NetworkType, ParseError, RawNetwork};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z0-9 ./:-]{0,12}".prop_map(Value::String),
    ]
}

fn raw_map() -> impl Strategy<Value = RawNetwork> {
    let key = prop_oneof![
        Just("name".to_string()),
        Just("type".to_string()),
        Just("ip".to_string()),
        Just("cidrs".to_string()),
        "[a-z_]{1,10}",
    ];
    prop::collection::vec((key, json_leaf()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<Map<String, Value>>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary maps never panics, and success implies a scalar name.
    #[test]
    fn property_parse_never_panics(raw in raw_map()) {
        if let Ok(record) = NetworkRecord::parse(&raw) {
            let expected = match raw.get("name") {
                Some(Value::String(name)) => name.clone(),
                Some(other) => other.to_string(),
                None => unreachable!("parsed record without a name"),
            };
            prop_assert_eq!(expected.as_str(), record.name());
            let key = record.identity().to_string();
            prop_assert!(key.ends_with(record.network_type().as_str()));
        }
    }

    /// PROPERTY: any type name outside the registry is rejected.
    #[test]
    fn property_unknown_type_rejected(type_name in "[a-z]{1,10}") {
        prop_assume!(NetworkType::from_name(&type_name).is_none());

        let raw: RawNetwork =
            serde_json::from_value(json!({ "name": "data", "type": type_name })).unwrap();
        prop_assert_eq!(
            NetworkRecord::parse(&raw).unwrap_err(),
            ParseError::UnknownNetworkType { type_name }
        );
    }

    /// PROPERTY: kind-specific fields are optional for every known type.
    #[test]
    fn property_known_type_needs_only_name(network_type in prop::sample::select(NetworkType::ALL.to_vec())) {
        let raw: RawNetwork = serde_json::from_value(
            json!({ "name": "data", "type": network_type.as_str() }),
        )
        .unwrap();
        let record = NetworkRecord::parse(&raw).unwrap();
        prop_assert_eq!(record.network_type(), network_type);
        prop_assert!(record.field("anything").is_absent());
    }
}
