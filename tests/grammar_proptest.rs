//! Property-based tests validating the parser against the ABNF grammar.
//!
//! These tests generate random inputs according to grammar constraints and
//! verify composition, parsing, validation, and rewriting agree with each
//! other across the whole input space.

use proptest::prelude::*;

use entity_urn::{MAX_URN_LENGTH, Urn, UrnErrorKind, decode_segment};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Valid leading entity characters
    const ALPHANUMERIC: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Valid entity characters after the first
    const ENTITY_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

    /// Unreserved characters, which percent-encode to themselves
    const UNRESERVED: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~";

    /// Generate a valid entity (2-16 chars; the rule allows up to 32)
    pub fn entity() -> impl Strategy<Value = String> {
        (2..=16usize).prop_flat_map(|len| {
            let first = prop::sample::select(ALPHANUMERIC.to_vec());
            let rest = prop::collection::vec(
                prop::sample::select(ENTITY_CHARS.to_vec()),
                len - 1..=len - 1,
            );

            (first, rest).prop_map(|(f, r)| {
                let mut s = String::with_capacity(1 + r.len());
                s.push(f as char);
                for c in r {
                    s.push(c as char);
                }
                s
            })
        })
    }

    /// Generate a segment of unreserved characters (1-12 chars)
    pub fn plain_segment() -> impl Strategy<Value = String> {
        (1..=12usize).prop_flat_map(|len| {
            prop::collection::vec(prop::sample::select(UNRESERVED.to_vec()), len..=len)
                .prop_map(|chars| chars.into_iter().map(|c| c as char).collect())
        })
    }

    /// Generate arbitrary printable text that needs escaping (1-8 chars,
    /// kept short so composed URNs stay under the length limit)
    pub fn raw_segment() -> impl Strategy<Value = String> {
        prop::collection::vec(0x20u8..=0x7eu8, 1..=8)
            .prop_map(|bytes| bytes.into_iter().map(|b| b as char).collect())
    }

    /// Generate attribute pairs with unique unreserved keys and values
    pub fn attribute_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::hash_set(plain_segment(), 0..=4).prop_flat_map(|keys| {
            let keys: Vec<String> = keys.into_iter().collect();
            let len = keys.len();
            prop::collection::vec(plain_segment(), len..=len)
                .prop_map(move |values| keys.clone().into_iter().zip(values).collect())
        })
    }

    /// Generate attribute pairs with unique unreserved keys and raw values
    pub fn raw_attribute_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::hash_set(plain_segment(), 0..=2).prop_flat_map(|keys| {
            let keys: Vec<String> = keys.into_iter().collect();
            let len = keys.len();
            prop::collection::vec(raw_segment(), len..=len)
                .prop_map(move |values| keys.clone().into_iter().zip(values).collect())
        })
    }
}

mod composition_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn composed_urns_parse_back(
            e in entity(),
            id in plain_segment(),
            pairs in attribute_pairs()
        ) {
            let urn = Urn::compose(&e, &id, pairs.clone()).unwrap();
            let reparsed = Urn::parse(urn.as_str()).unwrap();

            prop_assert_eq!(reparsed.entity(), e.as_str());
            prop_assert_eq!(reparsed.id(), id.as_str());

            let stored: Vec<(String, String)> = reparsed
                .attributes()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            prop_assert_eq!(stored, pairs);
        }

        #[test]
        fn raw_segments_roundtrip_through_decoding(
            e in entity(),
            id in raw_segment(),
            pairs in raw_attribute_pairs()
        ) {
            let urn = Urn::compose(&e, &id, pairs.clone()).unwrap();
            let reparsed = Urn::parse(urn.as_str()).unwrap();

            prop_assert_eq!(decode_segment(reparsed.id()).unwrap(), id.as_str());
            for (key, value) in pairs {
                let stored = reparsed.attribute(&key);
                prop_assert!(stored.is_some(), "missing key {}", key);
                prop_assert_eq!(
                    decode_segment(stored.unwrap_or_default()).unwrap(),
                    value.as_str()
                );
            }
        }

        #[test]
        fn duplicate_keys_keep_last_value(
            e in entity(),
            id in plain_segment(),
            k in plain_segment(),
            v1 in plain_segment(),
            v2 in plain_segment()
        ) {
            let urn = Urn::compose(&e, &id, [(k.clone(), v1), (k.clone(), v2.clone())]).unwrap();

            prop_assert_eq!(urn.attribute(&k), Some(v2.as_str()));
            prop_assert_eq!(urn.attributes().len(), 1);
        }
    }
}

mod validation_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn is_valid_never_panics(input in any::<String>()) {
            let _ = Urn::is_valid(&input);
            let _ = Urn::parse(&input);
        }

        #[test]
        fn composed_urns_are_valid(
            e in entity(),
            id in plain_segment(),
            pairs in attribute_pairs()
        ) {
            let urn = Urn::compose(&e, &id, pairs).unwrap();
            prop_assert!(Urn::is_valid(urn.as_str()));
        }

        #[test]
        fn oversized_input_parses_loosely_but_is_invalid(
            e in entity(),
            extra in 256usize..400
        ) {
            let input = format!("urn:{e}:{}", "x".repeat(extra));

            prop_assert!(input.len() > MAX_URN_LENGTH);
            prop_assert!(Urn::parse(&input).is_ok());
            prop_assert!(!Urn::is_valid(&input));
        }

        #[test]
        fn dangling_tail_is_rejected(
            e in entity(),
            id in plain_segment(),
            key in plain_segment()
        ) {
            let input = format!("urn:{e}:{id}:{key}");

            let err = Urn::parse(&input).unwrap_err();
            let is_dangling_key = matches!(err.kind, UrnErrorKind::DanglingAttributeKey { .. });
            prop_assert!(is_dangling_key);
            prop_assert!(!Urn::is_valid(&input));
        }
    }
}

mod mutation_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn with_attribute_then_get(
            e in entity(),
            id in plain_segment(),
            k in plain_segment(),
            v in plain_segment()
        ) {
            let base = Urn::new(&e, &id).unwrap();
            let updated = base.with_attribute(&k, &v).unwrap();

            prop_assert_eq!(updated.attribute(&k), Some(v.as_str()));
        }

        #[test]
        fn fresh_attribute_add_then_remove_roundtrips(
            e in entity(),
            id in plain_segment(),
            pairs in attribute_pairs(),
            k in plain_segment(),
            v in plain_segment()
        ) {
            let base = Urn::compose(&e, &id, pairs).unwrap();
            prop_assume!(base.attribute(&k).is_none());

            let updated = base.with_attribute(&k, &v).unwrap();
            prop_assert_eq!(updated.attribute(&k), Some(v.as_str()));

            let restored = updated.without_attribute(&k).unwrap();
            prop_assert_eq!(restored, base);
        }

        #[test]
        fn absent_key_removal_is_noop(
            e in entity(),
            id in plain_segment(),
            pairs in attribute_pairs(),
            k in plain_segment()
        ) {
            let base = Urn::compose(&e, &id, pairs).unwrap();
            prop_assume!(base.attribute(&k).is_none());

            let unchanged = base.without_attribute(&k).unwrap();
            prop_assert_eq!(unchanged, base);
        }

        #[test]
        fn normalized_is_idempotent(
            e in entity(),
            id in plain_segment(),
            pairs in attribute_pairs()
        ) {
            let urn = Urn::compose(&e, &id, pairs).unwrap();

            let once = urn.normalized().unwrap();
            let twice = once.normalized().unwrap();

            let lowered = e.to_lowercase();
            prop_assert_eq!(once.entity(), lowered.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}

mod length_constraint_tests {
    use super::*;

    #[test]
    fn urn_at_max_length_is_valid() {
        let id = "x".repeat(MAX_URN_LENGTH - "urn:or:".len());
        let urn = Urn::new("or", &id).unwrap();

        assert_eq!(urn.as_str().len(), MAX_URN_LENGTH);
        assert!(Urn::is_valid(urn.as_str()));
    }

    #[test]
    fn urn_over_max_length_fails_composition() {
        let id = "x".repeat(MAX_URN_LENGTH - "urn:or:".len() + 1);
        let err = Urn::new("or", &id).unwrap_err();

        assert!(matches!(
            err.kind,
            UrnErrorKind::TooLong { actual, .. } if actual == MAX_URN_LENGTH + 1
        ));
    }
}
