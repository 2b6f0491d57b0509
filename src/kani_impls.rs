//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for
//! the crate's public types, enabling property-based verification
//! with the Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Attributes, Urn};

/// Valid entity characters: every generated entity stays alphanumeric so
/// the leading-character rule holds by construction
const ENTITY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Valid unreserved segment characters for ids, keys, and values
const SEGMENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Generate a valid entity character
fn arbitrary_entity_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % ENTITY_CHARS.len();
    ENTITY_CHARS[idx] as char
}

/// Generate a valid segment character
fn arbitrary_segment_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % SEGMENT_CHARS.len();
    SEGMENT_CHARS[idx] as char
}

/// Generate an entity within the naming rule (2-7 chars for tractability)
fn arbitrary_entity() -> String {
    let len: usize = kani::any();
    let len = 2 + (len % 6);
    (0..len).map(|_| arbitrary_entity_char()).collect()
}

/// Generate a non-empty unreserved segment (1-6 chars for tractability)
fn arbitrary_segment() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 6);
    (0..len).map(|_| arbitrary_segment_char()).collect()
}

impl kani::Arbitrary for Attributes {
    fn any() -> Self {
        // 0-2 pairs for tractability
        let count: usize = kani::any();
        let count = count % 3;

        let mut attributes = Attributes::new();
        for _ in 0..count {
            attributes.insert(arbitrary_segment(), arbitrary_segment());
        }
        attributes
    }
}

impl kani::Arbitrary for Urn {
    fn any() -> Self {
        let attributes: Attributes = kani::any();
        let pairs: Vec<(String, String)> = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Urn::compose(&arbitrary_entity(), &arbitrary_segment(), pairs)
            .expect("valid URN by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: The canonical string of a composed URN parses back to an equal value
#[kani::proof]
#[kani::unwind(12)]
fn proof_canonical_roundtrip() {
    let urn: Urn = kani::any();
    let reparsed = Urn::parse(urn.as_str()).expect("canonical string should parse");
    assert_eq!(reparsed, urn);
}

/// Proof: Composed URNs always pass full validation
#[kani::proof]
#[kani::unwind(12)]
fn proof_composed_urns_are_valid() {
    let urn: Urn = kani::any();
    assert!(Urn::is_valid(urn.as_str()));
}

/// Proof: Normalization is idempotent
#[kani::proof]
#[kani::unwind(12)]
fn proof_normalized_idempotent() {
    let urn: Urn = kani::any();
    let once = urn.normalized().expect("within length limit");
    let twice = once.normalized().expect("within length limit");
    assert_eq!(once, twice);
}

/// Proof: Removing an absent key returns an equal value
#[kani::proof]
#[kani::unwind(12)]
fn proof_absent_key_removal_is_noop() {
    let urn: Urn = kani::any();
    let key = arbitrary_segment();
    kani::assume(!urn.attributes().contains_key(&key));

    let unchanged = urn.without_attribute(&key).expect("removal cannot grow");
    assert_eq!(unchanged, urn);
}
