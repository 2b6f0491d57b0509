//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types, making it easy
//! to get started with the crate:
//!
//! ```rust
//! use entity_urn::prelude::*;
//!
//! let urn = Urn::parse("urn:orders:1234:vendorCode:abcd").unwrap();
//! assert_eq!(urn.entity(), "orders");
//! ```
//!
//! Builder state markers (`Empty`, `HasEntity`, `Ready`) are intentionally
//! excluded as they are implementation details.

pub use crate::{
    // Core types
    Attributes, Urn,
    // Builder
    UrnBuilder,
    // Errors
    UrnError, UrnErrorKind,
    // Encoding
    SEGMENT_ESCAPE, decode_segment, encode_segment,
    // Constants
    MAX_ENTITY_LENGTH, MAX_URN_LENGTH, MIN_ENTITY_LENGTH, SCHEME, SCHEME_PREFIX, UUID_ENTITY,
    VENDOR_KEY,
};
