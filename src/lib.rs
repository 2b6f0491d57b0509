//! Parser, validator, and composer for entity URN strings.
//!
//! This crate implements parsing, validation, composition, and attribute
//! rewriting for URNs that name a resource by entity, id, and optional
//! attribute pairs.
//!
//! # Overview
//!
//! URNs have the structure:
//!
//! ```text
//! urn:<entity>:<id>[:<key>:<value>]*
//! ```
//!
//! The entity names the class of resource, the id names the instance, and
//! the attribute pairs carry additional qualifiers in order.
//!
//! # Quick Start
//!
//! ```rust
//! use entity_urn::Urn;
//!
//! // Parse a URN
//! let urn = Urn::parse("urn:orders:1234:vendorCode:abcd").unwrap();
//!
//! // Access components
//! assert_eq!(urn.entity(), "orders");
//! assert_eq!(urn.id(), "1234");
//! assert_eq!(urn.attribute("vendorCode"), Some("abcd"));
//!
//! // Validate without allocating a value
//! assert!(Urn::is_valid("urn:orders:1234"));
//! assert!(!Urn::is_valid("urn::1234"));
//!
//! // Generate identifier URNs
//! let generated = Urn::new_uuid();
//! assert_eq!(generated.entity(), "uuid");
//! ```
//!
//! # Builder Pattern
//!
//! Use the typestate builder for compile-time enforced construction:
//!
//! ```rust
//! use entity_urn::UrnBuilder;
//!
//! let urn = UrnBuilder::new()
//!     .entity("orders")
//!     .id("1234")
//!     .attribute("status", "pending")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(urn.to_string(), "urn:orders:1234:status:pending");
//! ```
//!
//! # Validation Rules
//!
//! | Rule | Constraint |
//! |------|-----------|
//! | Total length | 255 bytes |
//! | Entity length | 2-32 characters |
//! | Entity charset | leading alphanumeric, then alphanumeric or hyphen |
//! | Attributes | complete key/value pairs, no empty halves |
//!
//! [`Urn::parse`] is deliberately looser than these rules: it checks only
//! the string's structure, so malformed-but-shaped input can still be
//! inspected. [`Urn::is_valid`] and [`Urn::validated`] apply the full set.
//!
//! # Encoding
//!
//! Composition percent-encodes every component, so arbitrary text
//! (including `:`) is safe to pass in. Parsing never decodes: accessors
//! return stored segment text, and [`decode_segment`] recovers the
//! original text when needed.
//!
//! # Grammar Specification
//!
//! This crate implements the ABNF grammar defined in `grammar.abnf` at the
//! crate root. The grammar follows RFC 5234 (ABNF) and specifies:
//!
//! - **URN structure**: `urn:<entity>:<id>[:<key>:<value>]*`
//! - **Entity**: 2-32 characters, leading alphanumeric
//! - **Segments**: unreserved characters and percent-escapes
//!
//! See `grammar.abnf` for the complete formal specification.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod attributes;
mod builder;
mod constants;
mod encode;
mod error;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod urn;

pub use attributes::Attributes;
pub use builder::{Empty, HasEntity, Ready, UrnBuilder};
pub use constants::{
    MAX_ENTITY_LENGTH, MAX_URN_LENGTH, MIN_ENTITY_LENGTH, SCHEME, SCHEME_PREFIX, UUID_ENTITY,
    VENDOR_KEY,
};
pub use encode::{SEGMENT_ESCAPE, decode_segment, encode_segment};
pub use error::{UrnError, UrnErrorKind};
pub use urn::Urn;
