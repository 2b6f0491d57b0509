//! Constants for URN validation.

/// Maximum total URN length in bytes.
pub const MAX_URN_LENGTH: usize = 255;

/// Minimum entity length.
pub const MIN_ENTITY_LENGTH: usize = 2;

/// Maximum entity length.
pub const MAX_ENTITY_LENGTH: usize = 32;

/// The URN scheme.
pub const SCHEME: &str = "urn";

/// The scheme prefix matched (case-insensitively) at the start of a URN.
pub const SCHEME_PREFIX: &str = "urn:";

/// Well-known attribute key naming the vendor of a resource.
pub const VENDOR_KEY: &str = "vendor";

/// Entity used for generated UUID identifiers.
pub const UUID_ENTITY: &str = "uuid";
