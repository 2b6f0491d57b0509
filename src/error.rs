//! Error types for URN parsing and composition.

use std::fmt;

/// Errors that can occur when parsing, composing, or rewriting a URN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrnError {
    /// The input that was rejected
    pub input: String,
    /// The specific error that occurred
    pub kind: UrnErrorKind,
}

/// Specific URN error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrnErrorKind {
    /// Missing or wrong scheme (expected "urn:")
    MissingScheme {
        /// The scheme-like token that was found, if any
        found: Option<String>,
    },
    /// Fewer than two segments after the scheme
    MissingComponent {
        /// Number of segments found
        found: usize,
    },
    /// Entity or id segment is empty
    EmptyComponent {
        /// Name of the empty component
        component: &'static str,
    },
    /// Attribute key at the end of the string with no paired value
    DanglingAttributeKey {
        /// The unpaired key
        key: String,
    },
    /// Attribute pair with an empty key or value
    EmptyAttribute {
        /// Zero-based index of the offending pair
        index: usize,
        /// Which half of the pair is empty ("key" or "value")
        component: &'static str,
    },
    /// Composition requested without a required field
    MissingRequiredField {
        /// Name of the missing field
        field: &'static str,
    },
    /// URN exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Strict validation rejected the string
    InvalidFormat,
}

impl fmt::Display for UrnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid URN '{}': ", self.input)?;
        match &self.kind {
            UrnErrorKind::MissingScheme { found } => match found {
                Some(s) => write!(f, "expected scheme 'urn:', found '{s}'"),
                None => write!(f, "missing scheme; URN must start with 'urn:'"),
            },
            UrnErrorKind::MissingComponent { found } => {
                write!(f, "expected an entity and an id after the scheme, found {found} segment(s)")
            }
            UrnErrorKind::EmptyComponent { component } => {
                write!(f, "{component} cannot be empty")
            }
            UrnErrorKind::DanglingAttributeKey { key } => {
                write!(f, "attribute key '{key}' has no value")
            }
            UrnErrorKind::EmptyAttribute { index, component } => {
                write!(f, "attribute {component} at pair {index} is empty")
            }
            UrnErrorKind::MissingRequiredField { field } => {
                write!(f, "missing required field: {field}")
            }
            UrnErrorKind::TooLong { max, actual } => {
                write!(f, "URN length {actual} exceeds maximum {max}")
            }
            UrnErrorKind::InvalidFormat => write!(f, "invalid URN format"),
        }
    }
}

impl std::error::Error for UrnError {}
