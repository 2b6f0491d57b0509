//! Main URN value type.

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::str::FromStr;

use uuid::Uuid;

use crate::attributes::Attributes;
use crate::constants::{
    MAX_ENTITY_LENGTH, MAX_URN_LENGTH, MIN_ENTITY_LENGTH, SCHEME, SCHEME_PREFIX, UUID_ENTITY,
    VENDOR_KEY,
};
use crate::encode::encode_segment;
use crate::error::{UrnError, UrnErrorKind};

/// A parsed URN value.
///
/// URNs name a resource by its entity (the class of thing), an identifier,
/// and optional attribute key/value pairs.
///
/// # Structure
///
/// ```text
/// urn:<entity>:<id>[:<key>:<value>]*
/// ```
///
/// # Examples
///
/// ```
/// use entity_urn::Urn;
///
/// let urn = Urn::parse("urn:orders:1234:vendorCode:abcd").unwrap();
/// assert_eq!(urn.entity(), "orders");
/// assert_eq!(urn.id(), "1234");
/// assert_eq!(urn.attribute("vendorCode"), Some("abcd"));
/// assert_eq!(urn.attribute("missing"), None);
/// ```
///
/// Accessors return segment text exactly as stored. Percent-escapes are
/// applied when a URN is composed and never decoded on read; use
/// [`decode_segment`](crate::decode_segment) to recover the original text
/// of an escaped segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Urn {
    entity: String,
    id: String,
    attributes: Attributes,
    /// Assembled string representation
    canonical: String,
}

impl Urn {
    /// Parses a URN from a string.
    ///
    /// Parsing is structural: the scheme is matched case-insensitively, the
    /// remainder is split on `:`, and segment text is stored exactly as it
    /// appears, without percent-decoding. No length limit is enforced on
    /// this path; use [`Urn::validated`] or [`Urn::is_valid`] for the full
    /// validity rules. Duplicate attribute keys collapse to the last
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if:
    /// - The input does not start with the `urn:` scheme
    /// - Fewer than two segments follow the scheme
    /// - The entity or id segment is empty
    /// - An attribute key at the end of the string has no paired value
    /// - An attribute key or value is empty
    pub fn parse(input: &str) -> Result<Self, UrnError> {
        Self::parse_inner(input).map_err(|kind| UrnError {
            input: input.to_string(),
            kind,
        })
    }

    /// Parses a URN, accepting only strings that pass [`Urn::is_valid`].
    ///
    /// Unlike [`Urn::parse`], every rejection is reported uniformly as
    /// [`UrnErrorKind::InvalidFormat`]; callers that need the specific
    /// structural failure should use `parse` directly.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` with kind [`UrnErrorKind::InvalidFormat`] if the
    /// input is empty, exceeds the maximum length, fails structural
    /// parsing, or has an entity that breaks the entity naming rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::{Urn, UrnErrorKind};
    ///
    /// let urn = Urn::validated("urn:orders:1234").unwrap();
    /// assert_eq!(urn.id(), "1234");
    ///
    /// let err = Urn::validated("urn::1234").unwrap_err();
    /// assert_eq!(err.kind, UrnErrorKind::InvalidFormat);
    /// ```
    pub fn validated(input: &str) -> Result<Self, UrnError> {
        if input.is_empty() || input.len() > MAX_URN_LENGTH {
            return Err(Self::invalid_format(input));
        }
        let urn = Self::parse(input).map_err(|_| Self::invalid_format(input))?;
        if !Self::is_valid_entity(&urn.entity) {
            return Err(Self::invalid_format(input));
        }
        Ok(urn)
    }

    /// Composes a URN from an entity, an id, and attribute pairs.
    ///
    /// Each component is percent-encoded before assembly, so reserved
    /// characters (including `:`) are safe in any position. Attribute pairs
    /// keep their iteration order; a repeated key overwrites the earlier
    /// value while keeping the earlier position.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if:
    /// - The entity or id is empty ([`UrnErrorKind::MissingRequiredField`])
    /// - An attribute key or value is empty ([`UrnErrorKind::EmptyAttribute`])
    /// - The assembled string exceeds the maximum length
    ///   ([`UrnErrorKind::TooLong`])
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// let urn = Urn::compose("orders", "1234", [("vendorCode", "abcd")]).unwrap();
    /// assert_eq!(urn.to_string(), "urn:orders:1234:vendorCode:abcd");
    ///
    /// // Reserved characters are escaped on the way in.
    /// let urn = Urn::new("orders", "a:b").unwrap();
    /// assert_eq!(urn.id(), "a%3Ab");
    /// ```
    pub fn compose<I, K, V>(entity: &str, id: &str, attributes: I) -> Result<Self, UrnError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if entity.is_empty() {
            return Err(UrnError {
                input: String::new(),
                kind: UrnErrorKind::MissingRequiredField { field: "entity" },
            });
        }
        if id.is_empty() {
            return Err(UrnError {
                input: String::new(),
                kind: UrnErrorKind::MissingRequiredField { field: "id" },
            });
        }

        let mut encoded = Attributes::new();
        for (index, (key, value)) in attributes.into_iter().enumerate() {
            let key = key.as_ref();
            let value = value.as_ref();
            if key.is_empty() {
                return Err(UrnError {
                    input: String::new(),
                    kind: UrnErrorKind::EmptyAttribute { index, component: "key" },
                });
            }
            if value.is_empty() {
                return Err(UrnError {
                    input: String::new(),
                    kind: UrnErrorKind::EmptyAttribute { index, component: "value" },
                });
            }
            encoded.insert(
                encode_segment(key).into_owned(),
                encode_segment(value).into_owned(),
            );
        }

        Self::from_parts(
            encode_segment(entity).into_owned(),
            encode_segment(id).into_owned(),
            encoded,
        )
    }

    /// Composes a URN without attributes.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if the entity or id is empty, or the assembled
    /// string exceeds the maximum length.
    pub fn new(entity: &str, id: &str) -> Result<Self, UrnError> {
        Self::compose(entity, id, iter::empty::<(&str, &str)>())
    }

    /// Creates a `urn:uuid:<id>` URN with a freshly generated random UUID.
    ///
    /// The id is the hyphenated lowercase `UUIDv4` form (36 characters), so
    /// the result is always well under the length limit and this cannot
    /// fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// let urn = Urn::new_uuid();
    /// assert_eq!(urn.entity(), "uuid");
    /// assert!(Urn::is_valid(urn.as_str()));
    /// ```
    #[must_use]
    pub fn new_uuid() -> Self {
        let entity = UUID_ENTITY.to_string();
        let id = Uuid::new_v4().to_string();
        let attributes = Attributes::new();
        let canonical = Self::assemble(&entity, &id, &attributes);

        Self {
            entity,
            id,
            attributes,
            canonical,
        }
    }

    /// Creates a URN with a freshly generated random UUID id under a caller
    /// supplied entity.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if the entity is empty or the assembled string
    /// exceeds the maximum length.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// let urn = Urn::new_uuid_in("orders").unwrap();
    /// assert_eq!(urn.entity(), "orders");
    /// assert_eq!(urn.id().len(), 36);
    /// ```
    pub fn new_uuid_in(entity: &str) -> Result<Self, UrnError> {
        Self::new(entity, &Uuid::new_v4().to_string())
    }

    /// Returns true if the string is a fully valid URN.
    ///
    /// A string is valid when it is non-empty, within the maximum length,
    /// parses structurally, and its entity satisfies the entity naming
    /// rule. Never panics, for any input.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// assert!(Urn::is_valid("urn:orders:1234"));
    /// assert!(!Urn::is_valid("urn::1234"));
    /// assert!(!Urn::is_valid("invalid:orders:1234"));
    /// ```
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        if input.is_empty() || input.len() > MAX_URN_LENGTH {
            return false;
        }
        Self::parse_inner(input).is_ok_and(|urn| Self::is_valid_entity(&urn.entity))
    }

    /// Returns true if the string satisfies the entity naming rule.
    ///
    /// Entities are 2 to 32 characters, start with an ASCII letter or
    /// digit, and continue with ASCII letters, digits, or hyphens.
    #[must_use]
    pub fn is_valid_entity(entity: &str) -> bool {
        if entity.len() < MIN_ENTITY_LENGTH || entity.len() > MAX_ENTITY_LENGTH {
            return false;
        }
        let mut chars = entity.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphanumeric()) && chars.all(is_entity_char)
    }

    /// Returns the entity segment.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Returns the id segment.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the value for an attribute key, if present.
    ///
    /// The key is matched against stored segment text literally; no
    /// decoding takes place. When the source string repeated a key, the
    /// last occurrence is the one retained.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Returns the attribute pairs in order.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the well-known `vendor` attribute, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// let urn = Urn::parse("urn:product:65b2713b1267994147953b27:vendor:foo:sku:999").unwrap();
    /// assert_eq!(urn.vendor(), Some("foo"));
    /// ```
    #[must_use]
    pub fn vendor(&self) -> Option<&str> {
        self.attribute(VENDOR_KEY)
    }

    /// Returns the canonical URN string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Returns a new URN with the attribute set, overwriting any existing
    /// value for the key.
    ///
    /// The key and value are percent-encoded on the way in. Overwriting
    /// keeps the pair's existing position; a new key appends at the end.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if the key or value is empty, or the resulting
    /// string would exceed the maximum length.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// let urn = Urn::parse("urn:orders:1234").unwrap();
    /// let updated = urn.with_attribute("status", "pending").unwrap();
    /// assert_eq!(updated.to_string(), "urn:orders:1234:status:pending");
    /// assert_eq!(urn.attribute("status"), None);
    /// ```
    pub fn with_attribute(&self, key: &str, value: &str) -> Result<Self, UrnError> {
        let encoded_key = encode_segment(key);
        if key.is_empty() || value.is_empty() {
            let component = if key.is_empty() { "key" } else { "value" };
            let index = self
                .attributes
                .position(&encoded_key)
                .unwrap_or(self.attributes.len());
            return Err(UrnError {
                input: self.canonical.clone(),
                kind: UrnErrorKind::EmptyAttribute { index, component },
            });
        }

        let mut attributes = self.attributes.clone();
        attributes.insert(encoded_key.into_owned(), encode_segment(value).into_owned());
        Self::from_parts(self.entity.clone(), self.id.clone(), attributes)
    }

    /// Returns a new URN with the attribute removed.
    ///
    /// Removing a key that is not present is a no-op and returns an
    /// unchanged copy. The key is matched against stored segment text
    /// literally, the same way [`Urn::attribute`] matches it.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if the re-assembled string exceeds the maximum
    /// length, which can only happen for URNs parsed from over-long input.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// let urn = Urn::parse("urn:orders:1234:status:pending").unwrap();
    /// let updated = urn.without_attribute("status").unwrap();
    /// assert_eq!(updated.to_string(), "urn:orders:1234");
    ///
    /// let unchanged = urn.without_attribute("missing").unwrap();
    /// assert_eq!(unchanged, urn);
    /// ```
    pub fn without_attribute(&self, key: &str) -> Result<Self, UrnError> {
        let mut attributes = self.attributes.clone();
        if attributes.remove(key).is_none() {
            return Ok(self.clone());
        }
        Self::from_parts(self.entity.clone(), self.id.clone(), attributes)
    }

    /// Returns a new URN with the entity lower-cased.
    ///
    /// The id and attributes are left untouched. Normalizing an already
    /// normalized URN returns an equal value.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if the re-assembled string exceeds the maximum
    /// length. Lower-casing can grow the byte length of a non-ASCII
    /// entity, and URNs parsed from over-long input stay over-long.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::Urn;
    ///
    /// let urn = Urn::parse("URN:EXAMPLE:Animal:Ferret:Nose").unwrap();
    /// let normalized = urn.normalized().unwrap();
    /// assert_eq!(normalized.to_string(), "urn:example:Animal:Ferret:Nose");
    /// ```
    pub fn normalized(&self) -> Result<Self, UrnError> {
        Self::from_parts(
            self.entity.to_lowercase(),
            self.id.clone(),
            self.attributes.clone(),
        )
    }

    fn parse_inner(input: &str) -> Result<Self, UrnErrorKind> {
        // Byte-indexed prefix check; get() rejects a non-boundary cut so
        // multi-byte input around the scheme cannot panic.
        let scheme_ok = input
            .get(..SCHEME_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SCHEME_PREFIX));
        if !scheme_ok {
            let found = input
                .split(':')
                .next()
                .filter(|token| !token.is_empty())
                .map(str::to_string);
            return Err(UrnErrorKind::MissingScheme { found });
        }

        let rest = &input[SCHEME_PREFIX.len()..];
        if rest.is_empty() {
            return Err(UrnErrorKind::MissingComponent { found: 0 });
        }

        let segments: Vec<&str> = rest.split(':').collect();
        if segments.len() < 2 {
            return Err(UrnErrorKind::MissingComponent {
                found: segments.len(),
            });
        }

        let entity = segments[0];
        let id = segments[1];
        if entity.is_empty() {
            return Err(UrnErrorKind::EmptyComponent { component: "entity" });
        }
        if id.is_empty() {
            return Err(UrnErrorKind::EmptyComponent { component: "id" });
        }

        let tail = &segments[2..];
        if tail.len() % 2 == 1 {
            let key = tail[tail.len() - 1].to_string();
            return Err(UrnErrorKind::DanglingAttributeKey { key });
        }

        let mut attributes = Attributes::new();
        for (index, pair) in tail.chunks_exact(2).enumerate() {
            if pair[0].is_empty() {
                return Err(UrnErrorKind::EmptyAttribute { index, component: "key" });
            }
            if pair[1].is_empty() {
                return Err(UrnErrorKind::EmptyAttribute { index, component: "value" });
            }
            attributes.insert(pair[0], pair[1]);
        }

        let canonical = Self::assemble(entity, id, &attributes);

        Ok(Self {
            entity: entity.to_string(),
            id: id.to_string(),
            attributes,
            canonical,
        })
    }

    fn from_parts(entity: String, id: String, attributes: Attributes) -> Result<Self, UrnError> {
        let canonical = Self::assemble(&entity, &id, &attributes);
        let len = canonical.len();

        if len > MAX_URN_LENGTH {
            return Err(UrnError {
                input: canonical,
                kind: UrnErrorKind::TooLong {
                    max: MAX_URN_LENGTH,
                    actual: len,
                },
            });
        }

        Ok(Self {
            entity,
            id,
            attributes,
            canonical,
        })
    }

    fn assemble(entity: &str, id: &str, attributes: &Attributes) -> String {
        let mut result = format!("{SCHEME}:{entity}:{id}");

        if !attributes.is_empty() {
            result.push(':');
            result.push_str(&attributes.to_string());
        }

        result
    }

    fn invalid_format(input: &str) -> UrnError {
        UrnError {
            input: input.to_string(),
            kind: UrnErrorKind::InvalidFormat,
        }
    }
}

/// Characters allowed in an entity after the leading alphanumeric.
const fn is_entity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

impl FromStr for Urn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Urn {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<&str> for Urn {
    type Error = UrnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Urn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Urn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.canonical)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_canonical_string() {
        let urn = Urn::parse("urn:orders:1234").unwrap();
        let json = serde_json::to_string(&urn).unwrap();
        assert_eq!(json, "\"urn:orders:1234\"");
    }

    #[test]
    fn deserializes_from_string() {
        let urn: Urn = serde_json::from_str("\"urn:orders:1234:vendorCode:abcd\"").unwrap();
        assert_eq!(urn.entity(), "orders");
        assert_eq!(urn.attribute("vendorCode"), Some("abcd"));
    }

    #[test]
    fn deserialize_rejects_malformed_input() {
        let result: Result<Urn, _> = serde_json::from_str("\"not-a-urn\"");
        assert!(result.is_err());
    }
}
