//! Typestate builder for constructing [`Urn`] instances.
//!
//! This module provides a builder that uses phantom types to enforce
//! at compile-time that required components are set before building.

use std::marker::PhantomData;

use crate::error::UrnError;
use crate::urn::Urn;

/// Marker: No components set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Entity has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasEntity;

/// Marker: All required components are set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for constructing [`Urn`] instances.
///
/// This builder enforces at compile-time that the required components are
/// added in order: entity, then id. Attributes are optional and can be
/// added at any point; they keep the order they were added in.
///
/// Components are taken as raw text and percent-encoded during `build()`,
/// exactly as [`Urn::compose`] encodes them.
///
/// # Type State
///
/// The builder uses phantom types to track which components have been set:
/// - [`Empty`]: Initial state, no components set
/// - [`HasEntity`]: Entity has been set
/// - [`Ready`]: Entity and id set, can call `build()`
///
/// # Examples
///
/// ```
/// use entity_urn::UrnBuilder;
///
/// let urn = UrnBuilder::new()
///     .entity("orders")
///     .id("1234")
///     .attribute("vendorCode", "abcd")
///     .build()
///     .unwrap();
///
/// assert_eq!(urn.to_string(), "urn:orders:1234:vendorCode:abcd");
/// ```
///
/// # Compile-Time Safety
///
/// Attempting to call methods out of order results in a compile error:
///
/// ```compile_fail
/// use entity_urn::UrnBuilder;
///
/// // Error: cannot call id() before entity()
/// let builder = UrnBuilder::new()
///     .id("1234");  // Compile error!
/// ```
///
/// ```compile_fail
/// use entity_urn::UrnBuilder;
///
/// // Error: cannot call build() without an id
/// let urn = UrnBuilder::new()
///     .entity("orders")
///     .build();  // Compile error!
/// ```
#[derive(Debug, Clone)]
pub struct UrnBuilder<State = Empty> {
    entity: Option<String>,
    id: Option<String>,
    attributes: Vec<(String, String)>,
    _state: PhantomData<State>,
}

impl UrnBuilder<Empty> {
    /// Creates a new builder in the initial state.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::UrnBuilder;
    ///
    /// let builder = UrnBuilder::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            entity: None,
            id: None,
            attributes: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Sets the entity and advances to the [`HasEntity`] state.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::UrnBuilder;
    ///
    /// let builder = UrnBuilder::new().entity("orders");
    /// ```
    #[must_use]
    pub fn entity(self, entity: impl Into<String>) -> UrnBuilder<HasEntity> {
        UrnBuilder {
            entity: Some(entity.into()),
            id: self.id,
            attributes: self.attributes,
            _state: PhantomData,
        }
    }
}

impl Default for UrnBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl UrnBuilder<HasEntity> {
    /// Sets the id and advances to the [`Ready`] state.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::UrnBuilder;
    ///
    /// let builder = UrnBuilder::new().entity("orders").id("1234");
    /// // Builder is now in Ready state and can call build()
    /// ```
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> UrnBuilder<Ready> {
        UrnBuilder {
            entity: self.entity,
            id: Some(id.into()),
            attributes: self.attributes,
            _state: PhantomData,
        }
    }
}

impl UrnBuilder<Ready> {
    /// Builds the final [`Urn`].
    ///
    /// This method is only available when the builder is in the [`Ready`]
    /// state, meaning the entity and id have both been set. Components are
    /// percent-encoded here, via [`Urn::compose`].
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if the entity or id is empty, an attribute key
    /// or value is empty, or the assembled URN would exceed the maximum
    /// length.
    ///
    /// # Panics
    ///
    /// This method will not panic in practice because the typestate pattern
    /// guarantees the entity and id are set before `build()` can be called.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::UrnBuilder;
    ///
    /// let urn = UrnBuilder::new()
    ///     .entity("orders")
    ///     .id("1234")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(urn.entity(), "orders");
    /// ```
    pub fn build(self) -> Result<Urn, UrnError> {
        // Guaranteed to be Some: the only way to reach Ready is through
        // entity() and then id().
        let entity = self.entity.expect("entity set in HasEntity state");
        let id = self.id.expect("id set in Ready state");

        Urn::compose(&entity, &id, self.attributes)
    }
}

/// Methods available in all states for optional components.
impl<State> UrnBuilder<State> {
    /// Adds an attribute pair.
    ///
    /// This can be called at any point in the builder chain. Repeating a
    /// key keeps the first position and the last value, matching
    /// [`Urn::compose`].
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::UrnBuilder;
    ///
    /// let urn = UrnBuilder::new()
    ///     .attribute("status", "pending")
    ///     .entity("orders")
    ///     .id("1234")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(urn.attribute("status"), Some("pending"));
    /// ```
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Adds an attribute pair if the value is present, otherwise skips the
    /// pair entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_urn::UrnBuilder;
    ///
    /// let urn = UrnBuilder::new()
    ///     .entity("orders")
    ///     .id("1234")
    ///     .maybe_attribute("vendor", Some("foo"))
    ///     .maybe_attribute("sku", None::<&str>)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(urn.to_string(), "urn:orders:1234:vendor:foo");
    /// ```
    #[must_use]
    pub fn maybe_attribute(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attribute(key, value),
            None => self,
        }
    }
}
