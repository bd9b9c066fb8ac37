//! Builder for assembling schemas.
//!
//! This module provides an ergonomic builder for declaring an entity type's
//! fields with a fluent API.

use crate::{Descriptor, Schema, Validate};

/// Builder for creating a [`Schema`].
///
/// Each `field` call creates a descriptor for the given validator and binds
/// it to the field name on the spot, so by the time `build` returns every
/// descriptor knows its backing-storage key.
///
/// # Example
///
/// ```rust
/// use fieldgate_core::{IntRange, OneOf, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .field("cutlets", IntRange::new(1, 3))
///     .field("sauce", OneOf::new(["ketchup", "mayo", "burger"]))
///     .build();
///
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<Descriptor>,
}

impl SchemaBuilder {
    /// Creates a new empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field governed by `validator`.
    pub fn field(mut self, name: &str, validator: impl Validate + 'static) -> Self {
        let mut descriptor = Descriptor::unbound(Box::new(validator));
        descriptor.bind(name);
        self.fields.push(descriptor);
        self
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        Schema::from_fields(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BackingStore, FieldValue, IntRange};

    #[test]
    fn test_builder_empty() {
        let schema = SchemaBuilder::new().build();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_builder_binds_fields() {
        let schema = SchemaBuilder::new()
            .field("eggs", IntRange::new(0, 2))
            .build();

        let descriptor = schema.field("eggs");
        assert_eq!(descriptor.name(), "eggs");
        assert_eq!(descriptor.backing_name(), "_eggs");
        assert_eq!(descriptor.describe(), "integer between 0 and 2 inclusive");
    }

    #[test]
    fn test_built_schema_validates_writes() {
        let schema = SchemaBuilder::new()
            .field("eggs", IntRange::new(0, 2))
            .build();
        let mut store = BackingStore::new();

        assert!(schema.field("eggs").write(&mut store, FieldValue::Int(1)).is_ok());
        assert!(schema.field("eggs").write(&mut store, FieldValue::Int(7)).is_err());
    }
}
