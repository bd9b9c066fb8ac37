//! Entity schemas: the ordered set of descriptors an entity type declares.

use crate::Descriptor;

/// The ordered collection of field descriptors declared by an entity type.
///
/// A schema is built once, when the owning type is defined (typically in a
/// `LazyLock` static), and shared read-only by every instance of that type.
/// Descriptors keep their declaration order.
#[derive(Debug)]
pub struct Schema {
    fields: Vec<Descriptor>,
}

impl Schema {
    pub(crate) fn from_fields(fields: Vec<Descriptor>) -> Self {
        Self { fields }
    }

    /// Returns the descriptor bound to `name`.
    ///
    /// # Panics
    ///
    /// Panics if no field of that name was declared. Field names are fixed
    /// at type-definition time, so a miss is a defect in the owning type,
    /// not a runtime condition.
    pub fn field(&self, name: &str) -> &Descriptor {
        self.fields
            .iter()
            .find(|d| d.name() == name)
            .unwrap_or_else(|| panic!("field '{name}' is not declared in this schema"))
    }

    /// Iterates the descriptors in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Descriptor> {
        self.fields.iter()
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntRange, OneOf, SchemaBuilder};

    fn schema() -> Schema {
        SchemaBuilder::new()
            .field("buns", IntRange::new(2, 3))
            .field("sauce", OneOf::new(["ketchup", "mayo"]))
            .build()
    }

    #[test]
    fn test_lookup_by_name() {
        let schema = schema();
        assert_eq!(schema.field("buns").backing_name(), "_buns");
        assert_eq!(schema.field("sauce").backing_name(), "_sauce");
    }

    #[test]
    fn test_declaration_order_preserved() {
        let schema = schema();
        let names: Vec<_> = schema.fields().map(Descriptor::name).collect();
        assert_eq!(names, vec!["buns", "sauce"]);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    #[should_panic(expected = "field 'pickles' is not declared")]
    fn test_undeclared_field_panics() {
        schema().field("pickles");
    }
}
