//! The example entity: a burger recipe with validated ingredient fields.

use std::sync::LazyLock;

use fieldgate_core::{
    BackingStore, FieldValue, IntRange, OneOf, Result, Schema, SchemaBuilder,
};
use tracing::debug;

/// Field layout shared by every [`BurgerRecipe`] instance.
///
/// Built once, when the type is first used; descriptors hold configuration
/// only, so sharing them across instances never shares values.
static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    SchemaBuilder::new()
        .field("buns", IntRange::new(2, 3))
        .field("cheese", IntRange::new(0, 2))
        .field("tomatoes", IntRange::new(0, 3))
        .field("cutlets", IntRange::new(1, 3))
        .field("eggs", IntRange::new(0, 2))
        .field("sauce", OneOf::new(["ketchup", "mayo", "burger"]))
        .build()
});

/// A fully-validated burger recipe.
///
/// Every ingredient is checked on construction and on every later
/// assignment, so an instance that exists always satisfies all of its
/// constraints. Each instance owns its backing store; two recipes never
/// observe each other's values.
#[derive(Debug, Clone)]
pub struct BurgerRecipe {
    store: BackingStore,
}

impl BurgerRecipe {
    /// The declared fields and their constraints, in declaration order.
    pub fn schema() -> &'static Schema {
        &SCHEMA
    }

    /// Builds a recipe, validating each ingredient in declaration order.
    ///
    /// Fails fast: the first invalid value aborts construction, the
    /// partially-filled store is discarded, and no instance reaches the
    /// caller.
    pub fn new(
        buns: impl Into<FieldValue>,
        cheese: impl Into<FieldValue>,
        tomatoes: impl Into<FieldValue>,
        cutlets: impl Into<FieldValue>,
        eggs: impl Into<FieldValue>,
        sauce: impl Into<FieldValue>,
    ) -> Result<Self> {
        let mut store = BackingStore::new();
        let values = [
            ("buns", buns.into()),
            ("cheese", cheese.into()),
            ("tomatoes", tomatoes.into()),
            ("cutlets", cutlets.into()),
            ("eggs", eggs.into()),
            ("sauce", sauce.into()),
        ];

        for (name, value) in values {
            SCHEMA.field(name).write(&mut store, value)?;
        }

        debug!("recipe constructed with {} fields", store.len());
        Ok(Self { store })
    }

    /// Reads the raw value of any declared field.
    pub fn get(&self, name: &str) -> Result<&FieldValue> {
        SCHEMA.field(name).read(&self.store)
    }

    fn int_field(&self, name: &str) -> Result<i64> {
        let value = SCHEMA.field(name).read(&self.store)?;
        Ok(value
            .as_int()
            .expect("integer fields only store validated integers"))
    }

    pub fn buns(&self) -> Result<i64> {
        self.int_field("buns")
    }

    pub fn cheese(&self) -> Result<i64> {
        self.int_field("cheese")
    }

    pub fn tomatoes(&self) -> Result<i64> {
        self.int_field("tomatoes")
    }

    pub fn cutlets(&self) -> Result<i64> {
        self.int_field("cutlets")
    }

    pub fn eggs(&self) -> Result<i64> {
        self.int_field("eggs")
    }

    pub fn sauce(&self) -> Result<&str> {
        let value = SCHEMA.field("sauce").read(&self.store)?;
        Ok(value
            .as_str()
            .expect("the sauce field only stores validated strings"))
    }

    /// Re-validates and assigns `buns`; on failure the old value stays.
    pub fn set_buns(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        SCHEMA.field("buns").write(&mut self.store, value.into())
    }

    pub fn set_cheese(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        SCHEMA.field("cheese").write(&mut self.store, value.into())
    }

    pub fn set_tomatoes(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        SCHEMA.field("tomatoes").write(&mut self.store, value.into())
    }

    pub fn set_cutlets(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        SCHEMA.field("cutlets").write(&mut self.store, value.into())
    }

    pub fn set_eggs(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        SCHEMA.field("eggs").write(&mut self.store, value.into())
    }

    pub fn set_sauce(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        SCHEMA.field("sauce").write(&mut self.store, value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldgate_core::FieldError;

    #[test]
    fn test_schema_declares_six_fields() {
        let names: Vec<_> = BurgerRecipe::schema().fields().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec!["buns", "cheese", "tomatoes", "cutlets", "eggs", "sauce"]
        );
    }

    #[test]
    fn test_valid_recipe() {
        let recipe = BurgerRecipe::new(2, 1, 2, 2, 1, "mayo").unwrap();
        assert_eq!(recipe.buns().unwrap(), 2);
        assert_eq!(recipe.sauce().unwrap(), "mayo");
    }

    #[test]
    fn test_setters_revalidate() {
        let mut recipe = BurgerRecipe::new(2, 1, 2, 2, 1, "mayo").unwrap();

        recipe.set_buns(3).unwrap();
        assert_eq!(recipe.buns().unwrap(), 3);

        assert!(matches!(
            recipe.set_buns(4),
            Err(FieldError::OutOfRange { .. })
        ));
        assert_eq!(recipe.buns().unwrap(), 3);
    }
}
