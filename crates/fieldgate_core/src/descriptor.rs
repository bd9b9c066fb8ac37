//! Field descriptors: the per-field gateway between an entity and its store.

use tracing::trace;

use crate::{BackingStore, FieldError, FieldValue, Result, Validate};

/// A single constrained attribute slot on an entity type.
///
/// One descriptor is shared by every instance of the owning type. It holds
/// only configuration: the public field name, the backing-storage key
/// derived from it, and the validator. The value it governs lives in each
/// instance's [`BackingStore`] under [`Descriptor::backing_name`], so
/// instances never share field values through the descriptor.
///
/// Configuration is fixed once [`bind`](Descriptor::bind) has run; after
/// that a descriptor is only ever read.
#[derive(Debug)]
pub struct Descriptor {
    name: String,
    backing_name: String,
    validator: Box<dyn Validate>,
}

impl Descriptor {
    /// Creates a descriptor for `validator`, not yet bound to a field name.
    pub(crate) fn unbound(validator: Box<dyn Validate>) -> Self {
        Self {
            name: String::new(),
            backing_name: String::new(),
            validator,
        }
    }

    /// Binds this descriptor to `field_name` on the owning type.
    ///
    /// Invoked once per field when the owning schema is built. The backing
    /// key is the field name prefixed with an underscore so it cannot
    /// collide with the public name.
    pub(crate) fn bind(&mut self, field_name: &str) {
        self.name = field_name.to_string();
        self.backing_name = format!("_{field_name}");
    }

    /// The public field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key under which this field's value is stored per instance.
    pub fn backing_name(&self) -> &str {
        &self.backing_name
    }

    /// Human-readable rendering of this field's constraint.
    pub fn describe(&self) -> String {
        self.validator.describe()
    }

    /// Reads the current value for this field from `store`.
    ///
    /// Fails with [`FieldError::Unset`] if the field has never been
    /// successfully written.
    pub fn read<'a>(&self, store: &'a BackingStore) -> Result<&'a FieldValue> {
        store
            .get(&self.backing_name)
            .ok_or_else(|| FieldError::unset(&self.name))
    }

    /// Validates `value` and, if it passes, stores it in `store`.
    ///
    /// On failure the error propagates and `store` is left unchanged: there
    /// is no partial write.
    pub fn write(&self, store: &mut BackingStore, value: FieldValue) -> Result<()> {
        self.validator.validate(&self.name, &value)?;
        trace!("field '{}' set to {}", self.name, value);
        store.insert(self.backing_name.clone(), value);
        Ok(())
    }
}
