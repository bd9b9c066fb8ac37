//! # Fieldgate Core
//!
//! Field descriptors and validators for constrained record types.
//!
//! This crate provides the building blocks for declaring typed, constrained
//! fields on a record: each field is governed by a [`Descriptor`] that
//! intercepts every write, runs the field's validator, and only then stores
//! the value in the instance's [`BackingStore`]. Descriptors are declared
//! once per owning type and shared read-only by all of its instances.
//!
//! ## Key Concepts
//!
//! - **Descriptor**: a reusable field-level gateway controlling access to and
//!   validation of one field's value
//! - **Schema**: the ordered set of descriptors an entity type declares
//! - **BackingStore**: the per-instance storage a descriptor reads and writes
//! - **Validate**: the pluggable validation step ([`IntRange`], [`OneOf`])
//!
//! ## Example
//!
//! ```rust
//! use fieldgate_core::{BackingStore, IntRange, OneOf, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new()
//!     .field("portions", IntRange::new(1, 4))
//!     .field("size", OneOf::new(["small", "large"]))
//!     .build();
//!
//! let mut store = BackingStore::new();
//! schema.field("portions").write(&mut store, 2.into()).unwrap();
//! assert!(schema.field("portions").write(&mut store, 9.into()).is_err());
//! ```

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod schema;
pub mod store;
pub mod validate;
pub mod value;

pub use builder::*;
pub use descriptor::*;
pub use error::*;
pub use schema::*;
pub use store::*;
pub use validate::*;
pub use value::*;
