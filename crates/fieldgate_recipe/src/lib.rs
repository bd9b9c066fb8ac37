//! # Fieldgate Recipe
//!
//! The example entity for the fieldgate validation mechanism: a burger
//! recipe whose ingredient fields are all declared through descriptors and
//! validated on every assignment.
//!
//! ## Example
//!
//! ```rust
//! use fieldgate_recipe::BurgerRecipe;
//!
//! let recipe = BurgerRecipe::new(2, 1, 2, 2, 1, "mayo").unwrap();
//! assert_eq!(recipe.sauce().unwrap(), "mayo");
//!
//! // Out-of-range ingredients never produce an instance.
//! assert!(BurgerRecipe::new(4, 1, 2, 2, 1, "mayo").is_err());
//! ```

pub mod recipe;

pub use recipe::*;
