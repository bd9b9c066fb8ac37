//! Validation strategies for constrained fields.
//!
//! This module defines the core trait for implementing field validators and
//! the two built-in variants:
//! - [`IntRange`]: integer field within inclusive bounds
//! - [`OneOf`]: string field restricted to a fixed set of allowed values

use std::fmt;

use crate::{FieldError, FieldValue, Result};

/// Core trait for validating a candidate field value.
///
/// A validator checks a value against one constraint kind. It performs no
/// storage of its own: it either returns `Ok(())` or a descriptive
/// [`FieldError`], and the actual write happens in
/// [`Descriptor::write`](crate::Descriptor::write).
///
/// # Example
///
/// ```rust
/// use fieldgate_core::{FieldValue, Result, Validate};
///
/// #[derive(Debug)]
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     fn validate(&self, field: &str, value: &FieldValue) -> Result<()> {
///         // Validation logic here
///         Ok(())
///     }
///
///     fn describe(&self) -> String {
///         "a non-empty value".to_string()
///     }
/// }
/// ```
pub trait Validate: fmt::Debug + Send + Sync {
    /// Checks `value` against the constraint, naming `field` in any error.
    ///
    /// Returns `Ok(())` if the value is valid, with no side effect either way.
    fn validate(&self, field: &str, value: &FieldValue) -> Result<()>;

    /// Human-readable rendering of the constraint.
    fn describe(&self) -> String;
}

/// Integer field bounded to an inclusive range.
#[derive(Debug, Clone)]
pub struct IntRange {
    min: i64,
    max: i64,
}

impl IntRange {
    /// Creates a range validator over `min..=max`.
    ///
    /// `min <= max` is assumed and not itself checked.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Validate for IntRange {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<()> {
        // Strict type check: Float and Bool are not integers here.
        let n = match value {
            FieldValue::Int(n) => *n,
            other => return Err(FieldError::not_integer(field, other.type_name())),
        };

        if n < self.min || n > self.max {
            return Err(FieldError::out_of_range(field, n, self.min, self.max));
        }

        Ok(())
    }

    fn describe(&self) -> String {
        format!("integer between {} and {} inclusive", self.min, self.max)
    }
}

/// String field restricted to a fixed set of allowed values.
///
/// Options keep their declaration order; order only affects how the set is
/// rendered in error messages. Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct OneOf {
    options: Vec<String>,
}

impl OneOf {
    /// Creates a membership validator over `options`.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for OneOf {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<()> {
        // A non-string value is simply not a member of a string set.
        let is_member = value
            .as_str()
            .is_some_and(|s| self.options.iter().any(|o| o == s));

        if !is_member {
            return Err(FieldError::not_allowed(
                field,
                value.to_string(),
                &self.options,
            ));
        }

        Ok(())
    }

    fn describe(&self) -> String {
        format!("one of [{}]", self.options.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------
    // IntRange
    // ---------------------

    #[test]
    fn int_range_success() {
        let r = IntRange::new(2, 3);
        assert!(r.validate("buns", &FieldValue::Int(2)).is_ok());
        assert!(r.validate("buns", &FieldValue::Int(3)).is_ok());
    }

    #[test]
    fn int_range_out_of_bounds() {
        let r = IntRange::new(2, 3);
        assert!(matches!(
            r.validate("buns", &FieldValue::Int(1)),
            Err(FieldError::OutOfRange { min: 2, max: 3, .. })
        ));
        assert!(matches!(
            r.validate("buns", &FieldValue::Int(4)),
            Err(FieldError::OutOfRange { .. })
        ));
    }

    #[test]
    fn int_range_min_equals_max() {
        let r = IntRange::new(5, 5);
        assert!(r.validate("n", &FieldValue::Int(5)).is_ok());
        assert!(r.validate("n", &FieldValue::Int(4)).is_err());
        assert!(r.validate("n", &FieldValue::Int(6)).is_err());
    }

    #[test]
    fn int_range_rejects_non_integers() {
        let r = IntRange::new(0, 10);

        // An in-range float is still not an integer.
        assert!(matches!(
            r.validate("buns", &FieldValue::Float(2.0)),
            Err(FieldError::NotInteger { actual: "float", .. })
        ));
        assert!(matches!(
            r.validate("buns", &FieldValue::Bool(true)),
            Err(FieldError::NotInteger {
                actual: "boolean",
                ..
            })
        ));
        assert!(matches!(
            r.validate("buns", &FieldValue::Str("2".into())),
            Err(FieldError::NotInteger { actual: "string", .. })
        ));
    }

    #[test]
    fn int_range_describe() {
        assert_eq!(
            IntRange::new(2, 3).describe(),
            "integer between 2 and 3 inclusive"
        );
    }

    // ---------------------
    // OneOf
    // ---------------------

    #[test]
    fn one_of_success() {
        let v = OneOf::new(["ketchup", "mayo", "burger"]);
        assert!(v.validate("sauce", &FieldValue::Str("mayo".into())).is_ok());
        assert!(v.validate("sauce", &FieldValue::Str("burger".into())).is_ok());
    }

    #[test]
    fn one_of_rejects_unknown_value() {
        let v = OneOf::new(["ketchup", "mayo", "burger"]);
        let err = v
            .validate("sauce", &FieldValue::Str("ranch".into()))
            .unwrap_err();
        assert!(matches!(err, FieldError::NotAllowed { .. }));
        assert!(err.to_string().contains("ketchup, mayo, burger"));
    }

    #[test]
    fn one_of_is_case_sensitive() {
        let v = OneOf::new(["ketchup"]);
        assert!(v.validate("sauce", &FieldValue::Str("Ketchup".into())).is_err());
    }

    #[test]
    fn one_of_rejects_non_strings_as_not_members() {
        let v = OneOf::new(["ketchup", "mayo"]);
        assert!(matches!(
            v.validate("sauce", &FieldValue::Int(3)),
            Err(FieldError::NotAllowed { .. })
        ));
        assert!(matches!(
            v.validate("sauce", &FieldValue::Bool(false)),
            Err(FieldError::NotAllowed { .. })
        ));
    }

    #[test]
    fn one_of_describe() {
        assert_eq!(
            OneOf::new(["ketchup", "mayo"]).describe(),
            "one of [ketchup, mayo]"
        );
    }
}
