//! Declarative field constraints and the metadata entities expose to the
//! validator.
//!
//! Entities describe their fields once, as a static slice of
//! [`FieldDescriptor`]s in declaration order. The validator walks that slice
//! and asks the entity for each field's current value through
//! [`Validatable::field`], so no runtime type inspection is involved.

use std::fmt;

/// A single rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The field must hold a non-zero value for its type.
    Required,
}

impl Constraint {
    /// Stable tag used to key message templates in a translation catalog.
    pub fn tag(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
        }
    }

    /// Returns `true` when `value` satisfies the constraint.
    pub fn check(&self, value: &FieldValue<'_>) -> bool {
        match self {
            Constraint::Required => !value.is_zero(),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Static description of one entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name (e.g. `ID`).
    pub name: &'static str,
    /// Name of the field on the wire (e.g. `id`).
    pub json_name: &'static str,
    pub constraints: &'static [Constraint],
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        json_name: &'static str,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            name,
            json_name,
            constraints,
        }
    }
}

/// Borrowed view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// An optional field that holds nothing.
    Absent,
}

impl FieldValue<'_> {
    /// Whether the value is the zero value for its type.
    ///
    /// Whitespace-only text is not zero.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Integer(n) => *n == 0,
            FieldValue::Float(n) => *n == 0.0,
            FieldValue::Bool(b) => !b,
            FieldValue::Absent => true,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

/// Implemented by every entity the validator can inspect.
pub trait Validatable {
    /// Entity name used in structural errors and fallback messages.
    const ENTITY: &'static str;

    /// Field metadata in declaration order.
    fn descriptors() -> &'static [FieldDescriptor];

    /// Current value of the field declared as `name`, or `None` when the
    /// entity has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}
