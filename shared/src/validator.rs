//! Field-presence validation over static entity metadata.

use std::collections::HashSet;

use thiserror::Error;

use crate::constraints::{Constraint, FieldDescriptor, Validatable};

/// How a field is identified in violation messages.
#[derive(Clone, Copy, Default)]
pub enum FieldNaming {
    /// Declared field name, verbatim (`ID`).
    #[default]
    Declared,
    /// Wire name (`id`).
    Json,
    Custom(fn(&FieldDescriptor) -> String),
}

impl std::fmt::Debug for FieldNaming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldNaming::Declared => f.write_str("Declared"),
            FieldNaming::Json => f.write_str("Json"),
            FieldNaming::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FieldNaming {
    pub fn display_name(&self, descriptor: &FieldDescriptor) -> String {
        match self {
            FieldNaming::Declared => descriptor.name.to_string(),
            FieldNaming::Json => descriptor.json_name.to_string(),
            FieldNaming::Custom(f) => f(descriptor),
        }
    }

    /// Parses the configuration spelling (`declared` or `json`).
    pub fn from_config(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "declared" => Some(FieldNaming::Declared),
            "json" => Some(FieldNaming::Json),
            _ => None,
        }
    }
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub entity: &'static str,
    /// Declared field name, independent of naming.
    pub declared_field: &'static str,
    /// Display name resolved through [`FieldNaming`].
    pub field: String,
    pub json_field: &'static str,
    pub constraint: Constraint,
}

impl Violation {
    /// Untranslated message used when no template exists for the constraint.
    pub fn default_message(&self) -> String {
        format!(
            "Key: '{}.{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.entity,
            self.declared_field,
            self.field,
            self.constraint.tag()
        )
    }
}

/// The validation target itself is unusable. Always a programming defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("validator: {entity} declares no inspectable fields")]
    NoFields { entity: &'static str },

    #[error("validator: {entity} has no field named '{field}'")]
    UnknownField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("validator: {entity} declares field '{field}' more than once")]
    DuplicateField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Immutable once built; share it by reference across requests.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    naming: FieldNaming,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_naming(naming: FieldNaming) -> Self {
        Self { naming }
    }

    /// Checks every declared constraint of `entity`.
    ///
    /// Violations come back in field declaration order, then constraint
    /// order within a field. An empty list means the entity is valid.
    pub fn validate<T: Validatable>(&self, entity: &T) -> Result<Vec<Violation>, StructuralError> {
        let descriptors = T::descriptors();
        if descriptors.is_empty() {
            return Err(StructuralError::NoFields { entity: T::ENTITY });
        }

        let mut seen = HashSet::with_capacity(descriptors.len());
        let mut violations = Vec::new();

        for descriptor in descriptors {
            if !seen.insert(descriptor.name) {
                return Err(StructuralError::DuplicateField {
                    entity: T::ENTITY,
                    field: descriptor.name,
                });
            }

            let value = entity
                .field(descriptor.name)
                .ok_or(StructuralError::UnknownField {
                    entity: T::ENTITY,
                    field: descriptor.name,
                })?;

            for constraint in descriptor.constraints {
                if !constraint.check(&value) {
                    violations.push(Violation {
                        entity: T::ENTITY,
                        declared_field: descriptor.name,
                        field: self.naming.display_name(descriptor),
                        json_field: descriptor.json_name,
                        constraint: *constraint,
                    });
                }
            }
        }

        Ok(violations)
    }
}
