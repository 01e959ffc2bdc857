use serde::{Deserialize, Deserializer, Serialize};

use crate::constraints::{Constraint, FieldDescriptor, FieldValue, Validatable};

// ═══════════════════════════════════════════════════════════════════════════
// CATEGORY
// ═══════════════════════════════════════════════════════════════════════════

/// A category submitted by a client. Never persisted.
///
/// Missing keys and explicit `null`s both bind to empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

const CATEGORY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("ID", "id", &[Constraint::Required]),
    FieldDescriptor::new("Name", "name", &[Constraint::Required]),
];

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Validatable for Category {
    const ENTITY: &'static str = "Category";

    fn descriptors() -> &'static [FieldDescriptor] {
        CATEGORY_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "ID" => Some(FieldValue::from(&self.id)),
            "Name" => Some(FieldValue::from(&self.name)),
            _ => None,
        }
    }
}
