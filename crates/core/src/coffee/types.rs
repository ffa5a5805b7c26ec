use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A coffee on the menu.
///
/// The `id` is fixed once the value is built. Request bodies that omit it get
/// a freshly generated one, so a deserialized `Coffee` always carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coffee {
    #[serde(default = "generate_id")]
    id: String,
    #[serde(default)]
    name: String,
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

impl Coffee {
    /// Creates a new coffee with a generated UUID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name)
    }

    /// Creates a coffee with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
