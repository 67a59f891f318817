use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::priority::Priority;

/// Free-form attributes carried through compilation untouched
pub type AttributeBag = BTreeMap<String, serde_json::Value>;

/// A property definition as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    /// Tier text as authored; parsed when sort keys are built
    pub priority: String,
    #[serde(default)]
    pub alias_for: Option<String>,
    #[serde(default = "default_is_property")]
    pub is_property: bool,
    #[serde(default)]
    pub is_descriptor: bool,
    #[serde(flatten)]
    pub attributes: AttributeBag,
}

fn default_is_property() -> bool {
    true
}

impl PropertyRecord {
    pub fn new(name: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: priority.into(),
            alias_for: None,
            is_property: true,
            is_descriptor: false,
            attributes: AttributeBag::new(),
        }
    }

    pub fn alias(
        name: impl Into<String>,
        priority: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            alias_for: Some(target.into()),
            ..Self::new(name, priority)
        }
    }

    /// Target name if this record is an alias. Empty strings count as unset.
    pub fn alias_target(&self) -> Option<&str> {
        self.alias_for.as_deref().filter(|target| !target.is_empty())
    }

    pub fn is_alias(&self) -> bool {
        self.alias_target().is_some()
    }

    pub fn is_classified(&self) -> bool {
        self.is_property || self.is_descriptor
    }
}

/// A property after enumeration. Aliases share this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledProperty {
    pub name: String,
    pub priority: Priority,
    pub alias_for: Option<String>,
    pub is_property: bool,
    pub is_descriptor: bool,
    /// e.g. `CSSPropertyBackgroundColor` or `CSSPropertyAliasWebkitFoo`
    pub property_id: String,
    pub upper_camel_name: String,
    pub lower_camel_name: String,
    pub enum_value: u16,
    pub is_internal: bool,
    /// Authored attributes, dumped under their own `attributes` key
    pub attributes: AttributeBag,
}

impl CompiledProperty {
    pub fn is_alias(&self) -> bool {
        self.alias_for.is_some()
    }
}

/// Resolved alias: its target's metadata under the alias's own name and id.
pub type CompiledAlias = CompiledProperty;
