use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{ReservedSlot, ALIAS_OFFSET, FIRST_ENUM_VALUE};
use crate::models::property::{CompiledAlias, CompiledProperty};

/// Compiled property metadata handed to downstream generators.
///
/// `properties_including_aliases` holds every base property in sort order,
/// followed by every alias in sort order. `by_id` only indexes base
/// properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyTable {
    by_id: BTreeMap<String, CompiledProperty>,
    properties_including_aliases: Vec<CompiledProperty>,
    base_count: usize,
}

impl PropertyTable {
    pub(crate) fn new(
        by_id: BTreeMap<String, CompiledProperty>,
        base: Vec<CompiledProperty>,
        aliases: Vec<CompiledAlias>,
    ) -> Self {
        let base_count = base.len();
        let mut properties_including_aliases = base;
        properties_including_aliases.extend(aliases);
        Self {
            by_id,
            properties_including_aliases,
            base_count,
        }
    }

    /// Base properties keyed by `property_id`
    pub fn properties(&self) -> &BTreeMap<String, CompiledProperty> {
        &self.by_id
    }

    pub fn properties_including_aliases(&self) -> &[CompiledProperty] {
        &self.properties_including_aliases
    }

    /// Base properties in enum order
    pub fn base_properties(&self) -> &[CompiledProperty] {
        &self.properties_including_aliases[..self.base_count]
    }

    pub fn aliases(&self) -> &[CompiledAlias] {
        &self.properties_including_aliases[self.base_count..]
    }

    pub fn get(&self, property_id: &str) -> Option<&CompiledProperty> {
        self.by_id.get(property_id)
    }

    /// Finds a base property or alias by its authored name
    pub fn find_by_name(&self, name: &str) -> Option<&CompiledProperty> {
        self.properties_including_aliases
            .iter()
            .find(|property| property.name == name)
    }

    pub fn find_by_enum_value(&self, enum_value: u16) -> Option<&CompiledProperty> {
        if enum_value >= ALIAS_OFFSET {
            return self
                .aliases()
                .iter()
                .find(|alias| alias.enum_value == enum_value);
        }
        let index = enum_value.checked_sub(FIRST_ENUM_VALUE)? as usize;
        self.base_properties().get(index)
    }

    /// The alias pointing at `target_name`, if any
    pub fn alias_of(&self, target_name: &str) -> Option<&CompiledAlias> {
        self.aliases()
            .iter()
            .find(|alias| alias.alias_for.as_deref() == Some(target_name))
    }

    pub fn len(&self) -> usize {
        self.properties_including_aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties_including_aliases.is_empty()
    }

    pub fn first_enum_value(&self) -> u16 {
        FIRST_ENUM_VALUE
    }

    /// Highest base enum value, or `None` for an empty table
    pub fn last_enum_value(&self) -> Option<u16> {
        self.base_properties().last().map(|property| property.enum_value)
    }

    pub fn alias_offset(&self) -> u16 {
        ALIAS_OFFSET
    }

    pub fn reserved_slots(&self) -> &'static [ReservedSlot] {
        &ReservedSlot::ALL
    }
}
