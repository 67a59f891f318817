use std::collections::BTreeMap;

use log::{debug, trace};

use crate::config::{FIRST_ENUM_VALUE, PROPERTY_CAPACITY};
use crate::errors::{CompileError, CompileResult};
use crate::implementations::key_builder::parse_priority;
use crate::implementations::naming::{upper_camel_name, Namer};
use crate::models::{CompiledProperty, PropertyRecord};

/// Base properties in enum order, plus the same properties keyed by id
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub ordered: Vec<CompiledProperty>,
    pub by_id: BTreeMap<String, CompiledProperty>,
}

/// Fails unless `count` base properties fit below the alias band
pub fn check_capacity(count: usize) -> CompileResult<()> {
    if FIRST_ENUM_VALUE as usize + count >= PROPERTY_CAPACITY as usize {
        return Err(CompileError::CapacityExceeded {
            count,
            first_enum_value: FIRST_ENUM_VALUE,
            capacity: PROPERTY_CAPACITY,
        });
    }
    Ok(())
}

/// Assigns enum values to sorted, non-alias records
pub fn enumerate(records: &[PropertyRecord], namer: &Namer<'_>) -> CompileResult<Enumeration> {
    check_capacity(records.len())?;

    let mut ordered = Vec::with_capacity(records.len());
    let mut by_id: BTreeMap<String, CompiledProperty> = BTreeMap::new();

    for (offset, record) in records.iter().enumerate() {
        if !record.is_classified() {
            return Err(CompileError::MissingClassification {
                name: record.name.clone(),
            });
        }

        let upper_camel = upper_camel_name(&record.name);
        let property = CompiledProperty {
            name: record.name.clone(),
            priority: parse_priority(record)?,
            alias_for: None,
            is_property: record.is_property,
            is_descriptor: record.is_descriptor,
            property_id: namer.property_id(&record.name),
            lower_camel_name: namer.lower_camel_name(&upper_camel),
            upper_camel_name: upper_camel,
            // Bounded by the capacity check above.
            enum_value: FIRST_ENUM_VALUE + offset as u16,
            is_internal: namer.is_internal(&record.name),
            attributes: record.attributes.clone(),
        };
        trace!("{} = {}", property.property_id, property.enum_value);

        if let Some(existing) = by_id.get(&property.property_id) {
            return Err(CompileError::IdentifierCollision {
                id: property.property_id.clone(),
                first: existing.name.clone(),
                second: property.name.clone(),
            });
        }
        by_id.insert(property.property_id.clone(), property.clone());
        ordered.push(property);
    }

    debug!(
        "Enumerated {} properties in [{}, {})",
        ordered.len(),
        FIRST_ENUM_VALUE,
        FIRST_ENUM_VALUE as usize + ordered.len()
    );
    Ok(Enumeration { ordered, by_id })
}
