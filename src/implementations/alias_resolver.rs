use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};

use crate::config::ALIAS_OFFSET;
use crate::errors::{CompileError, CompileResult};
use crate::implementations::naming::{upper_camel_name, Namer};
use crate::models::{CompiledAlias, CompiledProperty, PropertyRecord};

/// Rejects two aliases declaring the same target. Generated lookups hold at
/// most one alias per property.
///
/// Targets are compared by the property id they resolve to, so `color` and
/// `-color` name the same target.
pub fn check_distinct_targets(aliases: &[PropertyRecord], namer: &Namer<'_>) -> CompileResult<()> {
    let mut seen: HashMap<String, (&str, &str)> = HashMap::with_capacity(aliases.len());
    for alias in aliases {
        let Some(target) = alias.alias_target() else {
            continue;
        };
        if let Some((first, first_target)) =
            seen.insert(namer.property_id(target), (alias.name.as_str(), target))
        {
            return Err(CompileError::DuplicateAliasTarget {
                target: first_target.to_string(),
                first: first.to_string(),
                second: alias.name.clone(),
            });
        }
    }
    Ok(())
}

/// Builds one compiled alias per alias record, in the order given.
///
/// Each alias is a copy of its target with the name, id, enum value and case
/// variants replaced by the alias's own.
pub fn resolve_aliases(
    aliases: &[PropertyRecord],
    properties: &BTreeMap<String, CompiledProperty>,
    namer: &Namer<'_>,
) -> CompileResult<Vec<CompiledAlias>> {
    check_distinct_targets(aliases, namer)?;

    let mut resolved: Vec<CompiledAlias> = Vec::with_capacity(aliases.len());
    for alias in aliases {
        if !alias.is_classified() {
            return Err(CompileError::MissingClassification {
                name: alias.name.clone(),
            });
        }
        let target_name = alias.alias_target().unwrap_or_default();
        let target = properties
            .get(&namer.property_id(target_name))
            .ok_or_else(|| CompileError::DanglingAlias {
                alias: alias.name.clone(),
                target: target_name.to_string(),
            })?;

        let alias_id = namer.alias_id(&alias.name);
        let clash = properties
            .get(&alias_id)
            .or_else(|| resolved.iter().find(|other| other.property_id == alias_id));
        if let Some(clash) = clash {
            return Err(CompileError::IdentifierCollision {
                id: alias_id,
                first: clash.name.clone(),
                second: alias.name.clone(),
            });
        }

        let upper_camel = upper_camel_name(&alias.name);
        let compiled = CompiledAlias {
            name: alias.name.clone(),
            alias_for: Some(target.name.clone()),
            property_id: alias_id,
            enum_value: target.enum_value + ALIAS_OFFSET,
            lower_camel_name: namer.lower_camel_name(&upper_camel),
            upper_camel_name: upper_camel,
            ..target.clone()
        };
        trace!(
            "{} = {} (alias of {})",
            compiled.property_id,
            compiled.enum_value,
            target.property_id
        );
        resolved.push(compiled);
    }

    debug!("Resolved {} aliases", resolved.len());
    Ok(resolved)
}
