use log::debug;

use crate::implementations::enumerator::Enumeration;
use crate::models::{CompiledAlias, PropertyTable};

/// Combines enumerated base properties and resolved aliases.
pub fn build_table(enumeration: Enumeration, aliases: Vec<CompiledAlias>) -> PropertyTable {
    let Enumeration { ordered, by_id } = enumeration;
    debug!(
        "Building table with {} properties and {} aliases",
        ordered.len(),
        aliases.len()
    );
    PropertyTable::new(by_id, ordered, aliases)
}
