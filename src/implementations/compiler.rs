use log::{debug, info};

use crate::errors::CompileResult;
use crate::implementations::alias_resolver::resolve_aliases;
use crate::implementations::config::CompilerConfig;
use crate::implementations::enumerator::enumerate;
use crate::implementations::key_builder::build_sort_keys;
use crate::implementations::naming::Namer;
use crate::implementations::order_validator::sort_records;
use crate::implementations::table_builder::build_table;
use crate::models::{PropertyRecord, PropertyTable};
use crate::traits::property_compiler::PropertyCompiler;

/// Compiles CSS property records into a [`PropertyTable`].
///
/// Stages run in a fixed order and the first failure aborts the run:
/// sort keys, uniqueness and sorting, enumeration of base properties,
/// alias resolution, table assembly.
///
/// # Example
///
/// ```
/// use csspropc::{CssPropertyCompiler, PropertyCompiler, PropertyRecord};
///
/// let compiler = CssPropertyCompiler::default();
/// let table = compiler
///     .compile(vec![
///         PropertyRecord::new("color", "High"),
///         PropertyRecord::alias("-webkit-color", "High", "color"),
///     ])
///     .unwrap();
///
/// assert_eq!(table.get("CSSPropertyColor").unwrap().enum_value, 3);
/// assert_eq!(table.aliases()[0].enum_value, 3 + 512);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CssPropertyCompiler {
    config: CompilerConfig,
}

impl CssPropertyCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }
}

impl PropertyCompiler for CssPropertyCompiler {
    fn compile(&self, records: Vec<PropertyRecord>) -> CompileResult<PropertyTable> {
        info!("Compiling {} property records", records.len());
        let namer = Namer::new(&self.config.naming);

        let keys = build_sort_keys(&records)?;
        let sorted = sort_records(records, keys)?;

        let (aliases, properties): (Vec<PropertyRecord>, Vec<PropertyRecord>) =
            sorted.into_iter().partition(PropertyRecord::is_alias);
        debug!(
            "Split into {} properties and {} aliases",
            properties.len(),
            aliases.len()
        );

        let enumeration = enumerate(&properties, &namer)?;
        let resolved = resolve_aliases(&aliases, &enumeration.by_id, &namer)?;
        let table = build_table(enumeration, resolved);

        info!(
            "Compiled {} properties and {} aliases",
            table.base_properties().len(),
            table.aliases().len()
        );
        Ok(table)
    }
}
