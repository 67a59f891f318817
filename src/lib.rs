pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ReservedSlot, ALIAS_OFFSET, FIRST_ENUM_VALUE, PROPERTY_CAPACITY};
pub use errors::{CompileError, CompileResult};
pub use implementations::{
    compiler::CssPropertyCompiler,
    config::{CompilerConfig, ConfigError, NamingConfig},
    record_loader::{FileRecordSource, LoadError, RecordFormat},
};
pub use models::{
    priority::Priority,
    property::{AttributeBag, CompiledAlias, CompiledProperty, PropertyRecord},
    sort_key::SortKey,
    table::PropertyTable,
};
pub use traits::{PropertyCompiler, RecordSource};
