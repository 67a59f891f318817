pub mod priority;
pub mod property;
pub mod sort_key;
pub mod table;

// Re-export common model types
pub use priority::Priority;
pub use property::{AttributeBag, CompiledAlias, CompiledProperty, PropertyRecord};
pub use sort_key::SortKey;
pub use table::PropertyTable;
