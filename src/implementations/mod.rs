pub mod alias_resolver;
pub mod compiler;
pub mod config;
pub mod enumerator;
pub mod key_builder;
pub mod naming;
pub mod order_validator;
pub mod record_loader;
pub mod table_builder;

pub use compiler::CssPropertyCompiler;
pub use config::{CompilerConfig, ConfigError, NamingConfig};
pub use record_loader::{FileRecordSource, LoadError, RecordFormat};
