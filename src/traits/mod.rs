pub mod property_compiler;
pub mod record_source;

// Re-export traits
pub use property_compiler::PropertyCompiler;
pub use record_source::RecordSource;
