use crate::errors::CompileResult;
use crate::models::{PropertyRecord, PropertyTable};

/// Main trait for turning authored property records into a compiled table
pub trait PropertyCompiler {
    /// Compile the records into a table, or fail on the first authoring defect.
    ///
    /// No partial table is produced on error.
    fn compile(&self, records: Vec<PropertyRecord>) -> CompileResult<PropertyTable>;

    /// Run every check without keeping the result
    fn check(&self, records: Vec<PropertyRecord>) -> CompileResult<()> {
        self.compile(records).map(|_| ())
    }
}
