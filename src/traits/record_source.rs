use crate::errors::CompileResult;
use crate::models::PropertyRecord;

/// Supplies property records to the compiler
pub trait RecordSource {
    /// Human-readable origin of the records, used in log and error messages
    fn describe(&self) -> String;

    /// Load every record, in authored order
    fn load(&self) -> CompileResult<Vec<PropertyRecord>>;
}

impl RecordSource for Vec<PropertyRecord> {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.len())
    }

    fn load(&self) -> CompileResult<Vec<PropertyRecord>> {
        Ok(self.clone())
    }
}
