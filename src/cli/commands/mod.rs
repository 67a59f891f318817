pub mod check;
pub mod compile;
pub mod reserved;
pub mod show;

use std::path::Path;

use csspropc::{
    CompileResult,
    CompilerConfig,
    CssPropertyCompiler,
    FileRecordSource,
    PropertyCompiler,
    PropertyTable,
    RecordSource,
};
use log::info;

/// Load records from `input` and compile them with `config`
pub fn compile_file(config: &CompilerConfig, input: &Path) -> CompileResult<PropertyTable> {
    let source = FileRecordSource::new(input);
    let records = source.load()?;
    info!("Compiling records from {}", source.describe());
    CssPropertyCompiler::new(config.clone()).compile(records)
}
