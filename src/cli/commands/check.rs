use anyhow::Result;
use std::path::Path;

use csspropc::CompilerConfig;

use crate::cli::commands::compile_file;
use crate::cli::ui;
use crate::cli::OutputFormat;

/// Validation command; fails with the first authoring defect found
pub fn execute(config: &CompilerConfig, input: &Path, format: OutputFormat) -> Result<()> {
    let table = compile_file(config, input)?;

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "valid": true,
                "properties": table.base_properties().len(),
                "aliases": table.aliases().len(),
            });
            println!("{}", report);
        }
        OutputFormat::Text => {
            ui::print_success(&format!("{} is valid", input.display()));
            ui::print_table_summary(&table);
        }
    }

    Ok(())
}
