use anyhow::{ Context, Result };
use std::fs;
use std::path::Path;

use csspropc::CompilerConfig;

use crate::cli::commands::compile_file;
use crate::cli::ui;
use crate::cli::OutputFormat;

/// Table compilation command
pub fn execute(
    config: &CompilerConfig,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat
) -> Result<()> {
    let table = compile_file(config, input)?;
    let json = serde_json::to_string_pretty(&table)?;

    if let Some(output) = output {
        fs::write(output, &json).with_context(|| format!("Failed to write {}", output.display()))?;
    }

    match format {
        OutputFormat::Json if output.is_none() => println!("{}", json),
        OutputFormat::Json => {}
        OutputFormat::Text => {
            ui::print_header("Compiled Property Table");
            ui::print_table_summary(&table);
            if table.is_empty() {
                ui::print_warning("No properties were defined");
            }
            if let Some(output) = output {
                ui::print_success(&format!("Table written to {}", output.display()));
            }
        }
    }

    Ok(())
}
