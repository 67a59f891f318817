use anyhow::{ anyhow, Result };
use std::path::Path;

use csspropc::CompilerConfig;

use crate::cli::commands::compile_file;
use crate::cli::ui;
use crate::cli::OutputFormat;

/// Print the compiled entry for a property or alias
pub fn execute(config: &CompilerConfig, input: &Path, name: &str, format: OutputFormat) -> Result<()> {
    let table = compile_file(config, input)?;
    let property = table
        .find_by_name(name)
        .ok_or_else(|| anyhow!("No property named '{}' in {}", name, input.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(property)?),
        OutputFormat::Text => {
            ui::print_property(property);
            if !property.is_alias() {
                if let Some(alias) = table.alias_of(&property.name) {
                    ui::print_result("Aliased by", &alias.name);
                }
            }
        }
    }

    Ok(())
}
