use anyhow::Result;

use csspropc::config::{ max_base_properties, ReservedSlot, ALIAS_OFFSET, FIRST_ENUM_VALUE, PROPERTY_CAPACITY };

use crate::cli::ui;
use crate::cli::OutputFormat;

/// List reserved slots and the numeric layout of the identifier space
pub fn execute(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let slots: Vec<_> = ReservedSlot::ALL
                .iter()
                .map(|slot| serde_json::json!({ "symbol": slot.symbol(), "value": slot.value() }))
                .collect();
            let layout = serde_json::json!({
                "reserved": slots,
                "first_enum_value": FIRST_ENUM_VALUE,
                "property_capacity": PROPERTY_CAPACITY,
                "alias_offset": ALIAS_OFFSET,
                "max_properties": max_base_properties(),
            });
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        OutputFormat::Text => {
            ui::print_header("Reserved Slots");
            for slot in ReservedSlot::ALL {
                ui::print_result(&slot.value().to_string(), slot.symbol());
            }
            ui::print_header("Layout");
            ui::print_result("First property value", &FIRST_ENUM_VALUE.to_string());
            ui::print_result("Property capacity", &PROPERTY_CAPACITY.to_string());
            ui::print_result("Alias offset", &ALIAS_OFFSET.to_string());
            ui::print_result("Maximum properties", &max_base_properties().to_string());
        }
    }
    Ok(())
}
