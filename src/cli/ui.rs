use colored::*;
use console::Term;
use textwrap::wrap;

use csspropc::{ CompiledProperty, PropertyTable };

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(10).max(40)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a one-line summary of a compiled table
pub fn print_table_summary(table: &PropertyTable) {
    print_result("Properties", &table.base_properties().len().to_string());
    print_result("Aliases", &table.aliases().len().to_string());
    let range = match table.last_enum_value() {
        Some(last) => format!("{}..={}", table.first_enum_value(), last),
        None => "empty".to_string(),
    };
    print_result("Enum values", &range);
    let internal = table.base_properties().iter().filter(|p| p.is_internal).count();
    print_result("Internal", &internal.to_string());
}

/// Print every field of one compiled entry
pub fn print_property(property: &CompiledProperty) {
    print_header(&property.name);
    print_result("Id", &property.property_id);
    print_result("Enum value", &property.enum_value.to_string());
    print_result("Priority", &property.priority.to_string());
    if let Some(target) = &property.alias_for {
        print_result("Alias for", &target.cyan().to_string());
    }
    print_result("UpperCamel", &property.upper_camel_name);
    print_result("lowerCamel", &property.lower_camel_name);
    print_result("Property", &property.is_property.to_string());
    print_result("Descriptor", &property.is_descriptor.to_string());
    print_result("Internal", &property.is_internal.to_string());
    for (key, value) in &property.attributes {
        print_result(key, &value.to_string());
    }
}
